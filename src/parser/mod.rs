mod commands;
mod script;
mod types;

pub use commands::{is_skippable, parse_command};
pub use script::{parse_script, read_script_lines};
pub use types::{Command, Hotkey, Script};
