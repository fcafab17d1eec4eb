//! # macrokey
//!
//! A hotkey macro engine: a line-oriented DSL binds symbolic keys to
//! sequences of synthesized input actions with integer variables and
//! left-to-right arithmetic.
//!
//! The pipeline: script text is parsed once into a [`Script`]; each
//! key-down signal dispatches matching hotkeys, whose commands mutate the
//! two-level variable store and enqueue [`Event`]s; a separate tick drains
//! the queue into a [`Synthesizer`], the platform boundary.

pub mod engine;
pub mod error;
pub mod event;
pub mod interpreter;
pub mod keys;
pub mod parser;

pub use engine::{Engine, InputSignal, Synthesizer};
pub use error::{Error, Result};
pub use event::{Event, EventQueue, MouseButton};
pub use interpreter::Interpreter;
pub use keys::{lookup_keycode, KeyCode};
pub use parser::{parse_script, read_script_lines, Command, Hotkey, Script};
