use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::commands::{is_skippable, parse_command};
use super::types::{Hotkey, Script};
use crate::error::Result;
use crate::interpreter::Interpreter;

/// Read a script file into lines. A missing or unreadable file is fatal at
/// startup: the caller must not proceed to dispatch without a script.
pub fn read_script_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Parse an ordered sequence of script lines into a [`Script`].
///
/// Variable declarations (`varint`, `global varint`) take effect on the
/// interpreter immediately as they are encountered; they are not stored in
/// the returned script. Malformed lines are skipped, never aborting the
/// parse. Hotkey and command order match file order.
pub fn parse_script(lines: &[&str], interp: &mut Interpreter) -> Script {
    let mut script = Script::default();
    let mut current: Option<Hotkey> = None;

    for line in lines {
        if is_skippable(line) {
            continue;
        }
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("global varint") {
            if let Some((name, value)) = parse_declaration(rest) {
                if let Err(e) = interp.set_global(&name, value) {
                    warn!("global declaration `{}` rejected: {}", name, e);
                }
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("varint") {
            if let Some((name, value)) = parse_declaration(rest) {
                if let Err(e) = interp.set(&name, value) {
                    warn!("declaration `{}` rejected: {}", name, e);
                }
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("hotkey") {
            // Close out the previous hotkey before opening the next one.
            if let Some(hk) = current.take() {
                script.hotkeys.push(hk);
            }
            let label = match rest.split_once("->") {
                Some((label, _)) => label.trim(),
                None => rest.trim(),
            };
            current = Some(Hotkey {
                label: label.to_string(),
                commands: Vec::new(),
            });
            continue;
        }

        if let Some(ref mut hk) = current {
            match parse_command(trimmed) {
                Some(cmd) => hk.commands.push(cmd),
                None => debug!("skipping unrecognized line: {}", trimmed),
            }
        }
        // Lines before any hotkey that are not declarations are ignored.
    }

    if let Some(hk) = current.take() {
        script.hotkeys.push(hk);
    }

    script
}

/// Parse ` <name> = <int>` after a `varint` keyword. Trailing tokens are
/// ignored, matching the permissive reader this grammar grew up with.
fn parse_declaration(rest: &str) -> Option<(String, i32)> {
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?;
    if tokens.next()? != "=" {
        return None;
    }
    let value = tokens.next()?.parse::<i32>().ok()?;
    Some((name.to_string(), value))
}
