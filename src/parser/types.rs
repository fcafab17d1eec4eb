use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// A parsed, not-yet-executed action. Coordinate and value expressions are
/// kept as raw text and evaluated when the command runs, so a command may
/// read variables mutated earlier in the same hotkey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    CursorMove {
        expr_x: String,
        expr_y: String,
        duration: f32,
    },
    KeyPress {
        key: char,
    },
    KeyRelease {
        key: char,
    },
    MouseClick {
        expr_x: String,
        expr_y: String,
        click_kind: f32,
    },
    SetVar {
        name: String,
        expr: String,
    },
}

/// A symbolic key label bound to an ordered list of commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotkey {
    pub label: String,
    pub commands: Vec<Command>,
}

/// All hotkeys of one script file, in file order. Two hotkeys may share a
/// label; both exist and both fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub hotkeys: Vec<Hotkey>,
}

impl Script {
    /// Re-emit the script in its textual grammar. Global declarations are
    /// applied at parse time and not stored, so only hotkeys appear.
    pub fn to_script_text(&self) -> String {
        let mut out = String::new();
        for hk in &self.hotkeys {
            let _ = writeln!(out, "hotkey {} ->", hk.label);
            for cmd in &hk.commands {
                match cmd {
                    Command::CursorMove {
                        expr_x,
                        expr_y,
                        duration,
                    } => {
                        let _ = writeln!(out, "CursorMove, {}, {}, {}", expr_x, expr_y, duration);
                    }
                    Command::KeyPress { key } => {
                        let _ = writeln!(out, "KeyPress, {}", key);
                    }
                    Command::KeyRelease { key } => {
                        let _ = writeln!(out, "KeyRelease, {}", key);
                    }
                    Command::MouseClick {
                        expr_x,
                        expr_y,
                        click_kind,
                    } => {
                        let _ = writeln!(out, "MouseClick, {}, {}, {}", expr_x, expr_y, click_kind);
                    }
                    Command::SetVar { name, expr } => {
                        let _ = writeln!(out, "set {} = {}", name, expr);
                    }
                }
            }
        }
        out
    }
}
