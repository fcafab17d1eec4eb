use log::debug;

use super::types::Command;
use crate::interpreter::{MAX_EXPR_LEN, MAX_NAME_LEN};

/// Check if a line carries no directive: blank, or `#` comment.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse one command line. Returns `None` for malformed or unrecognized
/// lines; the caller drops them and keeps parsing (permissive policy).
pub fn parse_command(line: &str) -> Option<Command> {
    if let Some(rest) = line.strip_prefix("CursorMove,") {
        let (expr_x, expr_y, trailing) = split_coords(rest)?;
        return Some(Command::CursorMove {
            expr_x,
            expr_y,
            duration: trailing,
        });
    }

    if let Some(rest) = line.strip_prefix("MouseClick,") {
        let (expr_x, expr_y, trailing) = split_coords(rest)?;
        return Some(Command::MouseClick {
            expr_x,
            expr_y,
            click_kind: trailing,
        });
    }

    if let Some(rest) = line.strip_prefix("KeyPress,") {
        return rest
            .trim_start()
            .chars()
            .next()
            .map(|key| Command::KeyPress { key });
    }

    if let Some(rest) = line.strip_prefix("KeyRelease,") {
        return rest
            .trim_start()
            .chars()
            .next()
            .map(|key| Command::KeyRelease { key });
    }

    if let Some(rest) = line.strip_prefix("set ") {
        let (name, expr) = rest.split_once('=')?;
        let name = name.trim();
        let expr = expr.trim();
        if name.is_empty() || expr.is_empty() || name.contains(char::is_whitespace) {
            return None;
        }
        if name.len() > MAX_NAME_LEN {
            debug!("skipping set: name `{}` too long", name);
            return None;
        }
        if expr.len() > MAX_EXPR_LEN {
            debug!("skipping set: expression too long ({} chars)", expr.len());
            return None;
        }
        return Some(Command::SetVar {
            name: name.to_string(),
            expr: expr.to_string(),
        });
    }

    None
}

/// Split `<expr>, <expr>[, <float>]`; the trailing float defaults to 0.
fn split_coords(rest: &str) -> Option<(String, String, f32)> {
    let mut fields = rest.splitn(3, ',');
    let expr_x = fields.next()?.trim();
    let expr_y = fields.next()?.trim();
    if expr_x.is_empty() || expr_y.is_empty() {
        return None;
    }
    if expr_x.len() > MAX_EXPR_LEN || expr_y.len() > MAX_EXPR_LEN {
        debug!("skipping command: coordinate expression too long");
        return None;
    }
    let trailing = fields
        .next()
        .and_then(|f| f.trim().parse::<f32>().ok())
        .unwrap_or(0.0);
    Some((expr_x.to_string(), expr_y.to_string(), trailing))
}
