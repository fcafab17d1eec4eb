use super::frames::FrameStack;

/// Expression text longer than this is rejected at the checked seams.
pub const MAX_EXPR_LEN: usize = 64;

/// Evaluate a space-delimited integer expression left to right.
///
/// Tokens alternate operand, operator, operand, ... with only `+` and `-`
/// as operators and no precedence or grouping. An operand is a literal
/// integer when it starts with a digit (or `-` then a digit), otherwise a
/// variable read. Unknown variables and malformed tokens evaluate to 0;
/// this function never fails.
pub fn eval_expr(expr: &str, frames: &FrameStack) -> i32 {
    let mut tokens = expr.split_whitespace();

    let mut result = match tokens.next() {
        Some(tok) => operand_value(tok, frames),
        None => return 0,
    };

    while let Some(op) = tokens.next() {
        let Some(operand) = tokens.next() else {
            break; // trailing operator with nothing to apply it to
        };
        let value = operand_value(operand, frames);
        match op.chars().next() {
            Some('+') => result = result.wrapping_add(value),
            Some('-') => result = result.wrapping_sub(value),
            _ => {}
        }
    }

    result
}

fn operand_value(token: &str, frames: &FrameStack) -> i32 {
    let mut chars = token.chars();
    let first = chars.next();
    let looks_numeric = match first {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };
    if looks_numeric {
        token.parse::<i32>().unwrap_or(0)
    } else {
        frames.get(token).unwrap_or(0)
    }
}
