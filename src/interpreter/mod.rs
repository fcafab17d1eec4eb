mod eval;
mod executor;
mod frames;

use std::fmt::Write as _;

pub use eval::{eval_expr, MAX_EXPR_LEN};
pub use frames::{Frame, FrameStack, Variable, MAX_FRAMES, MAX_NAME_LEN, MAX_VARS_PER_FRAME};

use crate::error::{Error, Result};

/// Owns the frame stack and evaluates script commands against it.
///
/// Constructed once at startup with the global frame in place; passed
/// explicitly to the parser (declarations) and the dispatcher (execution).
#[derive(Debug, Default)]
pub struct Interpreter {
    frames: FrameStack,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            frames: FrameStack::new(),
        }
    }

    pub fn frames(&self) -> &FrameStack {
        &self.frames
    }

    pub fn push_frame(&mut self) -> Result<()> {
        self.frames.push_frame()
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop_frame();
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.frames.get(name)
    }

    pub fn set(&mut self, name: &str, value: i32) -> Result<()> {
        self.frames.set(name, value)
    }

    pub fn set_global(&mut self, name: &str, value: i32) -> Result<()> {
        self.frames.set_global(name, value)
    }

    /// Length-checked expression evaluation for callers handing in text
    /// from outside the parser.
    pub fn eval(&self, expr: &str) -> Result<i32> {
        if expr.len() > MAX_EXPR_LEN {
            return Err(Error::ExpressionTooLong { max: MAX_EXPR_LEN });
        }
        Ok(eval_expr(expr, &self.frames))
    }

    /// Restore the initial single-empty-global-frame state.
    pub fn reset(&mut self) {
        self.frames.reset();
    }

    /// Formatted listing of every frame's variables.
    pub fn dump_vars(&self) -> String {
        let mut out = String::from("=== VARIABLES ===\n");
        for (i, frame) in self.frames.frames().iter().enumerate() {
            if i == 0 {
                out.push_str("[globals]\n");
            } else {
                let _ = writeln!(out, "[frame {}]", i);
            }
            for var in frame.iter() {
                let _ = writeln!(out, "  {} = {}", var.name, var.value);
            }
        }
        out.push_str("=================");
        out
    }
}
