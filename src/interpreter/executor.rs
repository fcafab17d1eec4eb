use log::warn;

use super::eval::eval_expr;
use super::Interpreter;
use crate::error::Result;
use crate::event::{Event, EventQueue, MouseButton};
use crate::parser::{Command, Hotkey};

impl Interpreter {
    /// Execute one command: variable writes go to the store, input actions
    /// become queued events. Nothing here touches the synthesis boundary;
    /// dispatch must only ever enqueue.
    pub fn execute_command(&mut self, cmd: &Command, queue: &mut EventQueue) -> Result<()> {
        match cmd {
            Command::SetVar { name, expr } => {
                let value = eval_expr(expr, self.frames());
                self.set(name, value)?;
            }
            Command::CursorMove {
                expr_x,
                expr_y,
                duration,
            } => {
                let x = eval_expr(expr_x, self.frames());
                let y = eval_expr(expr_y, self.frames());
                queue.push(Event::MouseMove {
                    x,
                    y,
                    duration: *duration,
                })?;
            }
            Command::MouseClick {
                expr_x,
                expr_y,
                click_kind,
            } => {
                let x = eval_expr(expr_x, self.frames());
                let y = eval_expr(expr_y, self.frames());
                queue.push(Event::MouseClick {
                    x,
                    y,
                    button: button_for(*click_kind),
                })?;
            }
            // Parsed and carried, but not yet wired to synthesis.
            Command::KeyPress { .. } | Command::KeyRelease { .. } => {}
        }
        Ok(())
    }

    /// Run one hotkey invocation: a fresh local frame is pushed, every
    /// command runs in order, and the frame is popped. Locals never leak
    /// into the next invocation; writes to pre-existing outer variables do.
    pub fn run_hotkey(&mut self, hotkey: &Hotkey, queue: &mut EventQueue) -> Result<()> {
        self.push_frame()?;
        for cmd in &hotkey.commands {
            // A failed command is reported but never stops the list.
            if let Err(e) = self.execute_command(cmd, queue) {
                warn!("hotkey `{}`: {}", hotkey.label, e);
            }
        }
        self.pop_frame();
        Ok(())
    }
}

fn button_for(click_kind: f32) -> MouseButton {
    if click_kind as i32 == 1 {
        MouseButton::Right
    } else {
        MouseButton::Left
    }
}
