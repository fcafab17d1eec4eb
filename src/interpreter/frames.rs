use crate::error::{Error, Result};

/// Variable names longer than this are rejected rather than truncated.
pub const MAX_NAME_LEN: usize = 32;
/// Depth limit of the frame stack, globals included.
pub const MAX_FRAMES: usize = 256;
/// Per-frame variable count limit.
pub const MAX_VARS_PER_FRAME: usize = 256;

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub value: i32,
}

/// One scope of named integers, insertion-ordered, unique by name.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    vars: Vec<Variable>,
}

impl Frame {
    fn get(&self, name: &str) -> Option<i32> {
        self.vars.iter().find(|v| v.name == name).map(|v| v.value)
    }

    fn set_existing(&mut self, name: &str, value: i32) -> bool {
        if let Some(var) = self.vars.iter_mut().find(|v| v.name == name) {
            var.value = value;
            return true;
        }
        false
    }

    fn create(&mut self, name: &str, value: i32) -> Result<()> {
        if name.len() > MAX_NAME_LEN {
            return Err(Error::NameTooLong {
                name: name.to_string(),
                max: MAX_NAME_LEN,
            });
        }
        if self.vars.len() >= MAX_VARS_PER_FRAME {
            return Err(Error::VariableStoreFull {
                max: MAX_VARS_PER_FRAME,
            });
        }
        self.vars.push(Variable {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }
}

/// The two-level variable store: frame 0 holds globals and is never popped;
/// frames above it are transient locals, one per hotkey invocation.
#[derive(Debug)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self) -> Result<()> {
        if self.frames.len() >= MAX_FRAMES {
            return Err(Error::FrameStackOverflow { max: MAX_FRAMES });
        }
        self.frames.push(Frame::default());
        Ok(())
    }

    /// Remove the top local frame. Popping with only globals left is a
    /// no-op, never an error.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Read a variable: locals top-down first, then globals.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.frames.iter().rev().find_map(|f| f.get(name))
    }

    /// Assign a variable. The nearest existing binding is mutated in place
    /// (locals before globals); a new variable lands in the current frame.
    /// An existing binding is never shadowed at another scope level.
    pub fn set(&mut self, name: &str, value: i32) -> Result<()> {
        for frame in self.frames.iter_mut().rev() {
            if frame.set_existing(name, value) {
                return Ok(());
            }
        }
        self.frames
            .last_mut()
            .expect("frame 0 always exists")
            .create(name, value)
    }

    /// Assign in the global frame regardless of the current frame.
    pub fn set_global(&mut self, name: &str, value: i32) -> Result<()> {
        let globals = &mut self.frames[0];
        if globals.set_existing(name, value) {
            return Ok(());
        }
        globals.create(name, value)
    }

    /// Drop all local frames and global variables, back to the initial
    /// single-empty-global-frame state.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::default());
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}
