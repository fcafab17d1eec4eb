use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hard cap on pending events; pushing past it drops the event.
pub const MAX_QUEUE_EVENTS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

/// A fully evaluated, synthesis-ready action. Commands reference variables;
/// events carry the resolved coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    MouseUp { x: i32, y: i32, button: MouseButton },
    MouseDown { x: i32, y: i32, button: MouseButton },
    MouseMove { x: i32, y: i32, duration: f32 },
    MouseClick { x: i32, y: i32, button: MouseButton },
}

/// Buffer of pending events between hotkey dispatch and synthesis.
///
/// Drain order is LIFO: `drain_one` returns the most recently pushed event.
/// This matches the original engine's behavior and is relied on by scripts
/// written against it; do not switch to FIFO without flagging the change.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event. A full queue reports `QueueFull` and drops the
    /// event; the caller treats this as a transient synthesis drop.
    pub fn push(&mut self, event: Event) -> Result<()> {
        if self.events.len() >= MAX_QUEUE_EVENTS {
            warn!("event queue full, dropping {:?}", event);
            return Err(Error::QueueFull {
                max: MAX_QUEUE_EVENTS,
            });
        }
        self.events.push(event);
        Ok(())
    }

    /// Remove and return the most recently pushed event, or `None` when the
    /// queue is drained. `None` is never forwarded to synthesis.
    pub fn drain_one(&mut self) -> Option<Event> {
        self.events.pop()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard all pending events. Part of engine teardown.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
