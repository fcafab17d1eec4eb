use log::{debug, trace};

use crate::event::{Event, EventQueue, MouseButton};
use crate::interpreter::Interpreter;
use crate::keys::{lookup_keycode, KeyCode};
use crate::parser::Script;

/// The platform synthesis boundary. The engine never calls this from the
/// dispatch path; only `tick` forwards queued events here.
pub trait Synthesizer {
    fn mouse_move(&mut self, x: i32, y: i32, duration: f32);
    fn mouse_down(&mut self, x: i32, y: i32, button: MouseButton);
    fn mouse_up(&mut self, x: i32, y: i32, button: MouseButton);
}

/// A raw signal from the capture backend. Only key-down signals dispatch
/// hotkeys; everything else passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Other,
}

/// Owns the parsed script, the interpreter, and the event queue, and
/// serializes the capture and replay halves of the pipeline.
///
/// Capture and replay are decoupled on purpose: synthesized input can be
/// observed by the same interception mechanism that triggers hotkeys, so
/// dispatch only ever enqueues and `tick` alone talks to the synthesizer.
pub struct Engine {
    script: Script,
    interpreter: Interpreter,
    queue: EventQueue,
}

impl Engine {
    pub fn new(script: Script, interpreter: Interpreter) -> Self {
        Self {
            script,
            interpreter,
            queue: EventQueue::new(),
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Route one capture signal. Non-key-down signals are ignored.
    pub fn handle_signal(&mut self, signal: InputSignal) -> usize {
        match signal {
            InputSignal::KeyDown(code) => self.dispatch(code),
            InputSignal::KeyUp(_) | InputSignal::Other => 0,
        }
    }

    /// Run every hotkey whose label resolves to `code`, in script order,
    /// each with its own local frame. Returns how many hotkeys fired.
    pub fn dispatch(&mut self, code: KeyCode) -> usize {
        let mut fired = 0;
        for hotkey in &self.script.hotkeys {
            if lookup_keycode(&hotkey.label) != Some(code) {
                continue;
            }
            trace!("dispatching hotkey `{}` for code {}", hotkey.label, code);
            if let Err(e) = self.interpreter.run_hotkey(hotkey, &mut self.queue) {
                debug!("hotkey `{}` did not run: {}", hotkey.label, e);
                continue;
            }
            fired += 1;
        }
        fired
    }

    /// Remove the most recently queued event, or `None` when drained.
    pub fn drain_one(&mut self) -> Option<Event> {
        self.queue.drain_one()
    }

    /// One replay step: drain one event and forward it to the synthesizer.
    /// A click synthesizes button-down then button-up at the same point.
    /// Returns false when the queue was empty and nothing was forwarded.
    pub fn tick(&mut self, synth: &mut dyn Synthesizer) -> bool {
        let Some(event) = self.queue.drain_one() else {
            return false;
        };
        match event {
            Event::MouseMove { x, y, duration } => synth.mouse_move(x, y, duration),
            Event::MouseDown { x, y, button } => synth.mouse_down(x, y, button),
            Event::MouseUp { x, y, button } => synth.mouse_up(x, y, button),
            Event::MouseClick { x, y, button } => {
                synth.mouse_down(x, y, button);
                synth.mouse_up(x, y, button);
            }
        }
        true
    }

    /// Teardown counterpart of startup: discard pending events and restore
    /// the variable store to its initial single-global-frame state.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.interpreter.reset();
    }
}
