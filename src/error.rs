use std::io;

use thiserror::Error;

/// Failures surfaced by the engine. Parse-level skips and evaluation
/// fallbacks stay silent by design; only bound violations and I/O reach
/// this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("variable store is full (frame holds the maximum of {max} variables)")]
    VariableStoreFull { max: usize },

    #[error("frame stack overflow (depth limit {max})")]
    FrameStackOverflow { max: usize },

    #[error("event queue is full ({max} pending events); event dropped")]
    QueueFull { max: usize },

    #[error("variable name `{name}` exceeds {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("expression exceeds {max} characters")]
    ExpressionTooLong { max: usize },

    #[error("failed to read script: {0}")]
    Script(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
