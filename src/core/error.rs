//! Engine errors.
//!
//! | Error | Recoverable |
//! |-------|-------------|
//! | [`EngineError::InvalidPosition`] | Yes |
//! | [`EngineError::InvalidChoice`] | Yes |
//! | [`EngineError::MalformedOrdering`] | Yes |
//! | [`EngineError::UnexpectedIntent`] | Yes |
//! | [`EngineError::EmptySupply`] | No |
//! | [`EngineError::DoorNotFound`] | No |
//! | [`EngineError::GameOver`] | No |
//! | [`EngineError::InvalidConfig`] | No |
//!
//! A recoverable error means the session is untouched and still waiting on
//! the same prompt, so the caller should ask again. `EmptySupply` never
//! reaches a `Session` caller: the session turns it into a defeat.

use thiserror::Error;

use crate::cards::Color;

/// Errors produced by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Hand position out of range, or a card the labyrinth won't accept.
    #[error("invalid hand position {position}: {reason}")]
    InvalidPosition { position: usize, reason: &'static str },

    /// The draw pile ran out.
    #[error("the draw pile is empty")]
    EmptySupply,

    /// A nightmare remedy, key or door that isn't currently on offer.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Prophecy ordering text that doesn't name every revealed card once.
    #[error("malformed prophecy ordering [{input}]: {reason}")]
    MalformedOrdering { input: String, reason: String },

    /// No door of this color left in the draw pile.
    #[error("no {0} door left in the draw pile")]
    DoorNotFound(Color),

    /// The intent doesn't answer the pending prompt.
    #[error("expected {expected}, got {got}")]
    UnexpectedIntent { expected: &'static str, got: &'static str },

    /// The session already reached victory or defeat.
    #[error("the game is over")]
    GameOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Whether asking the player again can succeed.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidPosition { .. }
                | EngineError::InvalidChoice(_)
                | EngineError::MalformedOrdering { .. }
                | EngineError::UnexpectedIntent { .. }
        )
    }
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
