//! Core engine types: configuration, errors, intents, events, RNG.

pub mod config;
pub mod error;
pub mod event;
pub mod intent;
pub mod rng;

pub use config::{SessionConfig, HAND_SIZE, PROPHECY_SIZE, PURGE_SIZE};
pub use error::{EngineError, EngineResult};
pub use event::GameEvent;
pub use intent::{Intent, IntentRecord};
pub use rng::GameRng;
