//! # onirim
//!
//! Rules engine for Onirim, the solitaire card game: build a labyrinth of
//! cards, unlock eight doors, survive the nightmares.
//!
//! ## Design Principles
//!
//! 1. **One Session, No I/O**: All state lives in a `Session`. It never
//!    reads input or prints; a shell submits parsed `Intent`s and renders
//!    the returned `GameEvent`s and `Snapshot`.
//!
//! 2. **Resumable, Not Recursive**: Nightmares and prophecies interrupt a
//!    turn. Each interruption is a task on an explicit pending stack, so the
//!    session can stop at any prompt and pick up where it left off.
//!
//! 3. **Deterministic**: Every shuffle goes through one seeded `GameRng`.
//!    The same seed and the same intents replay the same game.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, intents, events, RNG
//! - `cards`: Card values and deck composition
//! - `zones`: Supply, hand, labyrinth and door registry
//! - `rules`: Nightmare remedies and prophecy orderings
//! - `stack`: Pending resolution stack
//! - `game`: Session, snapshots and the play-out driver
//!
//! ## Example
//!
//! ```
//! use onirim::{play_out, RandomPlayer, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::new().with_seed(1)).unwrap();
//! let outcome = play_out(&mut session, &mut RandomPlayer::new(1), 10_000).unwrap();
//!
//! assert!(outcome.status.is_terminal());
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod stack;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult,
    SessionConfig, GameRng,
    Intent, IntentRecord,
    GameEvent,
};

pub use crate::cards::{Card, Color, Symbol, DeckComposition};

pub use crate::zones::{
    Supply, Hand, RefillMode, RefillProgress,
    Labyrinth, Streak, DoorCounts, DoorRegistry, DoorUnlock,
};

pub use crate::rules::{Remedy, RemedySet, ProphecyOrder};

pub use crate::stack::{PendingStack, Task};

pub use crate::game::{
    Session, Layout,
    Snapshot, Prompt, Status,
    Player, RandomPlayer, GreedyPlayer, PlayOutcome, play_out,
};
