//! Player intents: the already-parsed input a session accepts.
//!
//! Each intent answers one kind of prompt:
//! - `Play` / `Discard`: the regular turn
//! - `NightmareChoice`: a nightmare was drawn
//! - `SelectKey` / `SelectDoor`: the chosen remedy needs a target
//! - `OrderProphecy`: a key was discarded
//!
//! ```
//! use onirim::core::Intent;
//! use onirim::rules::Remedy;
//!
//! let play = Intent::Play(3);
//! let remedy = Intent::NightmareChoice(Remedy::HandDiscard);
//! let prophecy = Intent::OrderProphecy("3,1,2,4,5".into());
//!
//! assert_eq!(play.name(), "play");
//! assert_ne!(remedy, prophecy);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::rules::Remedy;

/// One player decision.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Play the card at a 1-indexed hand position into the labyrinth.
    Play(usize),
    /// Discard the card at a 1-indexed hand position.
    Discard(usize),
    /// Answer a nightmare.
    NightmareChoice(Remedy),
    /// Pick the key to banish, by hand position.
    SelectKey(usize),
    /// Pick the door color to give back.
    SelectDoor(Color),
    /// Comma-separated prophecy ordering, e.g. `"3,1,2,4,5"`.
    OrderProphecy(String),
}

impl Intent {
    /// Short name for errors and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Play(_) => "play",
            Intent::Discard(_) => "discard",
            Intent::NightmareChoice(_) => "nightmare choice",
            Intent::SelectKey(_) => "key selection",
            Intent::SelectDoor(_) => "door selection",
            Intent::OrderProphecy(_) => "prophecy ordering",
        }
    }
}

/// An accepted intent with its position in the game.
///
/// Replaying a session's records against a session built from the same
/// config reproduces it exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Turn the intent was accepted in.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,

    pub intent: Intent,
}

impl IntentRecord {
    #[must_use]
    pub fn new(turn: u32, sequence: u32, intent: Intent) -> Self {
        Self { turn, sequence, intent }
    }
}
