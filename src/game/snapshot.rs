//! Read-only views of a session for rendering and decision making.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Color};
use crate::rules::Remedy;
use crate::zones::{DoorCounts, Streak};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    /// Every door color reached the cap.
    Victory,
    /// A draw found the supply empty.
    Defeat,
}

impl Status {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// The decision the session is waiting for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Regular turn: `Play` or `Discard`.
    PlayOrDiscard,

    /// A nightmare was drawn; pick one of `remedies`.
    Nightmare { remedies: SmallVec<[Remedy; 4]> },

    /// Pick a key to banish, by hand position.
    SelectKey { positions: SmallVec<[usize; 5]> },

    /// Pick a door color to give back.
    SelectDoor { colors: SmallVec<[Color; 4]> },

    /// Order the revealed cards, position 1 first.
    OrderProphecy { revealed: Vec<Card> },
}

impl Prompt {
    /// Short name for logs and rendering.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Prompt::PlayOrDiscard => "play or discard",
            Prompt::Nightmare { .. } => "nightmare",
            Prompt::SelectKey { .. } => "select key",
            Prompt::SelectDoor { .. } => "select door",
            Prompt::OrderProphecy { .. } => "order prophecy",
        }
    }
}

/// Everything a shell needs to draw the table.
///
/// The labyrinth is an `im::Vector`, so taking a snapshot every step
/// doesn't copy the played cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: u32,
    pub status: Status,
    pub doors: DoorCounts,
    pub labyrinth: Vector<Card>,
    pub streak: Streak,
    /// Hand in position order; position 1 is index 0.
    pub hand: Vec<Card>,
    pub draw_pile_len: usize,
    pub discard_len: usize,
    /// `None` once the game is over.
    pub prompt: Option<Prompt>,
}
