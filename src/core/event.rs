//! Game events.
//!
//! Every call to `Session::submit` returns the events it caused, in order,
//! so a shell can narrate what happened without diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::game::Status;
use crate::rules::Remedy;

/// Something that happened during a step of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card went from the hand into the labyrinth.
    CardPlayed(Card),

    /// A completed streak unlocked a door.
    DoorUnlocked {
        color: Color,
        /// Whether the door card was found in the draw pile.
        door_removed: bool,
    },

    /// A completed streak for a color whose doors are all unlocked.
    StreakWasted(Color),

    /// A card from the hand went to the discard pile.
    CardDiscarded(Card),

    /// Cards revealed for a prophecy, position 1 first.
    ProphecyRevealed(Vec<Card>),

    /// The prophecy ordering was applied.
    ProphecyResolved { discarded: Card },

    /// A nightmare surfaced during a draw.
    NightmareDrawn,

    /// The player picked a remedy.
    RemedyChosen(Remedy),

    /// A key was banished by the key remedy.
    KeyBanished(Card),

    /// The hand remedy threw these cards away.
    HandDiscarded(Vec<Card>),

    /// The five-card remedy discarded this card from the draw pile.
    CardPurged(Card),

    /// The door remedy gave back a door of this color.
    DoorDiscarded(Color),

    /// This many limbo cards went back into the draw pile.
    LimboDrained(usize),

    /// A draw found the pile empty.
    SupplyExhausted,

    /// The session reached a terminal status.
    GameOver(Status),
}
