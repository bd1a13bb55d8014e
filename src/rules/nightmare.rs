//! Nightmare remedies.
//!
//! A nightmare drawn during play must be answered with exactly one remedy.
//! Which remedies are on offer depends on the hand and the door registry:
//!
//! | Remedy | Offered when |
//! |--------|--------------|
//! | `KeyDiscard` | the hand holds a key |
//! | `HandDiscard` | always |
//! | `FiveCardDiscard` | always |
//! | `DoorDiscard` | some door is unlocked |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::zones::{DoorRegistry, Hand};

/// One way to get rid of a nightmare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remedy {
    /// Banish a key from hand.
    KeyDiscard,
    /// Throw the whole hand away and draw a new one.
    HandDiscard,
    /// Discard the top five location cards of the draw pile.
    FiveCardDiscard,
    /// Give back an unlocked door.
    DoorDiscard,
}

impl Remedy {
    /// Every remedy, in menu order.
    pub const ALL: [Remedy; 4] = [
        Remedy::KeyDiscard,
        Remedy::HandDiscard,
        Remedy::FiveCardDiscard,
        Remedy::DoorDiscard,
    ];

    /// Single-letter menu tag.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Remedy::KeyDiscard => 'K',
            Remedy::HandDiscard => 'H',
            Remedy::FiveCardDiscard => 'C',
            Remedy::DoorDiscard => 'D',
        }
    }

    /// Parse a menu tag, case-insensitive.
    #[must_use]
    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.tag() == tag.to_ascii_uppercase())
    }
}

impl std::fmt::Display for Remedy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Remedy::KeyDiscard => "discard a key",
            Remedy::HandDiscard => "discard your hand",
            Remedy::FiveCardDiscard => "discard 5 cards",
            Remedy::DoorDiscard => "discard a door",
        };
        f.write_str(text)
    }
}

/// The remedies on offer for one nightmare.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedySet(SmallVec<[Remedy; 4]>);

impl RemedySet {
    /// Remedies available given the current hand and doors.
    #[must_use]
    pub fn offered(hand: &Hand, doors: &DoorRegistry) -> Self {
        let remedies = Remedy::ALL
            .into_iter()
            .filter(|remedy| match remedy {
                Remedy::KeyDiscard => hand.has_key(),
                Remedy::HandDiscard | Remedy::FiveCardDiscard => true,
                Remedy::DoorDiscard => doors.has_unlocked(),
            })
            .collect();
        Self(remedies)
    }

    #[must_use]
    pub fn contains(&self, remedy: Remedy) -> bool {
        self.0.contains(&remedy)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Remedy] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Remedy> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
