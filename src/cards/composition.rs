//! Deck composition.
//!
//! Describes how many of each card go into a game. The standard deck has,
//! per color, a varying number of suns (red 9, blue 8, green 7, brown 6),
//! 4 moons, 3 keys and 2 doors, plus 10 nightmares that are shuffled in
//! only after the opening hand is dealt.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color};

/// Card counts for building a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    /// Suns per color, indexed like `Color::REAL`.
    pub suns: [usize; 4],
    /// Moons per color.
    pub moons: usize,
    /// Keys per color.
    pub keys: usize,
    /// Doors per color. Also the number of unlocks each color needs.
    pub doors: usize,
    /// Nightmares mixed in after setup.
    pub nightmares: usize,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckComposition {
    /// The published Onirim base deck.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            suns: [9, 8, 7, 6],
            moons: 4,
            keys: 3,
            doors: 2,
            nightmares: 10,
        }
    }

    /// Every non-nightmare card, grouped by color.
    #[must_use]
    pub fn colored_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.colored_total());
        for (color, &suns) in Color::REAL.iter().zip(self.suns.iter()) {
            cards.extend(std::iter::repeat(Card::sun(*color)).take(suns));
            cards.extend(std::iter::repeat(Card::moon(*color)).take(self.moons));
            cards.extend(std::iter::repeat(Card::key(*color)).take(self.keys));
            cards.extend(std::iter::repeat(Card::door(*color)).take(self.doors));
        }
        cards
    }

    /// The nightmare cards.
    #[must_use]
    pub fn nightmare_cards(&self) -> Vec<Card> {
        vec![Card::nightmare(); self.nightmares]
    }

    /// Number of non-nightmare cards.
    #[must_use]
    pub fn colored_total(&self) -> usize {
        let per_color = self.moons + self.keys + self.doors;
        self.suns.iter().sum::<usize>() + per_color * Color::REAL.len()
    }

    /// Number of cards in a full deck.
    #[must_use]
    pub fn total(&self) -> usize {
        self.colored_total() + self.nightmares
    }

    /// Number of sun, moon and key cards, the only ones a hand can hold.
    #[must_use]
    pub fn location_total(&self) -> usize {
        self.colored_total() - self.doors * Color::REAL.len()
    }
}
