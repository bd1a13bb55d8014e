//! The supply: every pile of cards outside the hand and the labyrinth.
//!
//! - **Draw pile**: face down, top = end of the vec.
//! - **Limbo**: doors (and, during setup, nightmares) that surfaced where
//!   they can't be used. Always empty between turns.
//! - **Discard pile**: append-only.
//! - **Removed**: cards taken out of the game for good (doors claimed by
//!   unlocks, resolved nightmares, banished keys, thrown-away hands).

use crate::cards::{Card, Color};
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::GameRng;

use serde::{Deserialize, Serialize};

/// Owner of the draw pile, limbo, discard pile and removed cards.
///
/// ## Usage
///
/// ```
/// use onirim::cards::{Card, Color};
/// use onirim::zones::Supply;
///
/// let mut supply = Supply::new(vec![Card::sun(Color::Red), Card::moon(Color::Blue)]);
///
/// // Draw from the top (last card)
/// assert_eq!(supply.draw().unwrap(), Card::moon(Color::Blue));
/// assert_eq!(supply.draw_pile_len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    draw_pile: Vec<Card>,
    limbo: Vec<Card>,
    discard: Vec<Card>,
    removed: Vec<Card>,
}

impl Supply {
    /// Create a supply whose draw pile is `cards` (last card on top).
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            ..Self::default()
        }
    }

    // === Draw pile ===

    /// Take the top card of the draw pile.
    pub fn draw(&mut self) -> EngineResult<Card> {
        self.draw_pile.pop().ok_or(EngineError::EmptySupply)
    }

    /// Take the top `count` cards, topmost first.
    ///
    /// Draws nothing if fewer than `count` cards remain.
    pub fn draw_many(&mut self, count: usize) -> EngineResult<Vec<Card>> {
        if self.draw_pile.len() < count {
            return Err(EngineError::EmptySupply);
        }
        let split = self.draw_pile.len() - count;
        let mut cards = self.draw_pile.split_off(split);
        cards.reverse();
        Ok(cards)
    }

    /// Put a card on top of the draw pile.
    pub fn put_on_top(&mut self, card: Card) {
        self.draw_pile.push(card);
    }

    /// Add cards to the draw pile. Call [`Supply::shuffle`] afterwards.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.draw_pile.extend(cards);
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Permanently take the first door of `color` out of the draw pile.
    ///
    /// The door moves to the removed pile.
    pub fn remove_first_door_of_color(&mut self, color: Color) -> EngineResult<Card> {
        let index = self
            .draw_pile
            .iter()
            .position(|c| c.is_door() && c.color == color)
            .ok_or(EngineError::DoorNotFound(color))?;
        let door = self.draw_pile.remove(index);
        self.removed.push(door);
        Ok(door)
    }

    /// Cards in the draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// The card that would be drawn next.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.draw_pile.last().copied()
    }

    // === Limbo ===

    /// Set a card aside until the limbo is drained.
    pub fn divert(&mut self, card: Card) {
        self.limbo.push(card);
    }

    /// Move every limbo card back into the draw pile.
    ///
    /// Returns how many cards moved. The caller shuffles afterwards.
    pub fn drain_limbo_into_supply(&mut self) -> usize {
        let count = self.limbo.len();
        self.draw_pile.append(&mut self.limbo);
        count
    }

    #[must_use]
    pub fn limbo(&self) -> &[Card] {
        &self.limbo
    }

    // === Discard and removed ===

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Take a card out of the game.
    pub fn banish(&mut self, card: Card) {
        self.removed.push(card);
    }

    #[must_use]
    pub fn removed(&self) -> &[Card] {
        &self.removed
    }

    /// Every card held by the supply, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.draw_pile
            .iter()
            .chain(&self.limbo)
            .chain(&self.discard)
            .chain(&self.removed)
            .copied()
    }
}
