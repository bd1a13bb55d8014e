//! The player's hand.
//!
//! Positions are 1-indexed at this boundary, matching what a player types.
//! Removing a card shifts later cards down, so a position is only stable
//! for the duration of one selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::labyrinth::Labyrinth;
use super::supply::Supply;
use crate::cards::{Card, Symbol};
use crate::core::error::{EngineError, EngineResult};

/// How nightmares are handled while refilling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefillMode {
    /// Opening hand: nightmares go to limbo with the doors.
    Setup,
    /// During play: a nightmare stops the refill so it can be resolved.
    Turn,
}

/// Where a refill stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefillProgress {
    /// The hand is full.
    Full,
    /// A nightmare surfaced. Resolve it, then refill again.
    Interrupted(Card),
}

/// Ordered hand with a fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 5]>,
    capacity: usize,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            capacity,
        }
    }

    /// Create a hand holding `cards`.
    #[must_use]
    pub fn with_cards(capacity: usize, cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
            capacity,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    fn index(&self, position: usize) -> EngineResult<usize> {
        if position == 0 || position > self.cards.len() {
            return Err(EngineError::InvalidPosition {
                position,
                reason: "no card at that position",
            });
        }
        Ok(position - 1)
    }

    /// The card at a 1-indexed position.
    pub fn get(&self, position: usize) -> EngineResult<Card> {
        let index = self.index(position)?;
        Ok(self.cards[index])
    }

    /// Remove and return the card at a 1-indexed position.
    pub fn take(&mut self, position: usize) -> EngineResult<Card> {
        let index = self.index(position)?;
        Ok(self.cards.remove(index))
    }

    /// Remove the card at `position` for playing into the labyrinth.
    ///
    /// Fails without touching the hand if the labyrinth won't accept it.
    pub fn play(&mut self, position: usize, labyrinth: &Labyrinth) -> EngineResult<Card> {
        let card = self.get(position)?;
        if !labyrinth.can_play(card) {
            return Err(EngineError::InvalidPosition {
                position,
                reason: "same symbol as the top of the labyrinth",
            });
        }
        self.take(position)
    }

    /// Move the card at `position` to the discard pile.
    pub fn discard(&mut self, position: usize, supply: &mut Supply) -> EngineResult<Card> {
        let card = self.take(position)?;
        supply.discard(card);
        Ok(card)
    }

    /// Empty the hand, returning what it held.
    pub fn clear(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// Take the whole hand out of the game. The caller refills afterwards.
    pub fn discard_hand(&mut self, supply: &mut Supply) -> Vec<Card> {
        let cards = self.clear();
        for &card in &cards {
            supply.banish(card);
        }
        cards
    }

    /// Draw until full.
    ///
    /// Doors go to limbo. What happens to nightmares depends on `mode`.
    /// The caller drains limbo and shuffles once the hand is full.
    pub fn refill(&mut self, supply: &mut Supply, mode: RefillMode) -> EngineResult<RefillProgress> {
        while !self.is_full() {
            let card = supply.draw()?;
            match (card.symbol, mode) {
                (Symbol::Door, _) | (Symbol::Nightmare, RefillMode::Setup) => supply.divert(card),
                (Symbol::Nightmare, RefillMode::Turn) => return Ok(RefillProgress::Interrupted(card)),
                _ => self.cards.push(card),
            }
        }
        Ok(RefillProgress::Full)
    }

    /// 1-indexed positions of every key.
    #[must_use]
    pub fn key_positions(&self) -> SmallVec<[usize; 5]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_key())
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.cards.iter().any(|c| c.is_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn sample_hand() -> Hand {
        Hand::with_cards(
            5,
            &[
                Card::sun(Color::Red),
                Card::moon(Color::Blue),
                Card::sun(Color::Blue),
                Card::key(Color::Green),
                Card::moon(Color::Brown),
            ],
        )
    }

    #[test]
    fn test_get_is_one_indexed() {
        let hand = sample_hand();

        assert_eq!(hand.get(1), Ok(Card::sun(Color::Red)));
        assert_eq!(hand.get(5), Ok(Card::moon(Color::Brown)));
        assert!(matches!(hand.get(0), Err(EngineError::InvalidPosition { position: 0, .. })));
        assert!(matches!(hand.get(6), Err(EngineError::InvalidPosition { position: 6, .. })));
    }

    #[test]
    fn test_take_shifts_later_cards() {
        let mut hand = sample_hand();

        assert_eq!(hand.take(2), Ok(Card::moon(Color::Blue)));
        assert_eq!(hand.len(), 4);
        assert_eq!(hand.get(2), Ok(Card::sun(Color::Blue)));
        assert!(!hand.is_full());
    }

    #[test]
    fn test_play_respects_labyrinth() {
        let mut hand = sample_hand();
        let mut labyrinth = Labyrinth::new();
        labyrinth.push(Card::sun(Color::Green));

        let err = hand.play(1, &labyrinth).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPosition { position: 1, .. }));
        assert_eq!(hand.len(), 5);

        assert_eq!(hand.play(2, &labyrinth), Ok(Card::moon(Color::Blue)));
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn test_discard_moves_to_pile() {
        let mut hand = sample_hand();
        let mut supply = Supply::default();

        assert_eq!(hand.discard(4, &mut supply), Ok(Card::key(Color::Green)));
        assert_eq!(supply.discard_pile(), &[Card::key(Color::Green)]);
        assert!(hand.discard(5, &mut supply).is_err());
    }

    #[test]
    fn test_clear() {
        let mut hand = sample_hand();
        let cleared = hand.clear();

        assert_eq!(cleared.len(), 5);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_discard_hand_banishes() {
        let mut hand = sample_hand();
        let mut supply = Supply::default();

        let thrown = hand.discard_hand(&mut supply);

        assert_eq!(thrown.len(), 5);
        assert!(hand.is_empty());
        assert_eq!(supply.removed().len(), 5);
        assert!(supply.discard_pile().is_empty());
    }

    #[test]
    fn test_refill_routes_doors_to_limbo() {
        let mut hand = Hand::new(3);
        let mut supply = Supply::new(vec![
            Card::sun(Color::Red),
            Card::moon(Color::Red),
            Card::door(Color::Blue),
            Card::key(Color::Red),
        ]);

        assert_eq!(hand.refill(&mut supply, RefillMode::Turn), Ok(RefillProgress::Full));
        assert_eq!(hand.cards(), &[Card::key(Color::Red), Card::moon(Color::Red), Card::sun(Color::Red)]);
        assert_eq!(supply.limbo(), &[Card::door(Color::Blue)]);
        assert!(supply.is_exhausted());
    }

    #[test]
    fn test_refill_turn_stops_on_nightmare() {
        let mut hand = Hand::new(3);
        let mut supply = Supply::new(vec![Card::sun(Color::Red), Card::nightmare(), Card::moon(Color::Red)]);

        assert_eq!(
            hand.refill(&mut supply, RefillMode::Turn),
            Ok(RefillProgress::Interrupted(Card::nightmare()))
        );
        assert_eq!(hand.len(), 1);
        assert_eq!(supply.draw_pile_len(), 1);
    }

    #[test]
    fn test_refill_setup_diverts_nightmare() {
        let mut hand = Hand::new(2);
        let mut supply = Supply::new(vec![Card::sun(Color::Red), Card::nightmare(), Card::moon(Color::Red)]);

        assert_eq!(hand.refill(&mut supply, RefillMode::Setup), Ok(RefillProgress::Full));
        assert_eq!(hand.len(), 2);
        assert_eq!(supply.limbo(), &[Card::nightmare()]);
    }

    #[test]
    fn test_refill_exhausted() {
        let mut hand = Hand::new(5);
        let mut supply = Supply::new(vec![Card::sun(Color::Red), Card::door(Color::Red)]);

        assert_eq!(hand.refill(&mut supply, RefillMode::Turn), Err(EngineError::EmptySupply));
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_key_positions() {
        let mut hand = sample_hand();
        assert_eq!(hand.key_positions().as_slice(), &[4]);
        assert!(hand.has_key());

        hand.take(4).unwrap();
        assert!(hand.key_positions().is_empty());
        assert!(!hand.has_key());
    }
}
