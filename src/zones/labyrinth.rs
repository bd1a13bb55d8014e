//! The labyrinth: the row of played cards and its color streak.
//!
//! Consecutive symbols must differ. Three cards of one color in a row
//! unlock a door of that color, after which the streak starts over.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};

/// Streak length that unlocks a door.
pub const STREAK_TO_UNLOCK: u8 = 3;

/// Run of same-colored cards at the end of the labyrinth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Cards in the run, 0 right after an unlock.
    pub count: u8,
    /// Color of the run. `None` right after an unlock or before any play.
    pub color: Option<Color>,
}

/// Append-only sequence of played cards.
///
/// Backed by `im::Vector` so snapshots share structure with the live game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labyrinth {
    cards: Vector<Card>,
    streak: Streak,
}

impl Labyrinth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a labyrinth by replaying `cards` in order.
    ///
    /// Unlocks the replay would trigger are not reported.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut labyrinth = Self::new();
        for &card in cards {
            let _ = labyrinth.push(card);
        }
        labyrinth
    }

    /// Whether `card` may be played next.
    #[must_use]
    pub fn can_play(&self, card: Card) -> bool {
        self.top().map_or(true, |top| top.symbol != card.symbol)
    }

    /// Append a card and update the streak.
    ///
    /// Returns the color of the door to unlock when the streak completes.
    /// Callers check [`Labyrinth::can_play`] first.
    #[must_use = "a completed streak unlocks a door"]
    pub fn push(&mut self, card: Card) -> Option<Color> {
        match self.top() {
            Some(top) if top.color == card.color => {
                self.streak.count += 1;
                self.streak.color = Some(card.color);
            }
            _ => {
                self.streak = Streak {
                    count: 1,
                    color: Some(card.color),
                }
            }
        }
        self.cards.push_back(card);

        if self.streak.count >= STREAK_TO_UNLOCK {
            self.streak = Streak::default();
            return Some(card.color);
        }
        None
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn streak(&self) -> Streak {
        self.streak
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_play() {
        let mut labyrinth = Labyrinth::new();

        assert!(labyrinth.can_play(Card::sun(Color::Red)));
        assert_eq!(labyrinth.push(Card::sun(Color::Red)), None);
        assert_eq!(labyrinth.cards().iter().copied().collect::<Vec<_>>(), vec![Card::sun(Color::Red)]);
        assert_eq!(
            labyrinth.streak(),
            Streak {
                count: 1,
                color: Some(Color::Red)
            }
        );
    }

    #[test]
    fn test_same_symbol_rejected() {
        let labyrinth = Labyrinth::from_cards(&[Card::sun(Color::Red)]);

        assert!(!labyrinth.can_play(Card::sun(Color::Red)));
        assert!(!labyrinth.can_play(Card::sun(Color::Blue)));
        assert!(labyrinth.can_play(Card::moon(Color::Red)));
        assert!(labyrinth.can_play(Card::key(Color::Blue)));
    }

    #[test]
    fn test_color_change_resets_streak() {
        let mut labyrinth = Labyrinth::from_cards(&[Card::sun(Color::Red), Card::moon(Color::Red)]);
        assert_eq!(labyrinth.streak().count, 2);

        assert_eq!(labyrinth.push(Card::sun(Color::Blue)), None);
        assert_eq!(
            labyrinth.streak(),
            Streak {
                count: 1,
                color: Some(Color::Blue)
            }
        );
    }

    #[test]
    fn test_three_in_a_row_unlocks() {
        let mut labyrinth = Labyrinth::from_cards(&[Card::moon(Color::Red), Card::sun(Color::Red)]);

        assert_eq!(labyrinth.push(Card::moon(Color::Red)), Some(Color::Red));
        assert_eq!(labyrinth.streak(), Streak::default());
        assert_eq!(labyrinth.len(), 3);
    }

    #[test]
    fn test_streak_restarts_after_unlock() {
        let mut labyrinth = Labyrinth::from_cards(&[
            Card::sun(Color::Green),
            Card::moon(Color::Green),
            Card::key(Color::Green),
        ]);
        assert_eq!(labyrinth.streak().count, 0);

        // Same color as the top card continues from the reset count
        assert_eq!(labyrinth.push(Card::sun(Color::Green)), None);
        assert_eq!(labyrinth.streak().count, 1);
        assert_eq!(labyrinth.push(Card::moon(Color::Green)), None);
        assert_eq!(labyrinth.push(Card::sun(Color::Green)), Some(Color::Green));
    }

    #[test]
    fn test_streak_never_rests_at_three() {
        let mut labyrinth = Labyrinth::new();
        let cards = [Card::sun(Color::Blue), Card::moon(Color::Blue)];

        for i in 0..30 {
            let _ = labyrinth.push(cards[i % 2]);
            assert!(labyrinth.streak().count < STREAK_TO_UNLOCK);
        }
    }
}
