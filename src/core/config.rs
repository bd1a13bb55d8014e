//! Session configuration.
//!
//! `SessionConfig` fixes everything about a game before it starts: the
//! seed, the deck, and the sizes of the hand, the prophecy reveal and the
//! nightmare five-card discard. The defaults are the standard rules.
//!
//! ```
//! use onirim::core::SessionConfig;
//!
//! let config = SessionConfig::new().with_seed(7);
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.hand_size, 5);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::cards::DeckComposition;

/// Standard number of cards in hand.
pub const HAND_SIZE: usize = 5;

/// Standard number of cards revealed by a prophecy.
pub const PROPHECY_SIZE: usize = 5;

/// Standard number of cards thrown away by the five-card nightmare remedy.
pub const PURGE_SIZE: usize = 5;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` picks one at random.
    pub seed: Option<u64>,

    /// Cards the hand is refilled to.
    pub hand_size: usize,

    /// Cards revealed when a key is discarded.
    ///
    /// Orderings are typed as single digits, so at most 9.
    pub prophecy_size: usize,

    /// Non-door, non-nightmare cards discarded by the five-card remedy.
    pub purge_size: usize,

    /// Cards in the deck.
    pub composition: DeckComposition,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: HAND_SIZE,
            prophecy_size: PROPHECY_SIZE,
            purge_size: PURGE_SIZE,
            composition: DeckComposition::standard(),
        }
    }
}

impl SessionConfig {
    /// Standard rules with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of cards a prophecy reveals.
    #[must_use]
    pub fn with_prophecy_size(mut self, size: usize) -> Self {
        self.prophecy_size = size;
        self
    }

    /// Set the number of cards the five-card remedy discards.
    #[must_use]
    pub fn with_purge_size(mut self, size: usize) -> Self {
        self.purge_size = size;
        self
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Number of unlocks every color needs for victory.
    #[must_use]
    pub fn doors_per_color(&self) -> usize {
        self.composition.doors
    }

    /// Reject configurations the engine can't play.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hand_size == 0 {
            return Err(EngineError::InvalidConfig("hand size must be at least 1".into()));
        }
        if !(1..=9).contains(&self.prophecy_size) {
            return Err(EngineError::InvalidConfig(format!(
                "prophecy size must be 1-9, got {}",
                self.prophecy_size
            )));
        }
        if self.purge_size == 0 {
            return Err(EngineError::InvalidConfig("purge size must be at least 1".into()));
        }
        if self.composition.doors == 0 {
            return Err(EngineError::InvalidConfig("each color needs at least one door".into()));
        }
        if self.composition.location_total() < self.hand_size {
            return Err(EngineError::InvalidConfig(format!(
                "{} location cards can't fill a hand of {}",
                self.composition.location_total(),
                self.hand_size
            )));
        }
        Ok(())
    }
}
