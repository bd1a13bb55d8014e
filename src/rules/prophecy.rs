//! Prophecy: reordering the top of the draw pile after discarding a key.
//!
//! The top cards are revealed (position 1 is the card that was on top).
//! The player names every position once. The last one named is discarded
//! and the rest go back so that the first one named is drawn next.
//!
//! ```
//! use onirim::cards::{Card, Color};
//! use onirim::rules::ProphecyOrder;
//! use onirim::zones::Supply;
//!
//! let revealed = [
//!     Card::sun(Color::Red),
//!     Card::moon(Color::Red),
//!     Card::key(Color::Red),
//!     Card::sun(Color::Blue),
//!     Card::moon(Color::Blue),
//! ];
//! let order = ProphecyOrder::parse("3, 1, 2, 4, 5", 5).unwrap();
//!
//! let mut supply = Supply::default();
//! let discarded = order.apply(&revealed, &mut supply).unwrap();
//!
//! assert_eq!(discarded, Card::moon(Color::Blue));
//! assert_eq!(supply.draw().unwrap(), Card::key(Color::Red));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::{EngineError, EngineResult};
use crate::zones::Supply;

/// A validated permutation of revealed positions, 1-indexed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProphecyOrder(SmallVec<[usize; 9]>);

fn malformed(input: &str, reason: impl Into<String>) -> EngineError {
    EngineError::MalformedOrdering {
        input: input.to_string(),
        reason: reason.into(),
    }
}

impl ProphecyOrder {
    /// Parse comma-separated positions such as `"3,1,2,4,5"`.
    ///
    /// Each token is one digit from 1 to `size` (surrounding whitespace is
    /// ignored), there are exactly `size` tokens, and none repeats.
    pub fn parse(input: &str, size: usize) -> EngineResult<Self> {
        let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
        if tokens.len() != size {
            return Err(malformed(
                input,
                format!("expected {} positions, got {}", size, tokens.len()),
            ));
        }

        let mut positions: SmallVec<[usize; 9]> = SmallVec::new();
        for token in tokens {
            let mut chars = token.chars();
            let position = match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                (Some(digit), None) => digit as usize,
                _ => return Err(malformed(input, format!("[{}] is not a single digit", token))),
            };
            positions.push(position);
        }
        Self::from_positions(positions, size).map_err(|err| match err {
            EngineError::MalformedOrdering { reason, .. } => malformed(input, reason),
            other => other,
        })
    }

    /// Build an order from 1-indexed positions.
    pub fn from_positions(positions: impl IntoIterator<Item = usize>, size: usize) -> EngineResult<Self> {
        let positions: SmallVec<[usize; 9]> = positions.into_iter().collect();
        let text = join(&positions);

        if positions.len() != size {
            return Err(malformed(
                &text,
                format!("expected {} positions, got {}", size, positions.len()),
            ));
        }
        let mut seen = vec![false; size + 1];
        for &position in &positions {
            if !(1..=size).contains(&position) {
                return Err(malformed(&text, format!("position {} is not between 1 and {}", position, size)));
            }
            if std::mem::replace(&mut seen[position], true) {
                return Err(malformed(&text, format!("position {} is named twice", position)));
            }
        }
        Ok(Self(positions))
    }

    /// Every order for `size` revealed cards, in lexicographic order.
    #[must_use]
    pub fn all(size: usize) -> Vec<Self> {
        let mut out = Vec::new();
        let mut current = SmallVec::new();
        let mut used = vec![false; size + 1];
        permute(size, &mut current, &mut used, &mut out);
        out
    }

    /// Positions in the order named.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// The position that gets discarded.
    #[must_use]
    pub fn discarded(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Discard the last-named card and return the rest to the draw pile.
    ///
    /// A door or nightmare can't rest on the discard pile; it goes to limbo
    /// and comes back with the next drain. Returns the discarded card.
    pub fn apply(&self, revealed: &[Card], supply: &mut Supply) -> EngineResult<Card> {
        if revealed.len() != self.0.len() {
            return Err(malformed(
                &self.to_string(),
                format!("{} cards revealed but {} positions named", revealed.len(), self.0.len()),
            ));
        }
        let Some((&last, keep)) = self.0.split_last() else {
            return Err(malformed("", "no positions named"));
        };

        let discarded = revealed[last - 1];
        if discarded.is_location() {
            supply.discard(discarded);
        } else {
            supply.divert(discarded);
        }
        for &position in keep.iter().rev() {
            supply.put_on_top(revealed[position - 1]);
        }
        Ok(discarded)
    }
}

impl std::fmt::Display for ProphecyOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join(&self.0))
    }
}

fn join(positions: &[usize]) -> String {
    positions.iter().map(usize::to_string).collect::<Vec<_>>().join(",")
}

fn permute(size: usize, current: &mut SmallVec<[usize; 9]>, used: &mut [bool], out: &mut Vec<ProphecyOrder>) {
    if current.len() == size {
        out.push(ProphecyOrder(current.clone()));
        return;
    }
    for position in 1..=size {
        if !used[position] {
            used[position] = true;
            current.push(position);
            permute(size, current, used, out);
            current.pop();
            used[position] = false;
        }
    }
}
