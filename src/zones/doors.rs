//! Door registry: how many doors of each color have been unlocked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::supply::Supply;
use crate::cards::Color;
use crate::core::error::{EngineError, EngineResult};

/// Unlock counts indexed like `Color::REAL`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorCounts(pub [usize; 4]);

impl DoorCounts {
    /// Count for one color. Always 0 for black.
    #[must_use]
    pub fn get(&self, color: Color) -> usize {
        color.index().map_or(0, |i| self.0[i])
    }

    /// `(color, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        Color::REAL.iter().copied().zip(self.0.iter().copied())
    }

    /// Total unlocked doors.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// What happened when a streak asked for a door.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorUnlock {
    /// The count went up.
    Unlocked {
        color: Color,
        /// Whether a door card was found in the draw pile and removed.
        door_removed: bool,
    },
    /// The color was already at the cap; the streak is wasted.
    AlreadyComplete(Color),
}

/// Per-color unlock counts, capped at the number of doors per color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorRegistry {
    counts: DoorCounts,
    cap: usize,
}

impl DoorRegistry {
    /// Create a registry where each color needs `cap` unlocks.
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            counts: DoorCounts::default(),
            cap,
        }
    }

    /// Create a registry with preset counts, clamped to `cap`.
    #[must_use]
    pub fn with_counts(cap: usize, counts: DoorCounts) -> Self {
        let mut clamped = counts;
        for count in clamped.0.iter_mut() {
            *count = (*count).min(cap);
        }
        Self { counts: clamped, cap }
    }

    /// Unlock a door of `color` and take its card out of the draw pile.
    ///
    /// A color already at the cap is left alone. A missing door card is
    /// logged and the unlock still counts.
    pub fn try_unlock(&mut self, color: Color, supply: &mut Supply) -> DoorUnlock {
        let Some(index) = color.index() else {
            return DoorUnlock::AlreadyComplete(color);
        };
        if self.counts.0[index] >= self.cap {
            log::debug!("{} doors already complete, streak wasted", color);
            return DoorUnlock::AlreadyComplete(color);
        }

        self.counts.0[index] += 1;
        let door_removed = match supply.remove_first_door_of_color(color) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("unlocking {} door: {}", color, err);
                false
            }
        };
        log::info!("unlocked {} door ({}/{})", color, self.counts.0[index], self.cap);
        DoorUnlock::Unlocked { color, door_removed }
    }

    /// Give back one unlocked door of `color`.
    pub fn discard(&mut self, color: Color) -> EngineResult<()> {
        match color.index() {
            Some(index) if self.counts.0[index] > 0 => {
                self.counts.0[index] -= 1;
                Ok(())
            }
            _ => Err(EngineError::InvalidChoice(format!("no unlocked {} door", color))),
        }
    }

    /// Colors with at least one unlocked door.
    #[must_use]
    pub fn unlocked_colors(&self) -> SmallVec<[Color; 4]> {
        self.counts.iter().filter(|&(_, n)| n > 0).map(|(c, _)| c).collect()
    }

    #[must_use]
    pub fn has_unlocked(&self) -> bool {
        self.counts.total() > 0
    }

    /// Every color has reached the cap.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.counts.0.iter().all(|&n| n >= self.cap)
    }

    #[must_use]
    pub fn counts(&self) -> DoorCounts {
        self.counts
    }

    #[must_use]
    pub fn get(&self, color: Color) -> usize {
        self.counts.get(color)
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }
}
