//! Where cards live.
//!
//! ## Key Types
//!
//! - `Supply`: draw pile, limbo, discard pile and removed cards
//! - `Hand`: the player's cards, 1-indexed
//! - `Labyrinth`: played cards and the color streak
//! - `DoorRegistry`: unlocked doors per color

pub mod doors;
pub mod hand;
pub mod labyrinth;
pub mod supply;

pub use doors::{DoorCounts, DoorRegistry, DoorUnlock};
pub use hand::{Hand, RefillMode, RefillProgress};
pub use labyrinth::{Labyrinth, Streak, STREAK_TO_UNLOCK};
pub use supply::Supply;
