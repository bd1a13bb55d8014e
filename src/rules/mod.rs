//! Rules for the two sub-games that interrupt a turn.
//!
//! - `nightmare`: which remedies a nightmare offers
//! - `prophecy`: validating and applying a reorder of the draw pile
//!
//! The session drives both; these modules only hold the rules themselves.

pub mod nightmare;
pub mod prophecy;

pub use nightmare::{Remedy, RemedySet};
pub use prophecy::ProphecyOrder;
