//! Card model.
//!
//! ## Key Types
//!
//! - `Symbol`: sun, moon, key, door or nightmare
//! - `Color`: the four door colors plus black for nightmares
//! - `Card`: an immutable symbol + color value
//! - `DeckComposition`: how many of each card a game starts with

pub mod card;
pub mod composition;

pub use card::{Card, Color, Symbol};
pub use composition::DeckComposition;
