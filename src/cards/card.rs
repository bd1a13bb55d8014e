//! Card values: a symbol paired with a color.
//!
//! Cards carry no identity beyond their symbol and color. Two red suns are
//! interchangeable, so `Card` is `Copy` and compares structurally.

use serde::{Deserialize, Serialize};

/// What is printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Sun,
    Moon,
    Key,
    Door,
    Nightmare,
}

impl Symbol {
    /// Lowercase name used in logs and rendering.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Sun => "sun",
            Symbol::Moon => "moon",
            Symbol::Key => "key",
            Symbol::Door => "door",
            Symbol::Nightmare => "nightmare",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color.
///
/// The four "real" colors carry suns, moons, keys and doors. Black is
/// reserved for nightmares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Brown,
    Black,
}

impl Color {
    /// The four door colors, in canonical order.
    pub const REAL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Brown];

    /// Index into per-color tables. `None` for black.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Color::Red => Some(0),
            Color::Blue => Some(1),
            Color::Green => Some(2),
            Color::Brown => Some(3),
            Color::Black => None,
        }
    }

    /// Whether doors of this color exist.
    #[must_use]
    pub const fn is_real(self) -> bool {
        self.index().is_some()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Brown => "brown",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
///
/// ## Example
///
/// ```
/// use onirim::cards::{Card, Color, Symbol};
///
/// let card = Card::sun(Color::Red);
/// assert_eq!(card.symbol, Symbol::Sun);
/// assert_eq!(card, Card::new(Symbol::Sun, Color::Red));
/// assert_eq!(card.to_string(), "sun (red)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub symbol: Symbol,
    pub color: Color,
}

impl Card {
    /// Create a card.
    ///
    /// Nightmares are always black and nothing else is.
    #[must_use]
    pub fn new(symbol: Symbol, color: Color) -> Self {
        debug_assert_eq!(
            symbol == Symbol::Nightmare,
            color == Color::Black,
            "black is reserved for nightmares"
        );
        Self { symbol, color }
    }

    #[must_use]
    pub fn sun(color: Color) -> Self {
        Self::new(Symbol::Sun, color)
    }

    #[must_use]
    pub fn moon(color: Color) -> Self {
        Self::new(Symbol::Moon, color)
    }

    #[must_use]
    pub fn key(color: Color) -> Self {
        Self::new(Symbol::Key, color)
    }

    #[must_use]
    pub fn door(color: Color) -> Self {
        Self::new(Symbol::Door, color)
    }

    #[must_use]
    pub fn nightmare() -> Self {
        Self::new(Symbol::Nightmare, Color::Black)
    }

    #[must_use]
    pub fn is_key(self) -> bool {
        self.symbol == Symbol::Key
    }

    #[must_use]
    pub fn is_door(self) -> bool {
        self.symbol == Symbol::Door
    }

    #[must_use]
    pub fn is_nightmare(self) -> bool {
        self.symbol == Symbol::Nightmare
    }

    /// Whether this card belongs in a hand (suns, moons and keys).
    #[must_use]
    pub fn is_location(self) -> bool {
        matches!(self.symbol, Symbol::Sun | Symbol::Moon | Symbol::Key)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.color)
    }
}
