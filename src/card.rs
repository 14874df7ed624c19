//! Card types and deck constants.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit, in grid display order (spades first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Hearts.
    Hearts = 2,
    /// Clubs.
    Clubs = 3,
}

impl Suit {
    /// All suits, in display order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// Position of the suit in the fixed suit ordering.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter form used in compact card tokens.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
        }
    }

    /// Full suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Self::Spades),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'C' => Ok(Self::Clubs),
            _ => Err(ParseCardError::UnknownSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Card face (rank), in ascending rank order (ace high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    /// Two.
    Two = 0,
    /// Three.
    Three = 1,
    /// Four.
    Four = 2,
    /// Five.
    Five = 3,
    /// Six.
    Six = 4,
    /// Seven.
    Seven = 5,
    /// Eight.
    Eight = 6,
    /// Nine.
    Nine = 7,
    /// Ten.
    Ten = 8,
    /// Jack.
    Jack = 9,
    /// Queen.
    Queen = 10,
    /// King.
    King = 11,
    /// Ace.
    Ace = 12,
}

impl Face {
    /// All faces, in ascending rank order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of the face in the fixed rank ordering.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Compact form used in card tokens. Ten renders as `10`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl FromStr for Face {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            "A" | "a" => Ok(Self::Ace),
            _ => Err(ParseCardError::UnknownFace),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Cards are plain values: two cards with the same face and suit are equal,
/// and nothing prevents duplicates in a hand. The total order is suit-major
/// (per [`Suit::ALL`]) with ascending rank within a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face of the card.
    pub face: Face,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    /// Long display form, e.g. `K of Hearts`.
    #[must_use]
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.face, self.suit.name())
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit.cmp(&other.suit).then(self.face.cmp(&other.face))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a compact token such as `2S`, `10D`, or `AC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_ch = s.chars().next_back().ok_or(ParseCardError::Empty)?;
        let face_part = &s[..s.len() - suit_ch.len_utf8()];
        let face = face_part.parse()?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Self::new(suit, face))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
