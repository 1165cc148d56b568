//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseCardError;

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in display order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
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
    ];

    /// Returns the printed symbol of the rank (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
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
        }
    }

    /// Returns whether this is a jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        let rank = match symbol {
            "A" | "a" => Self::Ace,
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in display order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♠' | 'S' | 's' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Cards are ordered by suit, then by rank, so a sorted deck reads
/// `A♣ .. K♣, A♦ .. K♦, A♥ .. K♥, A♠ .. K♠`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Returns the 52 cards of a standard deck in card order.
    #[must_use]
    pub fn cartesian_product() -> Vec<Self> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Self::new(rank, suit)))
            .collect()
    }

    /// Returns whether both cards share the same rank.
    #[must_use]
    pub fn is_same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Returns whether both cards share the same suit.
    #[must_use]
    pub fn is_same_suit(&self, other: &Self) -> bool {
        self.suit == other.suit
    }
}

impl fmt::Display for Card {
    /// Formats as `A♦`, or `|A♦|` with the alternate flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "|{}{}|", self.rank, self.suit)
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('|');
        let suit_char = s.chars().next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_symbol(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_part).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
