//! Error types for deck operations.

use core::fmt;

use thiserror::Error;

/// A structural mutation attempted on a read-only collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// Adding an element or entry.
    Insert,
    /// Removing an element or entry.
    Remove,
    /// Removing every element.
    Clear,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Insert => "insert",
            Self::Remove => "remove",
            Self::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Errors returned when mutating a read-only collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The collection is immutable.
    #[error("unsupported mutation: {0} on an immutable collection")]
    Unsupported(Mutation),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Hand size is zero.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// Hand count is zero.
    #[error("hand count is zero")]
    ZeroHandCount,
    /// Not enough cards left in the shuffled deck.
    #[error("not enough cards: requested {requested}, remaining {remaining}")]
    NotEnoughCards {
        /// Number of cards the deal needs.
        requested: usize,
        /// Number of cards left to deal from.
        remaining: usize,
    },
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card string")]
    Empty,
    /// Rank is not recognized.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not recognized.
    #[error("invalid suit")]
    InvalidSuit,
}
