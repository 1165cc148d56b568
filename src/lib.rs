//! A deck-of-cards simulator with optional `no_std` support.
//!
//! The crate provides the [`DeckOfCards`] trait and three backends that build,
//! group and count a standard 52-card deck with different collection
//! strategies. All backends share one seeded shuffle, so the same seed deals
//! the same hands whichever backend is used.
//!
//! # Example
//!
//! ```
//! use deckrs::{DeckOfCards, FunctionalDeck, ImperativeDeck};
//!
//! let reference = ImperativeDeck::new();
//! let functional = FunctionalDeck::new();
//! assert_eq!(reference.cards(), functional.cards());
//!
//! let mut shuffled = reference.shuffle(1);
//! let hand = reference.deal(&mut shuffled, 5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(shuffled.len(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod shuffle;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DeckOfCards, FunctionalDeck, HashedDeck, ImperativeDeck};
pub use error::{DealError, Mutation, MutationError, ParseCardError};
pub use hand::Hand;
pub use options::DealOptions;
pub use view::{Bag, ImmutableMap, ImmutableSet};
