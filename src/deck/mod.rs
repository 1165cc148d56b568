//! The deck contract and its backends.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::RngCore;

use crate::card::{Card, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::{DealOptions, validate_deal};
use crate::shuffle::seeded_rng;
use crate::view::{Bag, ImmutableMap, ImmutableSet};

mod functional;
mod hashed;
mod imperative;

pub use functional::FunctionalDeck;
pub use hashed::HashedDeck;
pub use imperative::ImperativeDeck;

/// A standard 52-card deck that can be queried, shuffled and dealt from.
///
/// Backends differ only in how they store and group cards. For the same
/// inputs every backend returns equal values, including the shuffled order
/// for a given seed.
///
/// # Example
///
/// ```
/// use deckrs::{DeckOfCards, ImperativeDeck};
///
/// let deck = ImperativeDeck::new();
/// let hands = deck.shuffle_and_deal(1, 5, 4).unwrap();
/// assert_eq!(hands.len(), 4);
/// ```
pub trait DeckOfCards {
    /// Short identifier of the backend.
    fn name(&self) -> &'static str;

    /// Returns all 52 cards in card order.
    fn cards(&self) -> ImmutableSet<Card>;

    /// Returns the 13 cards of `suit` in ascending rank order.
    fn cards_of(&self, suit: Suit) -> Vec<Card>;

    /// Returns the cards grouped by suit, each group sorted.
    fn cards_by_suit(&self) -> ImmutableMap<Suit, ImmutableSet<Card>>;

    /// Returns how many cards the deck holds of each suit.
    fn counts_by_suit(&self) -> Bag<Suit>;

    /// Returns how many cards the deck holds of each rank.
    fn counts_by_rank(&self) -> Bag<Rank>;

    /// Returns the deck permuted by `rng`.
    ///
    /// Implementations must feed the cards in card order to
    /// [`fisher_yates`](crate::shuffle::fisher_yates) so that every backend
    /// yields the same permutation from the same generator state.
    fn shuffle_with(&self, rng: &mut dyn RngCore) -> VecDeque<Card>;

    /// Removes `hand_size` cards from the front of `shuffled` and returns
    /// them as a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `hand_size` is zero or exceeds the cards left in
    /// `shuffled`. The sequence is left untouched on error.
    fn deal(&self, shuffled: &mut VecDeque<Card>, hand_size: usize) -> Result<Hand, DealError>;

    /// Returns the clubs in ascending rank order.
    fn clubs(&self) -> Vec<Card> {
        self.cards_of(Suit::Clubs)
    }

    /// Returns the diamonds in ascending rank order.
    fn diamonds(&self) -> Vec<Card> {
        self.cards_of(Suit::Diamonds)
    }

    /// Returns the hearts in ascending rank order.
    fn hearts(&self) -> Vec<Card> {
        self.cards_of(Suit::Hearts)
    }

    /// Returns the spades in ascending rank order.
    fn spades(&self) -> Vec<Card> {
        self.cards_of(Suit::Spades)
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    fn shuffle(&self, seed: u64) -> VecDeque<Card> {
        log::debug!("{}: shuffling with seed {seed}", self.name());
        self.shuffle_with(&mut seeded_rng(seed))
    }

    /// Deals `hand_count` hands of `hand_size` cards from `shuffled`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size or count is zero, or if the hands need
    /// more cards than `shuffled` holds. Nothing is dealt on error.
    fn deal_hands(
        &self,
        shuffled: &mut VecDeque<Card>,
        hand_size: usize,
        hand_count: usize,
    ) -> Result<Vec<Hand>, DealError> {
        validate_deal(hand_size, hand_count, shuffled.len())?;

        let mut hands = Vec::with_capacity(hand_count);
        for _ in 0..hand_count {
            hands.push(self.deal(shuffled, hand_size)?);
        }

        log::debug!(
            "{}: dealt {hand_count} hands of {hand_size}, {} cards left",
            self.name(),
            shuffled.len()
        );
        Ok(hands)
    }

    /// Shuffles with `seed` and deals `hand_count` hands of `hand_size`.
    ///
    /// Same as calling [`shuffle`](Self::shuffle) then
    /// [`deal_hands`](Self::deal_hands).
    ///
    /// # Errors
    ///
    /// See [`deal_hands`](Self::deal_hands).
    fn shuffle_and_deal(
        &self,
        seed: u64,
        hand_size: usize,
        hand_count: usize,
    ) -> Result<Vec<Hand>, DealError> {
        let mut shuffled = self.shuffle(seed);
        self.deal_hands(&mut shuffled, hand_size, hand_count)
    }

    /// Shuffles and deals as configured by `options`.
    ///
    /// # Errors
    ///
    /// See [`deal_hands`](Self::deal_hands).
    fn shuffle_and_deal_with(&self, options: &DealOptions) -> Result<Vec<Hand>, DealError> {
        self.shuffle_and_deal(options.seed, options.hand_size, options.hand_count)
    }
}
