//! Seeded shuffling shared by every deck backend.
//!
//! All backends produce the same permutation for the same seed because they
//! run this exact algorithm over the deck in card order:
//!
//! 1. seed a [`ChaCha8Rng`] with [`SeedableRng::seed_from_u64`];
//! 2. permute the cards with [`SliceRandom::shuffle`], a back-to-front
//!    Fisher-Yates driven by that generator.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// Creates the random number generator used by [`DeckOfCards::shuffle`].
///
/// [`DeckOfCards::shuffle`]: crate::DeckOfCards::shuffle
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Permutes `cards` in place.
pub fn fisher_yates<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
    log::trace!("fisher-yates permuted {} cards", cards.len());
}

/// Shuffles `cards`, given in card order, into a front-poppable sequence.
pub(crate) fn shuffled<I, R>(cards: I, rng: &mut R) -> VecDeque<Card>
where
    I: IntoIterator<Item = Card>,
    R: Rng + ?Sized,
{
    let mut cards: Vec<Card> = cards.into_iter().collect();
    fisher_yates(&mut cards, rng);
    VecDeque::from(cards)
}
