//! Dealt hand representation.

use core::fmt;

use alloc::collections::{BTreeSet, btree_set};
use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// A hand of cards dealt from a shuffled deck.
///
/// Hands are terminal values: once dealt, their cards can be read but never
/// changed. Cards are kept in card order (suit, then rank), so two hands with
/// the same cards compare equal regardless of the order they were dealt in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hand {
    /// Cards in the hand.
    cards: BTreeSet<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards.
    pub(crate) fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &BTreeSet<Card> {
        &self.cards
    }

    /// Iterates over the cards in card order.
    pub fn iter(&self) -> btree_set::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns whether no card appears in both hands.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.cards.is_disjoint(&other.cards)
    }

    /// Returns the cards of the given suit.
    #[must_use]
    pub fn of_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.suit == suit)
            .copied()
            .collect()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards as a vector in card order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if f.alternate() {
                write!(f, "{card:#}")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}
