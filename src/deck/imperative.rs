use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;

use rand::RngCore;

use crate::card::{Card, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::validate_deal;
use crate::shuffle;
use crate::view::{Bag, ImmutableMap, ImmutableSet};

use super::DeckOfCards;

/// Deck built with explicit loops over ordered collections.
///
/// This is the reference backend the others are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImperativeDeck {
    /// Every card in card order.
    cards: BTreeSet<Card>,
    /// Cards grouped by suit.
    cards_by_suit: BTreeMap<Suit, BTreeSet<Card>>,
}

impl ImperativeDeck {
    /// Creates a full deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = BTreeSet::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.insert(Card::new(rank, suit));
            }
        }

        let mut cards_by_suit: BTreeMap<Suit, BTreeSet<Card>> = BTreeMap::new();
        for card in &cards {
            cards_by_suit.entry(card.suit).or_default().insert(*card);
        }

        Self {
            cards,
            cards_by_suit,
        }
    }
}

impl Default for ImperativeDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckOfCards for ImperativeDeck {
    fn name(&self) -> &'static str {
        "imperative"
    }

    fn cards(&self) -> ImmutableSet<Card> {
        ImmutableSet::from(self.cards.clone())
    }

    fn cards_of(&self, suit: Suit) -> Vec<Card> {
        let mut result = Vec::new();
        if let Some(group) = self.cards_by_suit.get(&suit) {
            for card in group {
                result.push(*card);
            }
        }
        result
    }

    fn cards_by_suit(&self) -> ImmutableMap<Suit, ImmutableSet<Card>> {
        let mut groups = BTreeMap::new();
        for (suit, cards) in &self.cards_by_suit {
            groups.insert(*suit, ImmutableSet::from(cards.clone()));
        }
        ImmutableMap::from(groups)
    }

    fn counts_by_suit(&self) -> Bag<Suit> {
        let mut counts: BTreeMap<Suit, usize> = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.suit).or_insert(0) += 1;
        }
        Bag::from_counts(counts)
    }

    fn counts_by_rank(&self) -> Bag<Rank> {
        let mut counts: BTreeMap<Rank, usize> = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        Bag::from_counts(counts)
    }

    fn shuffle_with(&self, rng: &mut dyn RngCore) -> VecDeque<Card> {
        shuffle::shuffled(self.cards.iter().copied(), rng)
    }

    fn deal(&self, shuffled: &mut VecDeque<Card>, hand_size: usize) -> Result<Hand, DealError> {
        validate_deal(hand_size, 1, shuffled.len())?;

        let mut hand = BTreeSet::new();
        for _ in 0..hand_size {
            if let Some(card) = shuffled.pop_front() {
                hand.insert(card);
            }
        }
        Ok(Hand::from_cards(hand))
    }
}
