use alloc::collections::VecDeque;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::RngCore;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::validate_deal;
use crate::shuffle;
use crate::view::{Bag, ImmutableMap, ImmutableSet};

use super::DeckOfCards;

/// Deck stored as unordered per-suit groups.
///
/// The hash map has no stable iteration order, so every query that exposes
/// ordering sorts on the way out.
#[derive(Debug, Clone)]
pub struct HashedDeck {
    /// Cards of each suit, in rank order.
    by_suit: HashMap<Suit, Vec<Card>>,
}

impl HashedDeck {
    /// Creates a full deck.
    #[must_use]
    pub fn new() -> Self {
        let by_suit = Suit::ALL
            .into_iter()
            .map(|suit| {
                let cards = Rank::ALL.map(|rank| Card::new(rank, suit)).to_vec();
                (suit, cards)
            })
            .collect();
        Self { by_suit }
    }
}

impl Default for HashedDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckOfCards for HashedDeck {
    fn name(&self) -> &'static str {
        "hashed"
    }

    fn cards(&self) -> ImmutableSet<Card> {
        self.by_suit.values().flatten().copied().collect()
    }

    fn cards_of(&self, suit: Suit) -> Vec<Card> {
        let mut cards = self.by_suit.get(&suit).cloned().unwrap_or_default();
        cards.sort_unstable();
        cards
    }

    fn cards_by_suit(&self) -> ImmutableMap<Suit, ImmutableSet<Card>> {
        self.by_suit
            .iter()
            .map(|(suit, cards)| (*suit, cards.iter().copied().collect::<ImmutableSet<Card>>()))
            .collect()
    }

    fn counts_by_suit(&self) -> Bag<Suit> {
        Bag::from_counts(self.by_suit.iter().map(|(suit, cards)| (*suit, cards.len())))
    }

    fn counts_by_rank(&self) -> Bag<Rank> {
        let mut counts: HashMap<Rank, usize> = HashMap::new();
        for card in self.by_suit.values().flatten() {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        Bag::from_counts(counts)
    }

    fn shuffle_with(&self, rng: &mut dyn RngCore) -> VecDeque<Card> {
        // Hash order is arbitrary; the shuffle must start from card order.
        shuffle::shuffled(self.cards(), rng)
    }

    fn deal(&self, shuffled: &mut VecDeque<Card>, hand_size: usize) -> Result<Hand, DealError> {
        validate_deal(hand_size, 1, shuffled.len())?;
        let cards: Vec<Card> = (0..hand_size).map_while(|_| shuffled.pop_front()).collect();
        Ok(Hand::from_cards(cards))
    }
}
