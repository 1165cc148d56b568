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

/// Deck built from iterator adapters over a sorted vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionalDeck {
    cards: Vec<Card>,
}

impl FunctionalDeck {
    /// Creates a full deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Card::cartesian_product(),
        }
    }
}

impl Default for FunctionalDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckOfCards for FunctionalDeck {
    fn name(&self) -> &'static str {
        "functional"
    }

    fn cards(&self) -> ImmutableSet<Card> {
        self.cards.iter().copied().collect()
    }

    fn cards_of(&self, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.suit == suit)
            .copied()
            .collect()
    }

    fn cards_by_suit(&self) -> ImmutableMap<Suit, ImmutableSet<Card>> {
        self.cards
            .iter()
            .fold(BTreeMap::<Suit, BTreeSet<Card>>::new(), |mut groups, card| {
                groups.entry(card.suit).or_default().insert(*card);
                groups
            })
            .into_iter()
            .map(|(suit, cards)| (suit, ImmutableSet::from(cards)))
            .collect()
    }

    fn counts_by_suit(&self) -> Bag<Suit> {
        self.cards.iter().map(|card| card.suit).collect()
    }

    fn counts_by_rank(&self) -> Bag<Rank> {
        self.cards.iter().map(|card| card.rank).collect()
    }

    fn shuffle_with(&self, rng: &mut dyn RngCore) -> VecDeque<Card> {
        shuffle::shuffled(self.cards.iter().copied(), rng)
    }

    fn deal(&self, shuffled: &mut VecDeque<Card>, hand_size: usize) -> Result<Hand, DealError> {
        validate_deal(hand_size, 1, shuffled.len())?;
        Ok(Hand::from_cards(shuffled.drain(..hand_size)))
    }
}
