//! Card, hand, view and options tests.

use deckrs::{
    Bag, Card, DECK_SIZE, DealError, DealOptions, DeckOfCards, ImmutableMap, ImmutableSet,
    ImperativeDeck, ParseCardError, Rank, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn rank_and_suit_tables() {
    assert_eq!(Rank::ALL.len(), 13);
    assert_eq!(Rank::ALL[0], Rank::Ace);
    assert_eq!(Rank::ALL[12], Rank::King);
    assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        Suit::ALL,
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    );

    assert!(Rank::Queen.is_face());
    assert!(!Rank::Ace.is_face());
    assert!(!Rank::Ten.is_face());
}

#[test]
fn card_ordering_is_suit_then_rank() {
    assert!(card(Rank::King, Suit::Clubs) < card(Rank::Ace, Suit::Diamonds));
    assert!(card(Rank::Two, Suit::Spades) < card(Rank::Three, Suit::Spades));
    assert_eq!(card(Rank::Nine, Suit::Hearts), card(Rank::Nine, Suit::Hearts));
}

#[test]
fn card_comparisons() {
    let a = card(Rank::Seven, Suit::Hearts);
    assert!(a.is_same_rank(&card(Rank::Seven, Suit::Clubs)));
    assert!(a.is_same_suit(&card(Rank::Ace, Suit::Hearts)));
    assert!(!a.is_same_suit(&card(Rank::Seven, Suit::Spades)));
}

#[test]
fn cartesian_product_is_the_deck() {
    let cards = Card::cartesian_product();
    assert_eq!(cards.len(), DECK_SIZE);
    assert!(cards.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn card_display() {
    assert_eq!(card(Rank::Ace, Suit::Diamonds).to_string(), "A♦");
    assert_eq!(card(Rank::Ten, Suit::Clubs).to_string(), "10♣");
    assert_eq!(card(Rank::King, Suit::Spades).to_string(), "K♠");
    assert_eq!(format!("{:#}", card(Rank::Queen, Suit::Hearts)), "|Q♥|");
}

#[test]
fn card_parse_round_trip() {
    for c in Card::cartesian_product() {
        assert_eq!(c.to_string().parse::<Card>().unwrap(), c);
        assert_eq!(format!("{c:#}").parse::<Card>().unwrap(), c);
    }
}

#[test]
fn card_parse_ascii_forms() {
    assert_eq!("TS".parse::<Card>().unwrap(), card(Rank::Ten, Suit::Spades));
    assert_eq!("qh".parse::<Card>().unwrap(), card(Rank::Queen, Suit::Hearts));
    assert_eq!(" 2c ".parse::<Card>().unwrap(), card(Rank::Two, Suit::Clubs));
}

#[test]
fn card_parse_errors() {
    assert_eq!("".parse::<Card>().unwrap_err(), ParseCardError::Empty);
    assert_eq!("♦".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!("1♦".parse::<Card>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!("AX".parse::<Card>().unwrap_err(), ParseCardError::InvalidSuit);
    assert_eq!("10".parse::<Card>().unwrap_err(), ParseCardError::InvalidSuit);
    assert_eq!("ZZ".parse::<Card>().unwrap_err(), ParseCardError::InvalidSuit);
}

#[test]
fn hand_display_and_queries() {
    let deck = ImperativeDeck::new();
    let mut shuffled = deck.shuffle(5);
    let front: Vec<Card> = shuffled.iter().take(3).copied().collect();
    let hand = deck.deal(&mut shuffled, 3).unwrap();

    assert_eq!(hand.len(), 3);
    assert!(!hand.is_empty());
    for c in &front {
        assert!(hand.contains(c));
    }

    let sorted = hand.to_vec();
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));

    let expected = sorted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(hand.to_string(), expected);

    let by_suit: usize = Suit::ALL.iter().map(|&s| hand.of_suit(s).len()).sum();
    assert_eq!(by_suit, 3);
}

#[test]
fn bag_counts() {
    let bag: Bag<Suit> = [Suit::Hearts, Suit::Hearts, Suit::Clubs]
        .into_iter()
        .collect();
    assert_eq!(bag.occurrences(&Suit::Hearts), 2);
    assert_eq!(bag.occurrences(&Suit::Spades), 0);
    assert_eq!(bag.distinct_len(), 2);
    assert_eq!(bag.len(), 3);

    let merged = Bag::from_counts([(Rank::Ace, 2), (Rank::Ace, 2), (Rank::King, 0)]);
    assert_eq!(merged.occurrences(&Rank::Ace), 4);
    assert_eq!(merged.distinct_len(), 1);
    assert!(Bag::<Rank>::default().is_empty());
}

#[test]
fn immutable_views_read() {
    let set: ImmutableSet<u8> = [3, 1, 2].into_iter().collect();
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&3));
    assert!(set.contains(&2));
    assert!(set.insert(4).is_err());
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    let map: ImmutableMap<u8, &str> = [(2, "b"), (1, "a")].into_iter().collect();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(map.get(&2), Some(&"b"));
    assert!(map.contains_key(&1));
    assert!(map.insert(3, "c").is_err());
    assert_eq!(map.len(), 2);
}

#[test]
fn options_builder_sets_fields() {
    let options = DealOptions::default()
        .with_seed(42)
        .with_hand_size(7)
        .with_hand_count(3);

    assert_eq!(options.seed, 42);
    assert_eq!(options.hand_size, 7);
    assert_eq!(options.hand_count, 3);
    assert_eq!(options.cards_needed(), 21);
    assert!(options.validate().is_ok());

    let defaults = DealOptions::default();
    assert_eq!((defaults.seed, defaults.hand_size, defaults.hand_count), (1, 5, 5));
}

#[test]
fn options_validation() {
    assert_eq!(
        DealOptions::default().with_hand_size(0).validate(),
        Err(DealError::ZeroHandSize)
    );
    assert_eq!(
        DealOptions::default().with_hand_count(0).validate(),
        Err(DealError::ZeroHandCount)
    );
    assert_eq!(
        DealOptions::default()
            .with_hand_size(14)
            .with_hand_count(4)
            .validate(),
        Err(DealError::NotEnoughCards {
            requested: 56,
            remaining: DECK_SIZE
        })
    );
}
