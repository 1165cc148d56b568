//! Shuffles a deck and deals hands from the command line.
//!
//! ```bash
//! $ RUST_LOG=debug cargo run --example deal_hands -- --seed 7 --hand-size 13 --hand-count 4
//! ```

use clap::{Parser, ValueEnum};
use deckrs::{DealOptions, DeckOfCards, FunctionalDeck, HashedDeck, ImperativeDeck};
use log::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// Loops over ordered collections.
    Imperative,
    /// Iterator adapters over a sorted vector.
    Functional,
    /// Per-suit hash map groups.
    Hashed,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The shuffle seed.
    #[clap(long, short, default_value_t = 1)]
    seed: u64,
    /// Number of cards per hand.
    #[clap(long, default_value_t = 5)]
    hand_size: usize,
    /// Number of hands to deal.
    #[clap(long, default_value_t = 5)]
    hand_count: usize,
    /// The deck backend.
    #[clap(long, short, value_enum, default_value_t = Backend::Imperative)]
    backend: Backend,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let options = DealOptions::default()
        .with_seed(cli.seed)
        .with_hand_size(cli.hand_size)
        .with_hand_count(cli.hand_count);

    let deck: Box<dyn DeckOfCards> = match cli.backend {
        Backend::Imperative => Box::new(ImperativeDeck::new()),
        Backend::Functional => Box::new(FunctionalDeck::new()),
        Backend::Hashed => Box::new(HashedDeck::new()),
    };

    info!("Dealing with the {} deck", deck.name());
    match deck.shuffle_and_deal_with(&options) {
        Ok(hands) => {
            for (i, hand) in hands.iter().enumerate() {
                println!("Hand {}: {hand:#}", i + 1);
            }
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
