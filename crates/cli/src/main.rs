// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, value_parser};
use log::info;

use paigow_core::{
    fortune_bonus,
    poker::{Card, Deck, Hand, best_split, evaluate, parse_cards},
};

pub mod play;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays rounds where both sides arrange the cards the house way.
    Play {
        /// Number of rounds to play.
        #[clap(
            long,
            short,
            default_value_t = 10,
            value_parser = value_parser!(u32).range(1..=1_000_000)
        )]
        rounds: u32,
        /// Shuffle seed for reproducible rounds.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluates a 2 or 5 cards hand.
    Eval {
        /// The hand cards, for example `AS KD JK 9H 9C`.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Splits seven cards the house way.
    Split {
        /// The seven cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play { rounds, seed } => {
            let config = play::Config { rounds, seed };
            let stats = play::run(&config)?;

            info!(
                "Played {} rounds player wins: {} dealer wins: {} pushes: {}",
                stats.rounds(),
                stats.player_wins,
                stats.dealer_wins,
                stats.pushes
            );
            info!(
                "Dealer ace high Pai Gow: {} Fortune hits: {} ({} units)",
                stats.dealer_ace_high, stats.fortune_hits, stats.fortune_units
            );
            info!("Ace High hits: {} ({} units)", stats.ace_high_hits, stats.ace_high_units);
        }
        Command::Eval { cards } => {
            let cards = read_cards(&cards)?;
            if cards.len() != Hand::LOW_SIZE && cards.len() != Hand::HIGH_SIZE {
                bail!("Expected 2 or 5 cards, got {}", cards.len());
            }

            let hand = evaluate(&cards);
            println!("{hand} {:?}", hand.tiebreakers());
        }
        Command::Split { cards } => {
            let cards = read_cards(&cards)?;
            if cards.len() != Deck::HAND_SIZE {
                bail!("Expected {} cards, got {}", Deck::HAND_SIZE, cards.len());
            }

            let hands = best_split(&cards);
            println!("{hands}");

            match fortune_bonus(&cards) {
                Some(bonus) => println!("Fortune bonus: {bonus}"),
                None => println!("Fortune bonus: none"),
            }
        }
    }

    Ok(())
}

/// Parses cards arguments and checks there are no duplicates.
fn read_cards(args: &[String]) -> Result<Vec<Card>> {
    let cards = parse_cards(&args.join(" "))?;

    let mut ids = cards.iter().map(|c| c.id()).collect::<Vec<_>>();
    ids.sort_unstable();
    if ids.windows(2).any(|w| w[0] == w[1]) {
        bail!("Duplicate cards in {}", args.join(" "));
    }

    Ok(cards)
}
