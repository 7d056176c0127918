// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulated rounds where both sides play the house way.
use anyhow::Result;
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use paigow_core::{
    GameResult,
    game::{Round, RoundOutcome},
    poker::{Card, Deck},
    round::is_ace_high_pai_gow,
};

/// Play configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of rounds to play.
    pub rounds: u32,
    /// Shuffle seed, a random seed is used if not set.
    pub seed: Option<u64>,
}

/// Rounds results counters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
    /// Pushed rounds.
    pub pushes: u32,
    /// Rounds with a dealer ace high Pai Gow.
    pub dealer_ace_high: u32,
    /// Rounds paying a Fortune bonus.
    pub fortune_hits: u32,
    /// Fortune bonus units won for a unit wager on each round.
    pub fortune_units: u32,
    /// Rounds paying an Ace High bonus.
    pub ace_high_hits: u32,
    /// Ace High bonus units won for a unit wager on each round.
    pub ace_high_units: u32,
}

impl Stats {
    fn record(&mut self, outcome: &RoundOutcome) {
        match outcome.result {
            GameResult::PlayerWins => self.player_wins += 1,
            GameResult::DealerWins => self.dealer_wins += 1,
            GameResult::Push => self.pushes += 1,
        }

        let dealer_seven = outcome.dealer.cards().copied().collect::<Vec<Card>>();
        if is_ace_high_pai_gow(&outcome.dealer, &dealer_seven) {
            self.dealer_ace_high += 1;
        }

        if let Some(bonus) = &outcome.fortune {
            self.fortune_hits += 1;
            self.fortune_units += bonus.multiplier;
        }

        if let Some(bonus) = &outcome.ace_high {
            self.ace_high_hits += 1;
            self.ace_high_units += bonus.multiplier;
        }
    }

    /// The number of rounds played.
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.dealer_wins + self.pushes
    }
}

/// Plays the configured number of rounds with a new shuffled deck for each
/// round.
pub fn run(config: &Config) -> Result<Stats> {
    match config.seed {
        Some(seed) => play(config.rounds, &mut StdRng::seed_from_u64(seed)),
        None => play(config.rounds, &mut rand::rng()),
    }
}

fn play<R: Rng>(rounds: u32, rng: &mut R) -> Result<Stats> {
    let mut stats = Stats::default();
    for n in 1..=rounds {
        let mut deck = Deck::new_and_shuffled(rng);
        let round = Round::deal(&mut deck)?;
        let outcome = round.settle()?;

        info!(
            "Round {n} player {} dealer {} {}",
            outcome.player, outcome.dealer, outcome.result
        );

        if let Some(bonus) = &outcome.fortune {
            info!("Round {n} Fortune bonus {bonus}");
        }

        if let Some(bonus) = &outcome.ace_high {
            info!("Round {n} Ace High bonus {bonus}");
        }

        stats.record(&outcome);
    }

    Ok(stats)
}
