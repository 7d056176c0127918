// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker game types.
//!
//! Resolves Pai Gow rounds between a player and the dealer, and evaluates the
//! Fortune and Ace High side bets. A [Round](game::Round) deals the cards,
//! arranges the dealer hands the house way, and settles the round once the
//! player cards placement is legal:
//!
//! ```
//! # use paigow_core::{game::Round, poker::Deck};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(11));
//! let round = Round::deal(&mut deck).unwrap();
//! let outcome = round.settle().unwrap();
//! println!("{}: {}", outcome.player, outcome.result);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod bonus;
pub mod error;
pub mod game;
pub mod placement;
pub mod poker;
pub mod round;

pub use bonus::{AceHighBonus, FortuneBonus, Payout, ace_high_side_bet, fortune_bonus};
pub use error::{RoundError, Side};
pub use round::{GameResult, resolve_round};
