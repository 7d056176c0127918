// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow cards types.
//!
//! This crate define types to create cards for a 53 cards deck, the 52
//! standard cards plus a joker:
//!
//! ```
//! # use paigow_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let jk = Card::JOKER;
//! assert!(ah.is_ace() && jk.is_joker());
//! assert_eq!("AH".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to deal the player and the dealer seven cards from a seeded
//! shuffle:
//!
//! ```
//! # use paigow_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! let (player, dealer) = deck.deal_round().unwrap();
//! assert_eq!(player.len() + dealer.len(), 14);
//! assert_eq!(deck.count(), 39);
//! ```
//!
//! The [subsets] module provides the choose k of n generator used to search
//! hands splits:
//!
//! ```
//! # use paigow_cards::{Deck, subsets};
//! let seven = Deck::default().into_iter().take(7).collect::<Vec<_>>();
//! let mut count = 0;
//! subsets::for_each_split(&seven, 2, |low, high| {
//!     assert_eq!((low.len(), high.len()), (2, 5));
//!     count += 1;
//! });
//! assert_eq!(count, 21);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, parse_cards};

pub mod subsets;
