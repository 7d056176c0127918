// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker hand evaluator.
//!
//! Evaluator for the 2 cards low hand and the 5 cards high hand of a Pai Gow
//! Poker game played with a 53 cards deck, where the joker is a limited wild
//! card that completes straights, flushes, and rank groups up to five aces.
//!
//! To use the evaluator create a hand with [Hand::eval] and compare hands:
//!
//! ```
//! # use paigow_eval::*;
//! let straight = Hand::eval(&parse_cards("2C 3D 4C JK AS").unwrap());
//! assert_eq!(straight.category(), HandCategory::Straight);
//! assert_eq!(straight.tiebreakers(), &[5]);
//!
//! let pair = Hand::eval(&parse_cards("KS KH").unwrap());
//! assert!(straight > pair);
//! ```
//!
//! and [best_split] to find the house way arrangement of seven cards:
//!
//! ```
//! # use paigow_eval::*;
//! let seven = parse_cards("9S TS JS QS KS 9H 9D").unwrap();
//! let hands = best_split(&seven);
//! assert_eq!(hands.high.category(), HandCategory::StraightFlush);
//! assert_eq!(hands.low.category(), HandCategory::Pair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::{Hand, HandCategory, HandSizeError, evaluate};

pub mod split;
pub use split::{PlayerHands, best_hand, best_split, is_legal_arrangement};

// Reexport cards types.
pub use paigow_cards::{Card, Deck, Rank, Suit, parse_cards, subsets};
