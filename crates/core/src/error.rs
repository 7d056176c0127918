// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round errors.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::poker::Card;

/// A side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Dealer => write!(f, "dealer"),
        }
    }
}

/// Errors returned when a round is resolved with hands that break the game
/// rules, callers must settle and validate the hands before resolving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The deck has not enough cards to deal a round.
    #[error("Not enough cards to deal, {0} left in the deck")]
    NotEnoughCards(usize),

    /// A side has not been dealt seven cards.
    #[error("The {side} has {count} cards, expected 7")]
    SevenCards {
        /// The side with the wrong cards.
        side: Side,
        /// The number of cards.
        count: usize,
    },

    /// A low or high hand has the wrong number of cards.
    #[error("The {side} {name} hand has {count} cards, expected {expected}")]
    HandSize {
        /// The side with the wrong hand.
        side: Side,
        /// The hand name, low or high.
        name: &'static str,
        /// The number of cards in the hand.
        count: usize,
        /// The expected number of cards.
        expected: usize,
    },

    /// The high hand ranks below the low hand.
    #[error("The {0} low hand beats the high hand")]
    Foul(Side),

    /// The placement has unassigned cards or wrong hands sizes.
    #[error("Placement not settled: {low} low, {high} high, {unassigned} unassigned")]
    Unsettled {
        /// Cards in the low hand.
        low: usize,
        /// Cards in the high hand.
        high: usize,
        /// Unassigned cards.
        unassigned: usize,
    },

    /// A card is not part of the side seven cards.
    #[error("Card {card} is not in the {side} hand")]
    UnknownCard {
        /// The side.
        side: Side,
        /// The card.
        card: Card,
    },
}
