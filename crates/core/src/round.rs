// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round resolution.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::{RoundError, Side},
    poker::{Card, Deck, Hand, PlayerHands},
};

/// The result of a round for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The player beats both dealer hands.
    PlayerWins,
    /// The dealer beats or copies both player hands.
    DealerWins,
    /// Each side wins one hand, or the dealer has an ace high Pai Gow.
    Push,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::PlayerWins => "Player wins",
            GameResult::DealerWins => "Dealer wins",
            GameResult::Push => "Push",
        };

        write!(f, "{s}")
    }
}

/// Checks if an arrangement is an ace high Pai Gow: both hands are high card
/// and the seven cards have an ace or the joker.
pub fn is_ace_high_pai_gow(hands: &PlayerHands, seven: &[Card]) -> bool {
    hands.is_high_card() && seven.iter().any(|c| c.is_ace() || c.is_joker())
}

/// Resolves a round.
///
/// If the dealer has an ace high Pai Gow the round is a push, else the player
/// must beat the dealer on both hands to win, a copy goes to the dealer.
pub fn resolve_round(
    player: &PlayerHands,
    dealer: &PlayerHands,
    dealer_seven: &[Card],
) -> Result<GameResult, RoundError> {
    validate_hands(Side::Player, player)?;
    validate_seven(Side::Dealer, dealer, dealer_seven)?;

    if is_ace_high_pai_gow(dealer, dealer_seven) {
        debug!("Dealer ace high Pai Gow {dealer}");
        return Ok(GameResult::Push);
    }

    let wins_high = player.high > dealer.high;
    let wins_low = player.low > dealer.low;
    debug!("Player wins high: {wins_high} low: {wins_low}");

    let result = match (wins_high, wins_low) {
        (true, true) => GameResult::PlayerWins,
        (false, false) => GameResult::DealerWins,
        _ => GameResult::Push,
    };

    Ok(result)
}

/// Checks hands sizes and that the high hand is not fouled.
pub(crate) fn validate_hands(side: Side, hands: &PlayerHands) -> Result<(), RoundError> {
    check_size(side, "low", &hands.low, Hand::LOW_SIZE)?;
    check_size(side, "high", &hands.high, Hand::HIGH_SIZE)?;

    if hands.high < hands.low {
        return Err(RoundError::Foul(side));
    }

    Ok(())
}

/// Validates the hands and checks they are made of the side seven cards.
pub(crate) fn validate_seven(
    side: Side,
    hands: &PlayerHands,
    seven: &[Card],
) -> Result<(), RoundError> {
    if seven.len() != Deck::HAND_SIZE {
        return Err(RoundError::SevenCards {
            side,
            count: seven.len(),
        });
    }

    validate_hands(side, hands)?;

    match hands.cards().find(|c| !seven.contains(c)) {
        Some(&card) => Err(RoundError::UnknownCard { side, card }),
        None => Ok(()),
    }
}

fn check_size(
    side: Side,
    name: &'static str,
    hand: &Hand,
    expected: usize,
) -> Result<(), RoundError> {
    if hand.has_size(expected) {
        Ok(())
    } else {
        Err(RoundError::HandSize {
            side,
            name,
            count: hand.cards().len(),
            expected,
        })
    }
}
