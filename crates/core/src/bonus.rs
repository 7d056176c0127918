// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Side bets paytables.
//!
//! The Fortune bonus pays on the best 5 cards hand out of the player seven
//! cards, no matter how the player arranges them. The Ace High bonus pays when
//! the dealer, or both the dealer and the player, have an ace high Pai Gow.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::{RoundError, Side},
    poker::{Card, HandCategory, PlayerHands, best_hand},
    round::{is_ace_high_pai_gow, validate_seven},
};

/// A payout ratio, i.e. 400:1 pays 400 units for each unit wagered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payout {
    /// The units paid.
    pub numerator: u32,
    /// The units wagered.
    pub denominator: u32,
}

impl Payout {
    /// Creates a payout ratio.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The whole units paid for each unit wagered.
    pub fn multiplier(&self) -> u32 {
        self.numerator.checked_div(self.denominator).unwrap_or(0)
    }
}

impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// The hands that pay a Fortune bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FortuneHand {
    /// Four aces and the joker.
    FiveAces,
    /// Ten to ace straight flush.
    RoyalFlush,
    /// Any other straight flush.
    StraightFlush,
    /// Four of a kind.
    FourOfAKind,
    /// Full house.
    FullHouse,
    /// Flush.
    Flush,
    /// Straight.
    Straight,
    /// Three of a kind.
    ThreeOfAKind,
}

impl FortuneHand {
    /// The paytable payout for this hand.
    pub fn payout(self) -> Payout {
        match self {
            FortuneHand::FiveAces => Payout::new(400, 1),
            FortuneHand::RoyalFlush => Payout::new(150, 1),
            FortuneHand::StraightFlush => Payout::new(50, 1),
            FortuneHand::FourOfAKind => Payout::new(25, 1),
            FortuneHand::FullHouse => Payout::new(5, 1),
            FortuneHand::Flush => Payout::new(4, 1),
            FortuneHand::Straight => Payout::new(3, 1),
            FortuneHand::ThreeOfAKind => Payout::new(3, 1),
        }
    }

    /// The paytable label.
    pub fn label(self) -> &'static str {
        match self {
            FortuneHand::FiveAces => "Five Aces",
            FortuneHand::RoyalFlush => "Royal Flush",
            FortuneHand::StraightFlush => "Straight Flush",
            FortuneHand::FourOfAKind => "Four of a Kind",
            FortuneHand::FullHouse => "Full House",
            FortuneHand::Flush => "Flush",
            FortuneHand::Straight => "Straight",
            FortuneHand::ThreeOfAKind => "Three of a Kind",
        }
    }
}

/// A winning Fortune bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneBonus {
    /// The paying hand.
    pub hand: FortuneHand,
    /// The payout ratio.
    pub payout: Payout,
    /// The whole units paid for each unit wagered.
    pub multiplier: u32,
}

impl FortuneBonus {
    fn new(hand: FortuneHand) -> Self {
        let payout = hand.payout();
        Self {
            hand,
            payout,
            multiplier: payout.multiplier(),
        }
    }

    /// The bonus label.
    pub fn label(&self) -> &'static str {
        self.hand.label()
    }
}

impl fmt::Display for FortuneBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.payout)
    }
}

/// Evaluates the Fortune bonus for the player seven cards.
///
/// Returns `None` if the best 5 cards hand is weaker than three of a kind.
pub fn fortune_bonus(player_seven: &[Card]) -> Option<FortuneBonus> {
    let best = best_hand(player_seven)?;
    let hand = match best.category() {
        HandCategory::FiveAces => FortuneHand::FiveAces,
        HandCategory::StraightFlush if best.is_royal_flush() => FortuneHand::RoyalFlush,
        HandCategory::StraightFlush => FortuneHand::StraightFlush,
        HandCategory::FourOfAKind => FortuneHand::FourOfAKind,
        HandCategory::FullHouse => FortuneHand::FullHouse,
        HandCategory::Flush => FortuneHand::Flush,
        HandCategory::Straight => FortuneHand::Straight,
        HandCategory::ThreeOfAKind => FortuneHand::ThreeOfAKind,
        HandCategory::TwoPair | HandCategory::Pair | HandCategory::HighCard => return None,
    };

    Some(FortuneBonus::new(hand))
}

/// The Ace High bonus winning scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AceHighHand {
    /// Both the player and the dealer have an ace high Pai Gow.
    PlayerAndDealer,
    /// Only the dealer has an ace high Pai Gow, with the joker.
    DealerWithJoker,
    /// Only the dealer has an ace high Pai Gow.
    Dealer,
}

impl AceHighHand {
    /// The paytable payout for this scenario.
    pub fn payout(self) -> Payout {
        match self {
            AceHighHand::PlayerAndDealer => Payout::new(40, 1),
            AceHighHand::DealerWithJoker => Payout::new(15, 1),
            AceHighHand::Dealer => Payout::new(5, 1),
        }
    }

    /// The paytable label.
    pub fn label(self) -> &'static str {
        match self {
            AceHighHand::PlayerAndDealer => "Player and Dealer Ace High",
            AceHighHand::DealerWithJoker => "Dealer Ace High with Joker",
            AceHighHand::Dealer => "Dealer Ace High",
        }
    }
}

/// A winning Ace High bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AceHighBonus {
    /// The paying scenario.
    pub hand: AceHighHand,
    /// The payout ratio.
    pub payout: Payout,
    /// The whole units paid for each unit wagered.
    pub multiplier: u32,
}

impl AceHighBonus {
    fn new(hand: AceHighHand) -> Self {
        let payout = hand.payout();
        Self {
            hand,
            payout,
            multiplier: payout.multiplier(),
        }
    }

    /// The bonus label.
    pub fn label(&self) -> &'static str {
        self.hand.label()
    }
}

impl fmt::Display for AceHighBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.payout)
    }
}

/// Evaluates the Ace High bonus for the placed player and dealer hands.
pub fn ace_high_side_bet(
    player: &PlayerHands,
    player_seven: &[Card],
    dealer: &PlayerHands,
    dealer_seven: &[Card],
) -> Result<Option<AceHighBonus>, RoundError> {
    validate_seven(Side::Player, player, player_seven)?;
    validate_seven(Side::Dealer, dealer, dealer_seven)?;

    let player_ace_high = is_ace_high_pai_gow(player, player_seven);
    let dealer_ace_high = is_ace_high_pai_gow(dealer, dealer_seven);
    let dealer_joker = dealer_seven.iter().any(Card::is_joker);

    Ok(ace_high_hand(player_ace_high, dealer_ace_high, dealer_joker).map(AceHighBonus::new))
}

/// Maps the ace high Pai Gow flags to the paying scenario.
fn ace_high_hand(player: bool, dealer: bool, dealer_joker: bool) -> Option<AceHighHand> {
    match (player, dealer) {
        (true, true) => Some(AceHighHand::PlayerAndDealer),
        (false, true) if dealer_joker => Some(AceHighHand::DealerWithJoker),
        (false, true) => Some(AceHighHand::Dealer),
        _ => None,
    }
}
