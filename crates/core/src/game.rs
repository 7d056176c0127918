// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A Pai Gow round between the player and the dealer.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    bonus::{AceHighBonus, FortuneBonus, ace_high_side_bet, fortune_bonus},
    error::RoundError,
    placement::CardPlacement,
    poker::{Card, Deck, PlayerHands, best_split},
    round::{GameResult, resolve_round},
};

/// A round of play.
///
/// The dealer hands are arranged the house way when the cards are dealt, the
/// player placement starts from the house way suggestion and the player can
/// rearrange the cards before settling the round.
#[derive(Debug, Clone)]
pub struct Round {
    player_cards: [Card; Deck::HAND_SIZE],
    dealer_cards: [Card; Deck::HAND_SIZE],
    dealer: PlayerHands,
    suggested: PlayerHands,
    placement: CardPlacement,
}

/// A settled round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The player hands.
    pub player: PlayerHands,
    /// The dealer hands.
    pub dealer: PlayerHands,
    /// The round result.
    pub result: GameResult,
    /// The Fortune bonus if the player cards pay.
    pub fortune: Option<FortuneBonus>,
    /// The Ace High bonus if the round pays.
    pub ace_high: Option<AceHighBonus>,
}

impl Round {
    /// Deals a new round from the deck.
    pub fn deal(deck: &mut Deck) -> Result<Self, RoundError> {
        let (player, dealer) = deck
            .deal_round()
            .ok_or(RoundError::NotEnoughCards(deck.count()))?;
        Ok(Self::new(player, dealer))
    }

    /// Creates a round with the given player and dealer cards.
    pub fn new(
        player_cards: [Card; Deck::HAND_SIZE],
        dealer_cards: [Card; Deck::HAND_SIZE],
    ) -> Self {
        let dealer = best_split(&dealer_cards);
        let suggested = best_split(&player_cards);
        let placement = CardPlacement::from_hands(&suggested);

        Self {
            player_cards,
            dealer_cards,
            dealer,
            suggested,
            placement,
        }
    }

    /// The player seven cards.
    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }

    /// The dealer seven cards.
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }

    /// The dealer house way hands.
    pub fn dealer_hands(&self) -> &PlayerHands {
        &self.dealer
    }

    /// The house way suggestion for the player.
    pub fn suggested(&self) -> &PlayerHands {
        &self.suggested
    }

    /// The player cards placement.
    pub fn placement(&self) -> &CardPlacement {
        &self.placement
    }

    /// The player cards placement for rearranging the cards.
    pub fn placement_mut(&mut self) -> &mut CardPlacement {
        &mut self.placement
    }

    /// Settles the round with the current player placement.
    pub fn settle(&self) -> Result<RoundOutcome, RoundError> {
        let player = self.placement.hands()?;
        let result = resolve_round(&player, &self.dealer, &self.dealer_cards)?;
        let fortune = fortune_bonus(&self.player_cards);
        let ace_high =
            ace_high_side_bet(&player, &self.player_cards, &self.dealer, &self.dealer_cards)?;

        debug!("Player {player} dealer {} result: {result}", self.dealer);

        Ok(RoundOutcome {
            player,
            dealer: self.dealer.clone(),
            result,
            fortune,
            ace_high,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bonus::FortuneHand,
        placement::Slot,
        poker::{HandCategory, parse_cards},
    };
    use rand::{SeedableRng, rngs::StdRng};

    fn seven(s: &str) -> [Card; Deck::HAND_SIZE] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn round_with_house_way() {
        let round = Round::new(
            seven("AS AH AD AC JK 7S 2D"),
            seven("KS QD 9C 8H 5S 4D 3C"),
        );

        assert_eq!(round.suggested().high.category(), HandCategory::FiveAces);
        assert!(round.placement().is_legal());

        let outcome = round.settle().unwrap();
        assert_eq!(outcome.result, GameResult::PlayerWins);
        assert_eq!(outcome.fortune.unwrap().hand, FortuneHand::FiveAces);
        assert_eq!(outcome.ace_high, None);
    }

    #[test]
    fn dealer_ace_high_pushes_and_pays() {
        let round = Round::new(
            seven("KS KH 9C 9D 4S 4D 2C"),
            seven("AS QD 9H 7H 5S 3D 2D"),
        );

        let dealer = round.dealer_hands();
        assert_eq!(dealer.high.category(), HandCategory::HighCard);
        assert_eq!(dealer.low.category(), HandCategory::HighCard);

        let outcome = round.settle().unwrap();
        assert_eq!(outcome.result, GameResult::Push);

        let bonus = outcome.ace_high.unwrap();
        assert_eq!(bonus.multiplier, 5);
    }

    #[test]
    fn rearranged_placement() {
        let mut round = Round::new(
            seven("7S 7H 2C 3D 4H 5S 6C"),
            seven("KS QD 9C 8H 5D 4D 3C"),
        );

        // Unsettle the placement.
        let card = round.placement().low_cards()[0];
        round.placement_mut().assign(card, Slot::Unassigned).unwrap();
        assert!(matches!(
            round.settle(),
            Err(RoundError::Unsettled { unassigned: 1, .. })
        ));

        round.placement_mut().assign(card, Slot::Low).unwrap();
        assert!(round.settle().is_ok());
    }

    #[test]
    fn deal_rounds_from_deck() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));
        for _ in 0..3 {
            let round = Round::deal(&mut deck).unwrap();
            assert!(round.dealer_hands().is_legal());
            assert!(round.placement().is_legal());
            assert!(round.settle().is_ok());
        }

        assert_eq!(deck.count(), 11);
        assert!(matches!(
            Round::deal(&mut deck),
            Err(RoundError::NotEnoughCards(11))
        ));
    }
}
