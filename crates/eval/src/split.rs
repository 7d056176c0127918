// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands arrangement and split search.
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Deck, Hand, subsets::for_each_split};

/// A seven cards hand arranged as a 2 cards low hand and a 5 cards high hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerHands {
    /// The 5 cards high hand.
    pub high: Hand,
    /// The 2 cards low hand.
    pub low: Hand,
}

impl PlayerHands {
    /// Creates an arrangement from the low and high hands cards.
    ///
    /// The arrangement is not checked, see [PlayerHands::is_legal].
    pub fn new(low: &[Card], high: &[Card]) -> Self {
        Self {
            high: Hand::eval(high),
            low: Hand::eval(low),
        }
    }

    /// Checks the hands sizes and that the high hand ranks at least as the low
    /// hand, a copy between the two hands is a legal arrangement.
    pub fn is_legal(&self) -> bool {
        self.low.has_size(Hand::LOW_SIZE)
            && self.high.has_size(Hand::HIGH_SIZE)
            && self.high >= self.low
    }

    /// Checks if both hands are high card hands.
    pub fn is_high_card(&self) -> bool {
        use crate::HandCategory::HighCard;
        self.low.category() == HighCard && self.high.category() == HighCard
    }

    /// Iterates all cards, the low hand first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.low.cards().iter().chain(self.high.cards())
    }
}

impl fmt::Display for PlayerHands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low: {} high: {}", self.low, self.high)
    }
}

/// Checks a player arrangement.
///
/// The arrangement is legal if all cards are placed with 2 cards in the low
/// hand and 5 in the high hand, and the high hand ranks at least as the low
/// hand.
pub fn is_legal_arrangement(low: &[Card], high: &[Card], unassigned: usize) -> bool {
    unassigned == 0
        && low.len() == Hand::LOW_SIZE
        && high.len() == Hand::HIGH_SIZE
        && PlayerHands::new(low, high).is_legal()
}

/// Finds the house way arrangement for seven cards.
///
/// Searches all the 21 splits and returns the split with the best high hand,
/// using the low hand to break ties between splits with equal high hands. A
/// split is a candidate only if the high hand beats the low hand, a copy does
/// not qualify. If there are no candidates the two lowest cards make the low
/// hand.
pub fn best_split(cards: &[Card]) -> PlayerHands {
    if cards.len() != Deck::HAND_SIZE {
        warn!("Splitting {} cards hand", cards.len());
        return fallback_split(cards);
    }

    let mut best: Option<PlayerHands> = None;
    for_each_split(cards, Hand::LOW_SIZE, |low, high| {
        let (low, high) = (Hand::eval(low), Hand::eval(high));
        if high <= low {
            return;
        }

        let is_better = best.as_ref().is_none_or(|b| {
            high.cmp(&b.high)
                .then_with(|| low.cmp(&b.low))
                .is_gt()
        });

        if is_better {
            best = Some(PlayerHands { high, low });
        }
    });

    best.unwrap_or_else(|| {
        warn!("No legal split for {cards:?}");
        fallback_split(cards)
    })
}

/// Sorts the cards from the highest and puts the last two in the low hand.
fn fallback_split(cards: &[Card]) -> PlayerHands {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| std::cmp::Reverse(c.sort_value()));
    let (high, low) = sorted.split_at(sorted.len().saturating_sub(Hand::LOW_SIZE));
    PlayerHands::new(low, high)
}

/// Returns the strongest 5 cards hand out of a set of cards, `None` if there
/// are less than 5 cards.
pub fn best_hand(cards: &[Card]) -> Option<Hand> {
    let mut best: Option<Hand> = None;
    for_each_split(cards, Hand::HIGH_SIZE, |five, _| {
        let hand = Hand::eval(five);
        if best.as_ref().is_none_or(|b| hand > *b) {
            best = Some(hand);
        }
    });

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandCategory, parse_cards};
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn legal_arrangements() {
        assert!(is_legal_arrangement(
            &cards("7S 7H"),
            &cards("2C 3D 4H 5S 6C"),
            0
        ));

        assert!(!is_legal_arrangement(
            &cards("KS KH"),
            &cards("2C 3D 4H 6S 9C"),
            0
        ));

        // A copy between the high and the low hand is legal.
        assert!(is_legal_arrangement(
            &cards("KS KH"),
            &cards("KC KD 4H 6S 9C"),
            0
        ));

        // High card hands with different sizes compare by the cards values,
        // a low hand that matches the top of the high hand ranks below it.
        assert!(is_legal_arrangement(
            &cards("KS QS"),
            &cards("KH QD 5C 4D 3S"),
            0
        ));
        assert!(!is_legal_arrangement(
            &cards("AS 2C"),
            &cards("KH QD 5C 4D 3S"),
            0
        ));
        assert!(!is_legal_arrangement(
            &cards("KS QS"),
            &cards("KH JD 5C 4D 3S"),
            0
        ));

        // Unsettled placements.
        assert!(!is_legal_arrangement(&cards("7S 7H"), &cards("2C 3D 4H 5S"), 1));
        assert!(!is_legal_arrangement(&cards("7S"), &cards("2C 3D 4H 5S 6C"), 1));
        assert!(!is_legal_arrangement(
            &cards("7S 7H"),
            &cards("2C 3D 4H 5S 6C"),
            1
        ));
        assert!(!is_legal_arrangement(
            &cards("7S 7H 8C"),
            &cards("2C 3D 4H 5S"),
            0
        ));
    }

    #[test]
    fn player_hands_serialize_as_cards() {
        let hands = PlayerHands::new(&cards("3C 2D"), &cards("4S 6H 8C 9D JH"));
        let json = serde_json::to_string(&hands).unwrap();
        let high = serde_json::to_string(hands.high.cards()).unwrap();
        let low = serde_json::to_string(hands.low.cards()).unwrap();
        assert_eq!(json, format!(r#"{{"high":{high},"low":{low}}}"#));

        let de: PlayerHands = serde_json::from_str(&json).unwrap();
        assert_eq!(de.high.category(), HandCategory::HighCard);
        assert_eq!(de.low.category(), HandCategory::HighCard);
        assert!(de.is_legal());

        // A high hand with a rank field is rejected.
        let forged = format!(
            r#"{{"high":{{"cards":{high},"category":"FiveAces","tiebreakers":[14]}},"low":{low}}}"#
        );
        assert!(serde_json::from_str::<PlayerHands>(&forged).is_err());
    }

    #[test]
    fn best_split_keeps_strongest_high_hand() {
        // The straight flush stays together and the pair of nines goes low.
        let hands = best_split(&cards("9S TS JS QS KS 9H 9D"));
        assert_eq!(hands.high.category(), HandCategory::StraightFlush);
        assert_eq!(hands.low.category(), HandCategory::Pair);
        assert_eq!(hands.low.tiebreakers(), &[9]);

        let hands = best_split(&cards("AS AH AD AC JK 7S 2D"));
        assert_eq!(hands.high.category(), HandCategory::FiveAces);
        assert_eq!(hands.low.tiebreakers(), &[7, 2]);
    }

    #[test]
    fn best_split_breaks_ties_with_low_hand() {
        // Any split keeping the quads high ties on the high hand, the best
        // low hand is the pair of kings.
        let hands = best_split(&cards("5C 5D 5H 5S KC KD 2H"));
        assert_eq!(hands.high.category(), HandCategory::FourOfAKind);
        assert_eq!(hands.low.category(), HandCategory::Pair);
        assert_eq!(hands.low.tiebreakers(), &[13]);
    }

    #[test]
    fn best_split_is_strictly_legal() {
        let mut rng = StdRng::seed_from_u64(101);
        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let seven = deck.deal_hand().unwrap();
            let hands = best_split(&seven);

            assert!(hands.high > hands.low, "{hands}");
            assert!(hands.is_legal());
            assert_eq!(hands.cards().count(), 7);
            assert!(seven.iter().all(|c| hands.cards().any(|h| h == c)));

            // No split has a stronger high hand.
            for_each_split(&seven, 2, |low, high| {
                let (low, high) = (Hand::eval(low), Hand::eval(high));
                if high > low {
                    assert!(high <= hands.high);
                }
            });
        }
    }

    #[test]
    fn fallback_split_for_wrong_size() {
        let hands = best_split(&cards("AS 2C 9D"));
        assert_eq!(hands.low.cards(), cards("9D 2C").as_slice());
        assert_eq!(hands.high.cards(), cards("AS").as_slice());
        assert!(!hands.is_legal());

        let hands = fallback_split(&cards("JK 3C 2D KH 4S 9C TD"));
        assert_eq!(hands.low.cards(), cards("3C 2D").as_slice());
        assert_eq!(hands.high.cards(), cards("JK KH TD 9C 4S").as_slice());
    }

    #[test]
    fn best_hand_of_seven() {
        let hand = best_hand(&cards("AS AH AD AC JK 7S 2D")).unwrap();
        assert_eq!(hand.category(), HandCategory::FiveAces);

        let hand = best_hand(&cards("2C 3C 4C 5C 9D 9H JK")).unwrap();
        assert_eq!(hand.category(), HandCategory::StraightFlush);
        assert_eq!(hand.tiebreakers(), &[6]);

        assert!(best_hand(&cards("2C 3C 4C 5C")).is_none());
        assert_eq!(
            best_hand(&cards("2C 3C 4C 5C 9D")).unwrap().category(),
            HandCategory::HighCard
        );
    }
}
