// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow hand evaluation.
//!
//! A [Hand] is a 2 cards low hand or a 5 cards high hand ranked by a
//! [HandCategory] and a sequence of tiebreakers compared most significant
//! first. The joker is a limited wild card: it completes straights, flushes,
//! and rank groups, but it cannot make five of a kind other than five aces.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use crate::{Card, Rank};

/// The hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, no draws.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// Four aces and the joker.
    FiveAces,
}

impl HandCategory {
    /// The number of hand categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            FiveAces,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FiveAces => "Five Aces",
        };

        write!(f, "{s}")
    }
}

/// An evaluated hand.
///
/// Hands are ordered by category and then by tiebreakers, the cards are not
/// part of the comparison so two hands with different cards and the same rank
/// compare equal (a copy).
///
/// A hand serializes as its cards and it is evaluated again when it is
/// deserialized, so the rank always matches the cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
    category: HandCategory,
    tiebreakers: Vec<u8>,
}

impl Hand {
    /// The number of cards in a low hand.
    pub const LOW_SIZE: usize = 2;

    /// The number of cards in a high hand.
    pub const HIGH_SIZE: usize = 5;

    /// Evaluates a 2 or 5 cards hand.
    ///
    /// Any other number of cards evaluates to a high card ranked by the cards
    /// values, callers validating an arrangement must check the hand size.
    pub fn eval(cards: &[Card]) -> Self {
        let (category, tiebreakers) = match cards.len() {
            Self::LOW_SIZE => eval_low(cards),
            Self::HIGH_SIZE => eval_high(cards),
            _ => {
                let mut values = cards.iter().map(Card::sort_value).collect::<Vec<_>>();
                values.sort_unstable_by(|a, b| b.cmp(a));
                (HandCategory::HighCard, values)
            }
        };

        Self {
            cards: cards.to_vec(),
            category,
            tiebreakers,
        }
    }

    /// The hand cards in evaluation order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreakers values, most significant first.
    pub fn tiebreakers(&self) -> &[u8] {
        &self.tiebreakers
    }

    /// Checks if this is a low hand, or a high hand, with the right size.
    pub fn has_size(&self, size: usize) -> bool {
        self.cards.len() == size
    }

    /// Checks if this hand is a ten to ace straight flush.
    pub fn is_royal_flush(&self) -> bool {
        self.category == HandCategory::StraightFlush
            && self.tiebreakers.first() == Some(&Rank::Ace.value())
    }

    /// Checks if any of the hand cards is the joker.
    pub fn has_joker(&self) -> bool {
        self.cards.iter().any(Card::is_joker)
    }
}

/// Error building a hand from cards that are neither a low nor a high hand.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("A hand must have 2 or 5 cards, got {0}")]
pub struct HandSizeError(pub usize);

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandSizeError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            Self::LOW_SIZE | Self::HIGH_SIZE => Ok(Self::eval(&cards)),
            len => Err(HandSizeError(len)),
        }
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreakers.cmp(&other.tiebreakers))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }

        write!(f, "({})", self.category)
    }
}

/// Evaluates a hand, see [Hand::eval].
pub fn evaluate(cards: &[Card]) -> Hand {
    Hand::eval(cards)
}

/// Values of the non joker cards sorted from the highest, and number of jokers.
fn split_jokers(cards: &[Card]) -> (Vec<u8>, usize) {
    let mut values = cards.iter().filter_map(Card::value).collect::<Vec<_>>();
    values.sort_unstable_by(|a, b| b.cmp(a));
    let jokers = cards.len() - values.len();
    (values, jokers)
}

fn eval_low(cards: &[Card]) -> (HandCategory, Vec<u8>) {
    let (values, jokers) = split_jokers(cards);
    match values.as_slice() {
        // The joker pairs the other card.
        &[v] if jokers > 0 => (HandCategory::Pair, vec![v]),
        &[a, b] if a == b => (HandCategory::Pair, vec![a]),
        _ => (HandCategory::HighCard, values),
    }
}

fn eval_high(cards: &[Card]) -> (HandCategory, Vec<u8>) {
    let (values, jokers) = split_jokers(cards);
    let joker = jokers > 0;

    // Rank groups as (count, value) sorted by count and then by value.
    let mut counts = [0u8; Rank::JOKER_VALUE as usize];
    for &v in &values {
        counts[v as usize] += 1;
    }

    let mut groups = counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c > 0)
        .map(|(v, &c)| (c as usize, v as u8))
        .collect::<Vec<_>>();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let (top, top_value) = groups.first().copied().unwrap_or((0, 0));
    let (second, second_value) = groups.get(1).copied().unwrap_or((0, 0));

    let mut suits = cards.iter().filter_map(Card::suit);
    let is_flush = match suits.next() {
        Some(first) => suits.all(|s| s == first),
        None => true,
    };

    let straight = straight_high(&values, jokers);

    if joker && values.len() == 4 && values.iter().all(|&v| v == Rank::Ace.value()) {
        return (HandCategory::FiveAces, vec![Rank::Ace.value()]);
    }

    if is_flush {
        if let Some(high) = straight {
            return (HandCategory::StraightFlush, vec![high]);
        }
    }

    if top + jokers >= 4 {
        return (HandCategory::FourOfAKind, vec![top_value]);
    }

    // The joker upgrades the highest of two pairs.
    if (top == 3 && second == 2) || (joker && top == 2 && second == 2) {
        return (HandCategory::FullHouse, vec![top_value]);
    }

    if is_flush {
        return (HandCategory::Flush, flush_values(&values, jokers));
    }

    if let Some(high) = straight {
        return (HandCategory::Straight, vec![high]);
    }

    if top + jokers >= 3 {
        return (HandCategory::ThreeOfAKind, vec![top_value]);
    }

    if top == 2 && second == 2 {
        return (HandCategory::TwoPair, vec![top_value, second_value]);
    }

    // Without a natural pair the joker pairs the highest card.
    if top == 2 || joker {
        return (HandCategory::Pair, vec![top_value]);
    }

    (HandCategory::HighCard, values)
}

/// Returns the straight high card value if the cards make a straight.
///
/// The jokers fill the straight gaps, the ace plays high or low in the five
/// high straight, and there are no wraparound straights.
fn straight_high(values: &[u8], jokers: usize) -> Option<u8> {
    if values.len() + jokers != Hand::HIGH_SIZE {
        return None;
    }

    // Values are sorted so duplicates are adjacent.
    if values.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    let ace = Rank::Ace.value();
    let wheel = Rank::Five.value();
    (wheel..=ace).rev().find(|&high| {
        values
            .iter()
            .all(|&v| (high - 4..=high).contains(&v) || (v == ace && high == wheel))
    })
}

/// The flush tiebreakers, each joker plays as the highest missing rank.
fn flush_values(values: &[u8], jokers: usize) -> Vec<u8> {
    let mut out = values.to_vec();
    let missing = Rank::ranks()
        .rev()
        .map(Rank::value)
        .filter(|v| !values.contains(v))
        .take(jokers);
    out.extend(missing);
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, parse_cards};

    fn eval(s: &str) -> Hand {
        Hand::eval(&parse_cards(s).unwrap())
    }

    fn rank(s: &str) -> (HandCategory, Vec<u8>) {
        let hand = eval(s);
        (hand.category(), hand.tiebreakers().to_vec())
    }

    #[test]
    fn low_hands() {
        use HandCategory::*;

        assert_eq!(rank("7S 7H"), (Pair, vec![7]));
        assert_eq!(rank("KS 9H"), (HighCard, vec![13, 9]));
        assert_eq!(rank("4D AC"), (HighCard, vec![14, 4]));
        assert_eq!(rank("JK 5H"), (Pair, vec![5]));
        assert_eq!(rank("AH JK"), (Pair, vec![14]));

        assert!(eval("2C 2D") > eval("AS KS"));
        assert!(eval("AS KS") > eval("AS QS"));
        assert_eq!(eval("AS KS"), eval("AD KH"));
    }

    #[test]
    fn high_hands_without_joker() {
        use HandCategory::*;

        assert_eq!(rank("TS JS QS KS AS"), (StraightFlush, vec![14]));
        assert_eq!(rank("AD 2D 3D 4D 5D"), (StraightFlush, vec![5]));
        assert_eq!(rank("9C 9D 9H 9S 2C"), (FourOfAKind, vec![9]));
        assert_eq!(rank("3C 3D 3H KS KC"), (FullHouse, vec![3]));
        assert_eq!(rank("2H 7H 9H JH KH"), (Flush, vec![13, 11, 9, 7, 2]));
        assert_eq!(rank("6C 7D 8H 9S TC"), (Straight, vec![10]));
        assert_eq!(rank("AC 2D 3H 4S 5C"), (Straight, vec![5]));
        assert_eq!(rank("QC QD QH 4S 2C"), (ThreeOfAKind, vec![12]));
        assert_eq!(rank("JC JD 4H 4S AC"), (TwoPair, vec![11, 4]));
        assert_eq!(rank("8C 8D 4H 3S AC"), (Pair, vec![8]));
        assert_eq!(rank("2C 4D 6H 8S TC"), (HighCard, vec![10, 8, 6, 4, 2]));

        // No wraparound straights.
        assert_eq!(rank("QC KD AH 2S 3C").0, HighCard);
    }

    #[test]
    fn high_hands_with_joker() {
        use HandCategory::*;

        assert_eq!(rank("AS AH AD AC JK"), (FiveAces, vec![14]));
        assert_eq!(rank("JS QS KS AS JK"), (StraightFlush, vec![14]));
        assert_eq!(rank("9S TS JS QS JK"), (StraightFlush, vec![13]));
        assert_eq!(rank("5H 6H 8H 9H JK"), (StraightFlush, vec![9]));
        assert_eq!(rank("KC KD KH KS JK"), (FourOfAKind, vec![13]));
        assert_eq!(rank("7C 7D 7H 2S JK"), (FourOfAKind, vec![7]));
        assert_eq!(rank("7C 7D 2H 2S JK"), (FullHouse, vec![7]));
        assert_eq!(rank("2H 7H 9H JH JK"), (Flush, vec![14, 11, 9, 7, 2]));
        assert_eq!(rank("AH 7H 9H JH JK"), (Flush, vec![14, 13, 11, 9, 7]));
        assert_eq!(rank("6C 7D 9H TS JK"), (Straight, vec![10]));
        assert_eq!(rank("TC JD QH KS JK"), (Straight, vec![14]));
        assert_eq!(rank("2C 3D 4C JK AS"), (Straight, vec![5]));
        assert_eq!(rank("AC 3D 4H 5S JK"), (Straight, vec![5]));
        assert_eq!(rank("QC QD 4H 3S JK"), (ThreeOfAKind, vec![12]));
        assert_eq!(rank("2C 5D 9H KS JK"), (Pair, vec![13]));

        // No wraparound straights.
        assert_eq!(rank("KC AD 2H 3S JK").0, Pair);
    }

    #[test]
    fn wrong_size_hands_are_high_card() {
        use HandCategory::*;

        assert_eq!(rank("AS AH AD"), (HighCard, vec![14, 14, 14]));
        assert_eq!(rank("AS"), (HighCard, vec![14]));
        assert_eq!(rank("2S JK 3C 4C 5C 6C"), (HighCard, vec![15, 6, 5, 4, 3, 2]));
        assert_eq!(rank(""), (HighCard, vec![]));
    }

    #[test]
    fn category_dominates_tiebreakers() {
        // Weakest hand of a category beats the strongest of the one below.
        let hands = [
            "AS KD QH JS 9C",
            "2C 2D 3H 4S 5C",
            "AC AD KH KS QC",
            "2C 2D 2H 3S 4C",
            "AC 2D 3H 4S 5C",
            "TC JD QH KS AC",
            "2C 3C 4C 5C 7C",
            "AH KH QH JH 9H",
            "2C 2D 2H 3S 3C",
            "AC AD AH KS KC",
            "2C 2D 2H 2S 3C",
            "AC AD AH AS KC",
            "AD 2D 3D 4D 5D",
            "TS JS QS KS AS",
            "AS AH AD AC JK",
        ];

        let hands = hands.iter().map(|h| eval(h)).collect::<Vec<_>>();
        assert!(hands.windows(2).all(|w| w[0] <= w[1]));
        assert!(hands[1] > hands[0]);
        assert!(hands[6] > hands[5]);
        assert!(hands[12] > hands[11]);
        assert!(hands[14] > hands[13]);
    }

    #[test]
    fn copies_compare_equal() {
        assert_eq!(eval("AS KD QH JS 9C"), eval("AH KC QD JH 9S"));
        assert_eq!(eval("TC JD QH KS AC"), eval("TD JK QS KH AS"));

        // Two pair and pair rank only by the paired cards.
        assert_eq!(eval("JC JD 4H 4S AC"), eval("JH JS 4C 4D 2C"));
        assert_eq!(eval("8C 8D 4H 3S AC"), eval("8H 8S 5H 3C 2C"));
    }

    #[test]
    fn hands_serialize_as_cards() {
        let hand = eval("4S 6H 8C 9D JH");
        let json = serde_json::to_string(&hand).unwrap();
        let cards = serde_json::to_string(hand.cards()).unwrap();
        assert_eq!(json, cards);

        let de: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(de.category(), HandCategory::HighCard);
        assert_eq!(de.tiebreakers(), &[11, 9, 8, 6, 4]);
        assert_eq!(de.cards(), hand.cards());

        // The rank cannot be set from outside, it comes from the cards.
        let forged = format!(r#"{{"cards":{cards},"category":"FiveAces","tiebreakers":[14]}}"#);
        assert!(serde_json::from_str::<Hand>(&forged).is_err());

        // Only low and high hands sizes.
        let three = serde_json::to_string(&parse_cards("AS AH AD").unwrap()).unwrap();
        assert!(serde_json::from_str::<Hand>(&three).is_err());
        assert_eq!(
            Hand::try_from(parse_cards("AS AH AD").unwrap()).unwrap_err(),
            HandSizeError(3)
        );
        assert_eq!(
            Hand::try_from(parse_cards("JK 9S").unwrap()).unwrap().category(),
            HandCategory::Pair
        );
    }

    #[test]
    fn low_hand_pairs_count() {
        let mut pairs = 0;
        Deck::default().for_each(2, |cards| {
            if Hand::eval(cards).category() == HandCategory::Pair {
                pairs += 1;
            }
        });

        // 13 ranks * 6 natural pairs + 52 joker pairs.
        assert_eq!(pairs, 13 * 6 + 52);
    }

    // This takes a while to run in debug mode as it goes through 2.8M hands.
    #[test]
    #[ignore]
    fn high_hands_counts() {
        let mut counts = [0usize; HandCategory::COUNT];
        Deck::default().for_each(5, |cards| {
            counts[Hand::eval(cards).category() as usize] += 1;
        });

        assert_eq!(counts.iter().sum::<usize>(), 2_869_685);
        assert_eq!(counts[HandCategory::FiveAces as usize], 1);
        // 13 natural quads with 48 kickers, 13 * 4 trips with the joker and
        // 12 * 4 kickers, plus 12 non ace quads with the joker.
        assert_eq!(
            counts[HandCategory::FourOfAKind as usize],
            13 * 48 + 13 * 4 * 48 + 12
        );
    }
}
