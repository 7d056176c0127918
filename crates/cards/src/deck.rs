// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow cards definitions.
use anyhow::{Result, anyhow, bail};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::subsets::for_each_ksubset;

/// The joker identifier, all other cards have ids in 0..52.
const JOKER_ID: u8 = 52;

/// A Pai Gow card.
///
/// A card is either one of the 52 standard cards or the joker, and it is
/// represented by a unique identifier with the following format:
///
/// ```text
///   id = (rank - 2) * 4 + suit   for standard cards (0..52)
///   id = 52                      for the joker
/// ```
///
/// The identifier is the card identity used for placement bookkeeping, there
/// is a single joker in the deck so no two cards share an id. Cards serialize
/// as their id and deserializing an id greater than 52 fails.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// The joker.
    pub const JOKER: Card = Card(JOKER_ID);

    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self((rank as u8 - Rank::Deuce as u8) * 4 + suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns true if this is the joker.
    #[inline]
    pub fn is_joker(&self) -> bool {
        self.0 == JOKER_ID
    }

    /// Returns true if this is an ace, the joker is not an ace.
    #[inline]
    pub fn is_ace(&self) -> bool {
        self.rank() == Some(Rank::Ace)
    }

    /// Returns the card rank, `None` for the joker.
    pub fn rank(&self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Rank::ranks().nth((self.0 / 4) as usize)
        }
    }

    /// Returns the card suit, `None` for the joker.
    pub fn suit(&self) -> Option<Suit> {
        if self.is_joker() {
            None
        } else {
            Suit::suits().nth((self.0 % 4) as usize)
        }
    }

    /// The scoring value of this card rank (2..=14), `None` for the joker.
    #[inline]
    pub fn value(&self) -> Option<u8> {
        self.rank().map(Rank::value)
    }

    /// The value used to sort and display cards, the joker sorts above the aces.
    #[inline]
    pub fn sort_value(&self) -> u8 {
        self.value().unwrap_or(Rank::JOKER_VALUE)
    }
}

impl TryFrom<u8> for Card {
    type Error = anyhow::Error;

    fn try_from(id: u8) -> Result<Self> {
        if id > JOKER_ID {
            bail!("Invalid card id {id}");
        }

        Ok(Card(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank(), self.suit()) {
            (Some(rank), Some(suit)) => write!(f, "{rank}{suit}"),
            _ => write!(f, "JK"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_uppercase();
        if s == "JK" || s == "JOKER" {
            return Ok(Card::JOKER);
        }

        let Some((suit_pos, _)) = s.char_indices().last() else {
            bail!("Invalid card {s:?}");
        };

        let (rank, suit) = s.split_at(suit_pos);
        let rank = match rank {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => bail!("Invalid rank in card {s:?}"),
        };

        let suit = match suit {
            "C" => Suit::Clubs,
            "D" => Suit::Diamonds,
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            _ => bail!("Invalid suit in card {s:?}"),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas, i.e. "AS KH JK".
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(Card::from_str)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Sentinel value for the joker, only used for sorting and display.
    pub const JOKER_VALUE: u8 = 15;

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit, suits have no ordering and only matter for flushes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A 53 cards deck, the 52 standard cards and the joker.
///
/// Cards are dealt in sequence order, the first card of the deck is dealt
/// first.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in reverse dealing order so that dealing pops from the back.
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 53;

    /// The number of cards dealt to the player and to the dealer.
    pub const HAND_SIZE: usize = 7;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck from an externally shuffled sequence.
    ///
    /// Fails if the sequence is not a permutation of the 53 cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != Self::SIZE {
            bail!("Deck must have {} cards, got {}", Self::SIZE, cards.len());
        }

        let mut seen = [false; Self::SIZE];
        for card in &cards {
            let slot = seen
                .get_mut(card.id() as usize)
                .ok_or_else(|| anyhow!("Invalid card id {}", card.id()))?;
            if *slot {
                bail!("Duplicate card {card} in deck");
            }

            *slot = true;
        }

        let mut cards = cards;
        cards.reverse();
        Ok(Self { cards })
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a seven cards hand.
    pub fn deal_hand(&mut self) -> Option<[Card; Self::HAND_SIZE]> {
        if self.cards.len() < Self::HAND_SIZE {
            return None;
        }

        let mut hand = [Card::JOKER; Self::HAND_SIZE];
        for card in hand.iter_mut() {
            *card = self.deal()?;
        }

        Some(hand)
    }

    /// Deals the player seven cards and then the dealer seven cards.
    pub fn deal_round(&mut self) -> Option<([Card; Self::HAND_SIZE], [Card; Self::HAND_SIZE])> {
        if self.cards.len() < 2 * Self::HAND_SIZE {
            return None;
        }

        let player = self.deal_hand()?;
        let dealer = self.deal_hand()?;
        Some((player, dealer))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let mut h = vec![Card::JOKER; k];
        for_each_ksubset(self.cards.len(), k, |p| {
            for (idx, &pos) in p.iter().enumerate() {
                h[idx] = self.cards[pos];
            }

            f(&h);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .chain(std::iter::once(Card::JOKER))
            .collect::<Vec<_>>();
        cards.reverse();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().rev()
    }
}
