// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player cards placement.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::{RoundError, Side},
    poker::{Card, Hand, PlayerHands, is_legal_arrangement},
};

/// Where a player card is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The card has not been placed yet.
    #[default]
    Unassigned,
    /// The card is in the 2 cards low hand.
    Low,
    /// The card is in the 5 cards high hand.
    High,
}

/// The placement of the player seven cards in the low and high hands.
///
/// The placement changes while the player arranges the cards, and it can be
/// resolved into [PlayerHands] only when it is settled with 2 low cards, 5
/// high cards, and a high hand that ranks at least as the low hand.
#[derive(Debug, Clone)]
pub struct CardPlacement {
    cards: Vec<Card>,
    slots: AHashMap<Card, Slot>,
}

impl CardPlacement {
    /// Creates a placement with all cards unassigned.
    pub fn new(cards: &[Card]) -> Self {
        let slots = cards.iter().map(|&c| (c, Slot::Unassigned)).collect();
        Self {
            cards: cards.to_vec(),
            slots,
        }
    }

    /// Creates a placement from an arrangement.
    pub fn from_hands(hands: &PlayerHands) -> Self {
        let low = hands.low.cards().iter().map(|&c| (c, Slot::Low));
        let high = hands.high.cards().iter().map(|&c| (c, Slot::High));
        Self {
            cards: hands.cards().copied().collect(),
            slots: low.chain(high).collect(),
        }
    }

    /// The placement cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the slot of a card, `None` if the card is not in the placement.
    pub fn slot(&self, card: Card) -> Option<Slot> {
        self.slots.get(&card).copied()
    }

    /// Moves a card to a slot.
    pub fn assign(&mut self, card: Card, slot: Slot) -> Result<(), RoundError> {
        let current = self
            .slots
            .get_mut(&card)
            .ok_or_else(|| Self::unknown(card))?;
        *current = slot;
        Ok(())
    }

    /// Swaps the slots of two cards.
    pub fn swap(&mut self, a: Card, b: Card) -> Result<(), RoundError> {
        let (slot_a, slot_b) = match (self.slot(a), self.slot(b)) {
            (Some(sa), Some(sb)) => (sa, sb),
            (None, _) => return Err(Self::unknown(a)),
            (_, None) => return Err(Self::unknown(b)),
        };

        self.assign(a, slot_b)?;
        self.assign(b, slot_a)
    }

    /// Moves all cards back to unassigned.
    pub fn clear(&mut self) {
        self.slots.values_mut().for_each(|s| *s = Slot::Unassigned);
    }

    /// The cards in a slot, in dealing order.
    pub fn cards_in(&self, slot: Slot) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| self.slot(**c) == Some(slot))
            .copied()
            .collect()
    }

    /// The low hand cards.
    pub fn low_cards(&self) -> Vec<Card> {
        self.cards_in(Slot::Low)
    }

    /// The high hand cards.
    pub fn high_cards(&self) -> Vec<Card> {
        self.cards_in(Slot::High)
    }

    /// The number of unassigned cards.
    pub fn unassigned_count(&self) -> usize {
        self.slots.values().filter(|s| **s == Slot::Unassigned).count()
    }

    /// Checks if the placement is settled and legal.
    pub fn is_legal(&self) -> bool {
        is_legal_arrangement(&self.low_cards(), &self.high_cards(), self.unassigned_count())
    }

    /// Resolves a settled placement into the player hands.
    pub fn hands(&self) -> Result<PlayerHands, RoundError> {
        let low = self.low_cards();
        let high = self.high_cards();
        let unassigned = self.unassigned_count();

        if low.len() != Hand::LOW_SIZE || high.len() != Hand::HIGH_SIZE || unassigned > 0 {
            return Err(RoundError::Unsettled {
                low: low.len(),
                high: high.len(),
                unassigned,
            });
        }

        let hands = PlayerHands::new(&low, &high);
        if hands.is_legal() {
            Ok(hands)
        } else {
            Err(RoundError::Foul(Side::Player))
        }
    }

    fn unknown(card: Card) -> RoundError {
        RoundError::UnknownCard {
            side: Side::Player,
            card,
        }
    }
}
