// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and hands types used in a Pai Gow game.
pub use paigow_eval::{
    Card, Deck, Hand, HandCategory, PlayerHands, Rank, Suit, best_hand, best_split, evaluate,
    is_legal_arrangement, parse_cards,
};
