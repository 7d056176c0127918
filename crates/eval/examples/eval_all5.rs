// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the categories frequencies of all the 5 cards hands in a 53 cards
// deck, and how many hands of each category hold the joker:
//
// ```bash
// $ cargo r --release --example eval_all5
// Category         Hands     Freq  Joker
// ...
// Five Aces            1   0.0000%     1
// Total          2869685
// ```

use std::time::Instant;

use paigow_eval::{Deck, Hand, HandCategory};

#[derive(Default, Clone, Copy)]
struct Count {
    hands: usize,
    with_joker: usize,
}

fn main() {
    let now = Instant::now();
    let mut counts = [Count::default(); HandCategory::COUNT];

    Deck::default().for_each(Hand::HIGH_SIZE, |cards| {
        let hand = Hand::eval(cards);
        let count = &mut counts[hand.category() as usize];
        count.hands += 1;
        if hand.has_joker() {
            count.with_joker += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().map(|c| c.hands).sum::<usize>();

    println!("{:<15}{:>7}{:>10}{:>7}", "Category", "Hands", "Freq", "Joker");
    for category in HandCategory::categories() {
        let count = counts[category as usize];
        let freq = 100.0 * count.hands as f64 / total as f64;
        println!(
            "{:<15}{:>7}{:>9.4}%{:>7}",
            category.to_string(),
            count.hands,
            freq,
            count.with_joker
        );
    }

    println!("{:<15}{:>7}", "Total", total);
    println!("{:.0} hands/sec", total as f64 / elapsed);
}
