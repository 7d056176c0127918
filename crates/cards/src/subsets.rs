// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Choose k of n subsets generation.
use crate::Card;

/// Returns the binomial coefficient for n choose k.
pub const fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k), the running product is always an integer.
    let k = if k > n - k { n - k } else { k };
    let mut res = 1;
    let mut i = 0;
    while i < k {
        res = res * (n - i) / (i + 1);
        i += 1;
    }

    res
}

/// Calls the given closure for each k-subset of `0..n`.
///
/// Subsets are passed as ascending index slices and visited in
/// colexicographic order (Algorithm L from TAOCP 4a). If k > n there are no
/// subsets, and for k == 0 the closure is called once with an empty slice.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    // c[1..=k] is the current subset, c[k + 1] and c[k + 2] are sentinels.
    let mut c = vec![0usize; k + 3];
    for i in 0..k {
        c[i + 1] = i;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Calls the given closure for each partition of `cards` into k chosen cards
/// and the remaining cards.
///
/// The relative order of the cards is preserved in both slices.
pub fn for_each_split<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card], &[Card]),
{
    let n = cards.len();
    let mut chosen = Vec::with_capacity(k);
    let mut rest = Vec::with_capacity(n.saturating_sub(k));

    for_each_ksubset(n, k, |p| {
        chosen.clear();
        rest.clear();

        let mut next = p.iter().peekable();
        for (idx, card) in cards.iter().enumerate() {
            if next.next_if_eq(&&idx).is_some() {
                chosen.push(*card);
            } else {
                rest.push(*card);
            }
        }

        f(&chosen, &rest);
    });
}
