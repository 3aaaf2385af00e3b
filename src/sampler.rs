use std::{collections::HashSet, hash::Hash};

use rand::Rng;

use crate::clients::errors::{Error, Result};

/// Draw `count` distinct elements from `candidates` uniformly at random,
/// without replacement. The order of the result is random too.
///
/// `kind` only labels the error returned when `count` exceeds the number of
/// candidates; fewer elements than requested are never returned.
pub fn sample<T, R>(
    rng: &mut R,
    candidates: &[T],
    count: usize,
    kind: &'static str,
) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng,
{
    if count > candidates.len() {
        return Err(Error::InsufficientCandidates {
            kind,
            requested: count,
            available: candidates.len(),
        });
    }

    let mut remaining = candidates.to_vec();
    let mut selected = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.random_range(0..remaining.len());
        selected.push(remaining.swap_remove(idx));
    }
    Ok(selected)
}

/// Drop repeated ids, keeping the first occurrence.
pub fn unique<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
