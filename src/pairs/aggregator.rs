//! Pair Aggregator Module
//!
//! Pairs number records whose ids are consecutive integers.

use std::collections::HashMap;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::models::NumberRecord;

// == Adjacent Pair ==
/// Two records whose ids differ by exactly one, with the sum of their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentPair {
    pub id_1: i64,
    pub number_1: i32,
    pub id_2: i64,
    pub number_2: i32,
    pub sum: i64,
}

impl AdjacentPair {
    /// Builds the pair for two records; `second` must have id `first.id + 1`.
    pub fn new(first: &NumberRecord, second: &NumberRecord) -> Self {
        Self {
            id_1: first.id,
            number_1: first.value,
            id_2: second.id,
            number_2: second.value,
            sum: i64::from(first.value) + i64::from(second.value),
        }
    }
}

// == Adjacent Pairs Iterator ==
/// Lazy iterator over the adjacent pairs of a record slice.
///
/// Pairs are yielded in the order of their first record in the input, so
/// ascending input produces pairs ascending by `id_1`.
#[derive(Debug, Clone)]
pub struct AdjacentPairs<'a> {
    records: slice::Iter<'a, NumberRecord>,
    by_id: HashMap<i64, &'a NumberRecord>,
}

impl<'a> Iterator for AdjacentPairs<'a> {
    type Item = AdjacentPair;

    fn next(&mut self) -> Option<Self::Item> {
        for first in self.records.by_ref() {
            let next_id = match first.id.checked_add(1) {
                Some(id) => id,
                None => continue,
            };
            if let Some(second) = self.by_id.get(&next_id) {
                return Some(AdjacentPair::new(first, second));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len()))
    }
}

// == Adjacent Pairs ==
/// Returns every pair of records whose ids are `i` and `i + 1`.
///
/// Adjacency is by id, not by position: ids 1, 2, 4, 5 pair (1, 2) and (4, 5)
/// but never (2, 4).
pub fn adjacent_pairs(records: &[NumberRecord]) -> AdjacentPairs<'_> {
    let by_id = records.iter().map(|r| (r.id, r)).collect();
    AdjacentPairs {
        records: records.iter(),
        by_id,
    }
}
