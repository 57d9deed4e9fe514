//! Property-Based Tests for Pairs Module
//!
//! Uses proptest to check pair counts and sums over arbitrary id sets.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

use crate::models::NumberRecord;
use crate::pairs::adjacent_pairs;

// == Strategies ==
/// Generates records with unique ascending ids drawn from a small range so
/// gaps and runs both show up, as the store would return them.
fn records_strategy() -> impl Strategy<Value = Vec<NumberRecord>> {
    prop::collection::btree_map(1i64..60, any::<i32>(), 0..40).prop_map(
        |rows: BTreeMap<i64, i32>| {
            rows.into_iter()
                .map(|(id, value)| NumberRecord { id, value })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The pair count equals the number of ids i with i + 1 also present.
    #[test]
    fn prop_pair_count_matches_adjacent_ids(records in records_strategy()) {
        let ids: HashSet<i64> = records.iter().map(|r| r.id).collect();
        let expected = ids.iter().filter(|id| ids.contains(&(**id + 1))).count();

        prop_assert_eq!(adjacent_pairs(&records).count(), expected);
    }

    // Every pair joins ids n and n + 1 and carries the exact integer sum.
    #[test]
    fn prop_pairs_are_adjacent_with_exact_sum(records in records_strategy()) {
        let values: BTreeMap<i64, i32> = records.iter().map(|r| (r.id, r.value)).collect();

        for pair in adjacent_pairs(&records) {
            prop_assert_eq!(pair.id_2, pair.id_1 + 1);
            prop_assert_eq!(values.get(&pair.id_1), Some(&pair.number_1));
            prop_assert_eq!(values.get(&pair.id_2), Some(&pair.number_2));
            prop_assert_eq!(pair.sum, i64::from(pair.number_1) + i64::from(pair.number_2));
        }
    }

    // Ascending input yields pairs strictly ascending by first id.
    #[test]
    fn prop_pairs_ascending(records in records_strategy()) {
        let firsts: Vec<i64> = adjacent_pairs(&records).map(|p| p.id_1).collect();
        prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }
}
