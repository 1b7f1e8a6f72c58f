//! Property checks for the resolver and province aggregation.

use fichat_core::prelude::*;
use fichat_core::resolve::resolve;
use fichat_core::similarity::MAX_SCORE;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8})?"
}

fn scorer() -> impl Strategy<Value = Scorer> {
    prop_oneof![Just(Scorer::Ratio), Just(Scorer::PartialRatio)]
}

proptest! {
    #[test]
    fn resolve_is_deterministic(
        query in ".{0,16}",
        pool in prop::collection::vec(name(), 0..12),
        threshold in 0u8..=100,
        scorer in scorer(),
    ) {
        let policy = MatchPolicy::new(scorer, threshold);
        prop_assert_eq!(resolve(&query, &pool, policy), resolve(&query, &pool, policy));
    }

    #[test]
    fn exact_candidate_scores_max(
        pool in prop::collection::vec(name(), 1..12),
        pick in any::<prop::sample::Index>(),
        scorer in scorer(),
    ) {
        let target = pool[pick.index(pool.len())].clone();
        let hit = resolve(&target.to_uppercase(), &pool, MatchPolicy::new(scorer, 100));
        let hit = hit.expect("exact candidate must match");
        prop_assert_eq!(hit.score, MAX_SCORE);
    }

    #[test]
    fn empty_pool_is_always_none(query in ".{0,16}", threshold in 0u8..=100, scorer in scorer()) {
        let pool: Vec<String> = Vec::new();
        prop_assert!(resolve(&query, &pool, MatchPolicy::new(scorer, threshold)).is_none());
    }

    #[test]
    fn province_summary_matches_filtered_rows(
        rows in prop::collection::vec((0usize..6, 0usize..3, 0u32..10_000), 1..40),
    ) {
        let raw: Vec<FiRecordRaw> = rows
            .iter()
            .map(|(c, p, n)| FiRecordRaw::new(&format!("city {p}{c}"), &format!("prov {p}"), *n))
            .collect();
        let table = FiTable::from_records(raw).unwrap();

        for province in table.province_names() {
            let counts: Vec<u32> = table
                .records()
                .iter()
                .filter(|r| &r.province == province)
                .map(|r| r.fi_count)
                .collect();
            let s = table.province_summary(province).unwrap();
            prop_assert_eq!(s.total_fis, counts.iter().map(|&n| u64::from(n)).sum::<u64>());
            prop_assert_eq!(s.cities.len(), counts.len());
            prop_assert_eq!(s.highest.fi_count, *counts.iter().max().unwrap());
            prop_assert_eq!(s.lowest.fi_count, *counts.iter().min().unwrap());
        }
    }
}
