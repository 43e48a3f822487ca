use chrono::{DateTime, Utc};
use proptest::prelude::*;
use tempora::{Span, UtcPeriod};

fn instant(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap()
}

/// Arbitrary whole-second periods inside a ~127-year window.
fn period() -> impl Strategy<Value = UtcPeriod> {
    (0i64..4_000_000_000, 0i64..4_000_000_000).prop_map(|(a, b)| {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        UtcPeriod::new(instant(start), instant(end)).unwrap()
    })
}

proptest! {
    #[test]
    fn every_period_satisfies_the_ordering_invariant(p in period()) {
        prop_assert!(p.start() <= p.end());
    }

    #[test]
    fn same_value_is_reflexive_and_symmetric(a in period(), b in period()) {
        prop_assert!(a.same_value_as(&a));
        prop_assert_eq!(a.same_value_as(&b), b.same_value_as(&a));
    }

    #[test]
    fn merge_is_commutative(a in period(), b in period()) {
        prop_assert!(a.merge([b]).same_value_as(&b.merge([a])));
    }

    #[test]
    fn merge_is_associative(a in period(), b in period(), c in period()) {
        let chained = a.merge([b]).merge([c]);
        let batched = a.merge([b, c]);
        prop_assert!(chained.same_value_as(&batched));
    }

    #[test]
    fn merge_result_contains_every_operand(a in period(), b in period()) {
        let merged = a.merge([b]);
        prop_assert!(merged.contains(&a));
        prop_assert!(merged.contains(&b));
    }

    #[test]
    fn split_reconstructs_the_original(
        start in 0i64..1_000_000_000,
        len in 1i64..1_000_000,
        step in 1_000i64..500_000,
    ) {
        let p = UtcPeriod::new(instant(start), instant(start + len)).unwrap();

        let pieces: Vec<_> = p.split(Span::seconds(step as f64)).unwrap().collect();
        prop_assert!(!pieces.is_empty());
        let rebuilt = pieces[0].merge(pieces[1..].iter().copied());
        prop_assert!(rebuilt.same_value_as(&p));

        for pair in pieces.windows(2) {
            prop_assert!(pair[0].abuts(&pair[1]));
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn overlaps_is_commutative(a in period(), b in period()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn gap_is_symmetric_for_disjoint_periods(a in period(), b in period()) {
        prop_assume!(!a.overlaps(&b));

        let ab = a.gap(&b).unwrap();
        let ba = b.gap(&a).unwrap();
        prop_assert!(ab.same_value_as(&ba));
        prop_assert!(a.intersect(&b).is_err());
    }

    #[test]
    fn diff_cardinality_matches_shared_endpoints(a in period(), b in period()) {
        prop_assume!(a.overlaps(&b));

        let shared = (a.start() == b.start()) as usize + (a.end() == b.end()) as usize;
        let parts = a.diff(&b).unwrap();
        prop_assert_eq!(parts.len(), 2 - shared);

        for part in &parts {
            prop_assert!(a.merge([b]).contains(part));
        }
    }

    #[test]
    fn translate_preserves_duration(p in period(), shift in -4_000_000i64..4_000_000) {
        let moved = p.translate(Span::seconds(shift as f64));
        prop_assert!(moved.same_duration_as(&p));
        prop_assert!(moved.translate(Span::seconds(-shift as f64)).same_value_as(&p));
    }

    #[test]
    fn intersection_is_contained_in_both(a in period(), b in period()) {
        prop_assume!(a.overlaps(&b));

        let both = a.intersect(&b).unwrap();
        prop_assert!(a.contains(&both));
        prop_assert!(b.contains(&both));
    }

    #[test]
    fn next_period_abuts_immediately(p in period()) {
        prop_assume!(p.elapsed_seconds().value() > 0.0);

        let next = p.next_period();
        prop_assert!(p.abuts(&next));
        prop_assert_eq!(next.start(), p.end());
        prop_assert!(p.gap(&next).unwrap().elapsed_seconds().value() == 0.0);
    }
}
