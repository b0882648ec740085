use std::cmp::Ordering;
use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::entities::grid::{HeatValue, HEAT_MIDPOINT};
use crate::domain::services::export::project_pivot;
use crate::domain::services::heat::heat_value;
use crate::domain::services::metrics::derive_metrics;
use crate::domain::services::normalize::normalize_group;
use crate::domain::services::ordering::{compare_groups, sort_groups, CANONICAL_GROUPS};
use crate::domain::services::pivot_builder::build_pivot;
use crate::domain::services::statistics::compute_statistics;
use crate::infra::export::csv::{read_grid_csv, write_grid_csv, EXPORT_DELIMITER};
use crate::{MetricParams, SalaryCell, TariffError};

/// Known codes, decorated known codes, numbered unknowns and plain words.
fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(CANONICAL_GROUPS).prop_map(str::to_string),
        prop::sample::select(CANONICAL_GROUPS).prop_map(|g| format!(" {g}\u{a0}")),
        (prop::sample::select(vec!["P", "S", "KR", "Ü"]), 0u32..200, "[a-c]?")
            .prop_map(|(prefix, n, suffix)| format!("{prefix} {n}{suffix}")),
        "[A-Za-z]{1,6}",
    ]
}

fn arb_cells() -> impl Strategy<Value = Vec<SalaryCell>> {
    prop::collection::vec(
        (
            prop::sample::select(CANONICAL_GROUPS),
            prop::bool::ANY,
            1i64..8,
            0u32..1_000_000,
        ),
        0..60,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(group, padded, step, cents)| {
                let label = if padded {
                    group.replace(' ', "\u{a0}")
                } else {
                    group.to_string()
                };
                SalaryCell::new("TV-L", &label, step, f64::from(cents) / 100.0)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_ordering_is_antisymmetric(a in arb_label(), b in arb_label()) {
        prop_assert_eq!(compare_groups(&a, &b), compare_groups(&b, &a).reverse());
        prop_assert_eq!(compare_groups(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn prop_ordering_is_transitive(a in arb_label(), b in arb_label(), c in arb_label()) {
        if compare_groups(&a, &b) != Ordering::Greater
            && compare_groups(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(compare_groups(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn prop_sort_is_independent_of_input_order(
        labels in prop::collection::vec(arb_label(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut sorted = labels.clone();
        sort_groups(&mut sorted);

        let mut shuffled = labels;
        let len = shuffled.len();
        if len > 1 {
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                shuffled.swap(i, (state >> 33) as usize % (i + 1));
            }
        }
        sort_groups(&mut shuffled);

        prop_assert_eq!(&sorted, &shuffled);
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_groups(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn prop_pivot_keeps_last_seen_amount(cells in arb_cells()) {
        let pivot = build_pivot("TV-L", &cells);

        let mut expected: HashMap<(String, i64), f64> = HashMap::new();
        for cell in &cells {
            expected.insert((normalize_group(&cell.group), cell.step), cell.amount);
        }

        prop_assert_eq!(pivot.len(), expected.len());
        prop_assert_eq!(pivot.duplicates(), cells.len() - expected.len());
        for ((group, step), amount) in &expected {
            prop_assert_eq!(pivot.amount(group, *step), Some(*amount));
        }
    }

    #[test]
    fn prop_pivot_bounds_cover_every_amount(cells in arb_cells()) {
        let pivot = build_pivot("TV-L", &cells);

        match (pivot.min_amount(), pivot.max_amount()) {
            (Some(min), Some(max)) => {
                for cell in &cells {
                    prop_assert!(min <= cell.amount && cell.amount <= max);
                }
                let stats = compute_statistics(&cells);
                prop_assert_eq!(stats.min, min);
                prop_assert_eq!(stats.max, max);
                prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
            }
            (None, None) => prop_assert!(cells.is_empty()),
            other => prop_assert!(false, "inconsistent bounds: {:?}", other),
        }
    }

    #[test]
    fn prop_export_round_trips_through_csv(cells in arb_cells()) {
        let pivot = build_pivot("TV-L", &cells);
        let grid = project_pivot(&pivot);

        let mut out = Vec::new();
        write_grid_csv(&grid, &mut out, EXPORT_DELIMITER).expect("export should write");
        let parsed = read_grid_csv(out.as_slice(), EXPORT_DELIMITER).expect("export should parse");

        prop_assert_eq!(&parsed, &grid);
        for group in pivot.groups() {
            for step in pivot.steps() {
                prop_assert_eq!(parsed.amount(&group, step), pivot.amount(&group, step));
            }
        }
    }

    #[test]
    fn prop_heat_stays_in_unit_range(
        amount in 0.0f64..1e6,
        min in 0.0f64..1e6,
        span in 0.0f64..1e6,
    ) {
        let max = min + span;
        match heat_value(Some(amount), Some(min), Some(max)) {
            HeatValue::Scaled(t) => {
                prop_assert!((0.0..=1.0).contains(&t));
                if max == min {
                    prop_assert_eq!(t, HEAT_MIDPOINT);
                }
            }
            HeatValue::NoScale => prop_assert!(false, "bounds were present"),
        }
        if max > min {
            prop_assert_eq!(heat_value(Some(min), Some(min), Some(max)), HeatValue::Scaled(0.0));
            prop_assert_eq!(heat_value(Some(max), Some(min), Some(max)), HeatValue::Scaled(1.0));
        }
    }

    #[test]
    fn prop_full_time_metrics_without_bonus(cents in 0u32..2_000_000) {
        let base = f64::from(cents) / 100.0;
        let metrics = derive_metrics(base, &MetricParams::default()).expect("metrics should derive");

        prop_assert_eq!(metrics.monthly, base);
        prop_assert_eq!(metrics.yearly, metrics.monthly * 12.0);
        // x * 12 / 12 may differ from x in the last bit
        prop_assert!((metrics.effective_monthly - metrics.monthly).abs() <= 1e-9 * base.max(1.0));
    }

    #[test]
    fn prop_non_positive_hours_are_rejected(base in 0.0f64..20_000.0, hours in -60.0f64..=0.0) {
        let params = MetricParams { weekly_hours: hours, ..MetricParams::default() };

        let rejected = matches!(
            derive_metrics(base, &params),
            Err(TariffError::InvalidParameter { name: "weekly_hours", .. })
        );
        prop_assert!(rejected);
    }
}
