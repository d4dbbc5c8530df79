//! Property tests for truncation invariants.

use chrono::{Datelike, Timelike};
use proptest::prelude::*;
use truncate_date::{truncate, truncate_date, Instant, TimeUnit, TimeValue};

/// Comfortably inside the range chrono can represent.
const RANGE: std::ops::Range<i64> = -8_000_000_000_000_000..8_000_000_000_000_000;

fn unit() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(TimeUnit::ALL.to_vec())
}

fn fixed_unit() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(vec![
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
    ])
}

proptest! {
    #[test]
    fn fixed_units_land_on_a_boundary_within_one_width(m in RANGE, unit in fixed_unit()) {
        let width = unit.fixed_width_millis().unwrap();
        let result = truncate(unit, m as f64).timestamp_millis().unwrap();
        prop_assert_eq!(result.rem_euclid(width), 0);
        prop_assert!(result <= m);
        prop_assert!(m - result < width);
    }

    #[test]
    fn truncation_is_idempotent(m in RANGE, unit in unit()) {
        let once = truncate(unit, m as f64);
        let twice = truncate(unit, once.get_time());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn coarser_units_never_exceed_finer_units(m in RANGE) {
        let results: Vec<f64> = TimeUnit::ALL
            .iter()
            .map(|&unit| truncate(unit, m as f64).get_time())
            .collect();
        for pair in results.windows(2) {
            prop_assert!(pair[1] <= pair[0], "results: {:?}", results);
        }
        prop_assert_eq!(results[0], m as f64);
    }

    #[test]
    fn month_and_year_start_at_midnight_on_the_first(m in RANGE) {
        let original = Instant::from_millis(m as f64).to_datetime().unwrap();
        let month = truncate(TimeUnit::Month, m as f64).to_datetime().unwrap();
        let year = truncate(TimeUnit::Year, m as f64).to_datetime().unwrap();

        prop_assert_eq!((month.year(), month.month(), month.day()), (original.year(), original.month(), 1));
        prop_assert_eq!((year.year(), year.month(), year.day()), (original.year(), 1, 1));
        for dt in [month, year] {
            prop_assert_eq!((dt.hour(), dt.minute(), dt.second(), dt.timestamp_subsec_millis()), (0, 0, 0, 0));
        }
    }

    #[test]
    fn non_finite_values_stay_non_finite_for_any_unit_tag(
        millis in prop::sample::select(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
        tag in "\\PC*",
    ) {
        let result = truncate_date(&tag, millis).unwrap();
        prop_assert!(!result.get_time().is_finite());
    }

    #[test]
    fn every_input_shape_truncates_identically(m in RANGE, unit in unit()) {
        let instant = Instant::from_millis(m as f64);
        let text = instant.to_string();
        let tag = unit.as_str();

        let from_millis = truncate_date(tag, m as f64).unwrap();
        let from_text = truncate_date(tag, TimeValue::Text(&text)).unwrap();
        let from_instant = truncate_date(tag, instant).unwrap();

        prop_assert_eq!(from_millis, truncate(unit, m as f64));
        prop_assert_eq!(from_text, from_millis);
        prop_assert_eq!(from_instant, from_millis);
    }
}
