use chrono::NaiveDate;
use shared_types::IntervalRecord;

/// True when `day` falls inside the interval, both ends inclusive.
pub fn contains(interval: &IntervalRecord, day: NaiveDate) -> bool {
    interval.start <= day && day <= interval.end
}

/// True when the interval shares at least one day with the closed span
/// `[start, end]`.
pub fn overlaps_span(interval: &IntervalRecord, start: NaiveDate, end: NaiveDate) -> bool {
    interval.start <= end && start <= interval.end
}

/// True when the two closed intervals share at least one day.
pub fn overlaps(a: &IntervalRecord, b: &IntervalRecord) -> bool {
    overlaps_span(a, b.start, b.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;
    use shared_types::IntervalStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn interval(start: NaiveDate, end: NaiveDate) -> IntervalRecord {
        IntervalRecord {
            id: 1,
            start,
            end,
            status: IntervalStatus::Booked,
            payment_deadline: None,
            color: None,
        }
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let i = interval(date(2026, 3, 15), date(2026, 3, 22));

        assert!(contains(&i, date(2026, 3, 15)));
        assert!(contains(&i, date(2026, 3, 18)));
        assert!(contains(&i, date(2026, 3, 22)));

        assert!(!contains(&i, date(2026, 3, 14)));
        assert!(!contains(&i, date(2026, 3, 23)));
    }

    #[test]
    fn single_day_interval_contains_only_that_day() {
        let i = interval(date(2026, 4, 1), date(2026, 4, 1));
        assert!(contains(&i, date(2026, 4, 1)));
        assert!(!contains(&i, date(2026, 4, 2)));
    }

    #[test]
    fn overlap_requires_a_shared_day() {
        let a = interval(date(2026, 3, 1), date(2026, 3, 10));

        // Disjoint on either side.
        assert!(!overlaps(&a, &interval(date(2026, 2, 1), date(2026, 2, 28))));
        assert!(!overlaps(&a, &interval(date(2026, 3, 11), date(2026, 3, 20))));

        // Touching at a single shared endpoint counts.
        assert!(overlaps(&a, &interval(date(2026, 3, 10), date(2026, 3, 20))));
        assert!(overlaps(&a, &interval(date(2026, 2, 20), date(2026, 3, 1))));

        // Fully nested.
        assert!(overlaps(&a, &interval(date(2026, 3, 4), date(2026, 3, 6))));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a_off in 0i64..365, a_len in 0i64..30, b_off in 0i64..365, b_len in 0i64..30) {
            let base = date(2026, 1, 1);
            let a = interval(base + Duration::days(a_off), base + Duration::days(a_off + a_len));
            let b = interval(base + Duration::days(b_off), base + Duration::days(b_off + b_len));
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn overlap_agrees_with_day_membership(a_off in 0i64..90, a_len in 0i64..15, b_off in 0i64..90, b_len in 0i64..15) {
            let base = date(2026, 1, 1);
            let a = interval(base + Duration::days(a_off), base + Duration::days(a_off + a_len));
            let b = interval(base + Duration::days(b_off), base + Duration::days(b_off + b_len));
            let shared_day = a
                .start
                .iter_days()
                .take_while(|d| *d <= a.end)
                .any(|d| contains(&b, d));
            prop_assert_eq!(overlaps(&a, &b), shared_day);
        }
    }
}
