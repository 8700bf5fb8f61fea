use chrono::{Local, NaiveDate};

/// Source of "today" for past-date checks. The index and editor take a
/// clock at construction and read it on every query, so tests can pin a
/// date while the application uses the host's local calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Host-local current date, truncated to the calendar day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
