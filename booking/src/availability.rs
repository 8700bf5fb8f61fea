use chrono::NaiveDate;
use shared_types::{IntervalRecord, IntervalStatus};

use crate::clock::{Clock, SystemClock};
use crate::interval;

/// What the calendar shows for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Available,
    Blocked,
    Pending,
    Booked,
    Past,
}

/// Read model over one property's loaded interval list. Holds no mutable
/// state; every query rescans the list, which is tens of entries for a
/// single property.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex<C = SystemClock> {
    intervals: Vec<IntervalRecord>,
    clock: C,
}

impl AvailabilityIndex<SystemClock> {
    pub fn new(intervals: Vec<IntervalRecord>) -> Self {
        Self::with_clock(intervals, SystemClock)
    }
}

impl<C: Clock> AvailabilityIndex<C> {
    pub fn with_clock(intervals: Vec<IntervalRecord>, clock: C) -> Self {
        Self { intervals, clock }
    }

    pub fn intervals(&self) -> &[IntervalRecord] {
        &self.intervals
    }

    /// Status of a single day. Days strictly before today are `Past` no
    /// matter what intervals cover them; otherwise the first interval in
    /// load order containing the day decides, and a day no interval
    /// covers is `Available`.
    pub fn status_of(&self, day: NaiveDate) -> DayStatus {
        if day < self.clock.today() {
            return DayStatus::Past;
        }
        match self.intervals.iter().find(|i| interval::contains(i, day)) {
            Some(i) => match i.status {
                IntervalStatus::Blocked => DayStatus::Blocked,
                IntervalStatus::Pending => DayStatus::Pending,
                IntervalStatus::Booked => DayStatus::Booked,
            },
            None => DayStatus::Available,
        }
    }

    /// Pending days stay selectable so a guest can join the waiting list
    /// behind an unconfirmed request.
    pub fn is_selectable(&self, day: NaiveDate) -> bool {
        !matches!(
            self.status_of(day),
            DayStatus::Past | DayStatus::Blocked | DayStatus::Booked
        )
    }

    /// True when every day of the inclusive range is selectable. The two
    /// bounds may arrive in either order.
    pub fn is_range_selectable(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        lo.iter_days()
            .take_while(|d| *d <= hi)
            .all(|d| self.is_selectable(d))
    }
}
