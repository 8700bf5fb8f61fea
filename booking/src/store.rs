use std::collections::HashMap;

use shared_types::{IntervalRecord, PropertyCalendar};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no property with id {0}")]
    UnknownProperty(i64),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Boundary to whatever persists property calendars. The core loads a
/// calendar once per view and treats it as an immutable snapshot; after
/// an editing session the full post-edit interval list is written back.
/// Concurrent editors are not reconciled here; last write wins.
pub trait CalendarStore {
    fn load_calendar(&self, property_id: i64) -> Result<PropertyCalendar, StoreError>;

    fn save_intervals(
        &mut self,
        property_id: i64,
        intervals: Vec<IntervalRecord>,
    ) -> Result<(), StoreError>;
}

/// Map-backed store for tests and hosts without a wired backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    calendars: HashMap<i64, PropertyCalendar>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, calendar: PropertyCalendar) {
        self.calendars.insert(calendar.property_id, calendar);
    }
}

impl CalendarStore for InMemoryStore {
    fn load_calendar(&self, property_id: i64) -> Result<PropertyCalendar, StoreError> {
        let calendar = self
            .calendars
            .get(&property_id)
            .cloned()
            .ok_or(StoreError::UnknownProperty(property_id))?;
        debug!(
            "loaded calendar for property {property_id}: {} intervals",
            calendar.intervals.len()
        );
        Ok(calendar)
    }

    fn save_intervals(
        &mut self,
        property_id: i64,
        intervals: Vec<IntervalRecord>,
    ) -> Result<(), StoreError> {
        let calendar = self
            .calendars
            .get_mut(&property_id)
            .ok_or(StoreError::UnknownProperty(property_id))?;
        debug!(
            "saving calendar for property {property_id}: {} intervals",
            intervals.len()
        );
        calendar.intervals = intervals;
        Ok(())
    }
}
