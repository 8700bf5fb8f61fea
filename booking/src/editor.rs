use chrono::NaiveDate;
use shared_types::{IntervalRecord, IntervalStatus};
use thiserror::Error;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::selection::{Selection, SelectionState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("both ends of the date range must be selected before committing")]
    InvalidRange,
    #[error("no interval with id {0}")]
    NotFound(i64),
}

/// Operator-side calendar editing for one property. Works on an
/// in-memory copy of the interval list; the caller persists the final
/// list through the storage layer.
///
/// Unlike the guest-facing selection, the editor lets the operator grab
/// any future day regardless of existing interval status, since editing
/// the calendar is how conflicts get resolved. Only past days are refused.
#[derive(Debug, Clone)]
pub struct RangeEditor<C = SystemClock> {
    intervals: Vec<IntervalRecord>,
    draft: SelectionState,
    clock: C,
    next_id: i64,
}

impl RangeEditor<SystemClock> {
    pub fn new(intervals: Vec<IntervalRecord>) -> Self {
        Self::with_clock(intervals, SystemClock)
    }
}

impl<C: Clock> RangeEditor<C> {
    pub fn with_clock(intervals: Vec<IntervalRecord>, clock: C) -> Self {
        let next_id = intervals.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            intervals,
            draft: SelectionState::Empty,
            clock,
            next_id,
        }
    }

    pub fn intervals(&self) -> &[IntervalRecord] {
        &self.intervals
    }

    /// The post-edit list, handed to the storage layer for saving.
    pub fn into_intervals(self) -> Vec<IntervalRecord> {
        self.intervals
    }

    pub fn selection(&self) -> Selection {
        self.draft.selection()
    }

    /// Arms a new range at `day`. Past days are silently refused, same
    /// as the guest calendar.
    pub fn begin_selection(&mut self, day: NaiveDate) {
        if day < self.clock.today() {
            return;
        }
        self.draft = SelectionState::OneEnd { start: day };
    }

    /// Second click of the two-click selection. With nothing armed it
    /// behaves like [`begin_selection`]; after a completed range it
    /// starts over at `day`.
    ///
    /// [`begin_selection`]: RangeEditor::begin_selection
    pub fn extend_selection(&mut self, day: NaiveDate) {
        if day < self.clock.today() {
            return;
        }
        self.draft = match self.draft {
            SelectionState::Empty => SelectionState::OneEnd { start: day },
            SelectionState::OneEnd { start } => {
                let (lo, hi) = if start <= day { (start, day) } else { (day, start) };
                SelectionState::Complete { start: lo, end: hi }
            }
            SelectionState::Complete { .. } => SelectionState::OneEnd { start: day },
        };
    }

    /// Turns the drafted range into a new interval and appends it to the
    /// working list. Overlap with existing intervals is NOT checked;
    /// reconciling conflicts is the operator's call, not this layer's.
    pub fn commit(
        &mut self,
        status: IntervalStatus,
        color: Option<String>,
        payment_deadline: Option<NaiveDate>,
    ) -> Result<IntervalRecord, EditorError> {
        let (start, end) = match self.draft {
            SelectionState::Complete { start, end } => (start, end),
            _ => return Err(EditorError::InvalidRange),
        };

        let record = IntervalRecord {
            id: self.next_id,
            start,
            end,
            status,
            payment_deadline,
            color,
        };
        self.next_id += 1;
        self.intervals.push(record.clone());
        self.draft = SelectionState::Empty;
        debug!(
            "appended {:?} interval {} covering {start}..{end}",
            status, record.id
        );
        Ok(record)
    }

    /// Deletes an interval by identity. Status changes are modeled as
    /// remove + commit, never in-place mutation.
    pub fn remove(&mut self, interval_id: i64) -> Result<IntervalRecord, EditorError> {
        match self.intervals.iter().position(|i| i.id == interval_id) {
            Some(pos) => {
                let record = self.intervals.remove(pos);
                debug!("removed interval {interval_id}");
                Ok(record)
            }
            None => Err(EditorError::NotFound(interval_id)),
        }
    }
}
