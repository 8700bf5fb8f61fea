use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityIndex;
use crate::clock::Clock;

/// The transient start/end pair a guest is constructing. Owned by the UI
/// session, never persisted. When both ends are set, `start <= end`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Explicit state of the two-click range selection. The UI holds one of
/// these and feeds every calendar click through [`date_clicked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    OneEnd {
        start: NaiveDate,
    },
    Complete {
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl SelectionState {
    pub fn selection(&self) -> Selection {
        match *self {
            SelectionState::Empty => Selection::default(),
            SelectionState::OneEnd { start } => Selection {
                start: Some(start),
                end: None,
            },
            SelectionState::Complete { start, end } => Selection {
                start: Some(start),
                end: Some(end),
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionState::Complete { .. })
    }
}

/// Transition for one calendar click against the loaded availability.
///
/// Clicks on unselectable days are silently ignored; the calendar stays
/// frictionless and callers never see an error. A second click completes
/// the range only when every day between the two clicks is selectable;
/// otherwise it starts a fresh selection at the clicked day.
pub fn date_clicked<C: Clock>(
    state: SelectionState,
    day: NaiveDate,
    index: &AvailabilityIndex<C>,
) -> SelectionState {
    if !index.is_selectable(day) {
        return state;
    }
    match state {
        SelectionState::Empty | SelectionState::Complete { .. } => {
            SelectionState::OneEnd { start: day }
        }
        SelectionState::OneEnd { start } => {
            // Clicking the armed start again just re-arms it.
            if day == start {
                return SelectionState::OneEnd { start: day };
            }
            let (lo, hi) = if start <= day { (start, day) } else { (day, start) };
            if index.is_range_selectable(lo, hi) {
                SelectionState::Complete { start: lo, end: hi }
            } else {
                SelectionState::OneEnd { start: day }
            }
        }
    }
}
