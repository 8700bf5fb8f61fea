use shared_types::{IntervalRecord, IntervalStatus};

use crate::interval;
use crate::selection::Selection;

/// Finds the pending interval whose span overlaps the finalized
/// selection, so the UI can surface its payment deadline as a
/// waiting-list notice.
///
/// Returns `None` for an incomplete selection. When several pending
/// intervals overlap, the first one in list order wins; the list order
/// is whatever the store returned. A returned interval may still carry
/// no deadline, in which case the caller shows nothing.
pub fn find_pending_overlap<'a>(
    intervals: &'a [IntervalRecord],
    selection: &Selection,
) -> Option<&'a IntervalRecord> {
    let (start, end) = match (selection.start, selection.end) {
        (Some(start), Some(end)) => (start.min(end), start.max(end)),
        _ => return None,
    };
    intervals
        .iter()
        .find(|i| i.status == IntervalStatus::Pending && interval::overlaps_span(i, start, end))
}
