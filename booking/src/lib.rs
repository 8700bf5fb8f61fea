pub mod availability;
pub mod clock;
pub mod editor;
pub mod interval;
pub mod pricing;
pub mod selection;
pub mod store;
pub mod waitlist;

pub use availability::{AvailabilityIndex, DayStatus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use editor::{EditorError, RangeEditor};
pub use pricing::{price, PricingBreakdown};
pub use selection::{date_clicked, Selection, SelectionState};
pub use store::{CalendarStore, InMemoryStore, StoreError};
pub use waitlist::find_pending_overlap;
