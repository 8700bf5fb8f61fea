use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation status carried by a calendar interval.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntervalStatus {
    Blocked,
    Pending,
    Booked,
}

/// One closed date range on a property's calendar, as stored.
/// `start` and `end` are both inclusive and `start <= end`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IntervalRecord {
    pub id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: IntervalStatus,
    /// Only meaningful for `pending` intervals: the date by which the
    /// competing request must be confirmed before the range is released.
    pub payment_deadline: Option<NaiveDate>,
    /// Optional display tag chosen by the operator.
    pub color: Option<String>,
}

/// Per-property pricing configuration. A `None` fee means the fee is
/// switched off for this property.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertyRates {
    pub price_per_night: f64,
    pub cleaning_fee: Option<f64>,
    pub service_fee: Option<f64>,
}

/// Everything the storage layer returns for one property's calendar view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertyCalendar {
    pub property_id: i64,
    pub rates: PropertyRates,
    pub intervals: Vec<IntervalRecord>,
}
