use serde::{Deserialize, Serialize};
use shared_types::PropertyRates;

use crate::selection::Selection;

/// Read-only price summary shown next to a finalized selection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PricingBreakdown {
    pub nights: i64,
    pub accommodation_total: f64,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    pub total: f64,
}

/// Projects a selection onto the property's rates. An incomplete or
/// zero-night selection prices to an all-zero breakdown, fees included.
pub fn price(rates: &PropertyRates, selection: &Selection) -> PricingBreakdown {
    let (start, end) = match (selection.start, selection.end) {
        (Some(start), Some(end)) => (start, end),
        _ => return PricingBreakdown::default(),
    };

    // Selection is normalized upstream; abs() shrugs off a reversed pair.
    let nights = (end - start).num_days().abs();
    if nights == 0 {
        return PricingBreakdown::default();
    }

    let accommodation_total = nights as f64 * rates.price_per_night;
    let cleaning_fee = rates.cleaning_fee.unwrap_or(0.0);
    let service_fee = rates.service_fee.unwrap_or(0.0);

    PricingBreakdown {
        nights,
        accommodation_total,
        cleaning_fee,
        service_fee,
        total: accommodation_total + cleaning_fee + service_fee,
    }
}
