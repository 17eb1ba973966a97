use crate::storage::core::Offer;
use num_integer::div_floor;

pub const BASIS_POINTS: u128 = 10000;
pub const SECONDS_PER_DAY: u64 = 3600 * 24;

/// The caller's terms are a floor: the published rate must be at least as high
/// and the lock at most as long as what the caller agreed to.
pub fn accepts_offer(offer: &Offer, rate: &u32, duration: &u32) -> bool {
    offer.rate >= *rate && offer.duration <= *duration
}

/// Truncating `amount * rate / 10000`, `None` if the product overflows.
pub fn calculate_interest(amount: &u128, rate: &u32) -> Option<u128> {
    amount
        .checked_mul(*rate as u128)
        .map(|value| div_floor(value, BASIS_POINTS))
}

pub fn calculate_due(now: u64, duration: &u32) -> u64 {
    now.saturating_add((*duration as u64) * SECONDS_PER_DAY)
}
