//! Condition aggregation for a single bridge.
//!
//! All three functions are pure and total: absent ratings yield neutral
//! values and out-of-range inputs fall through the same bands.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ConditionCategory, ConditionRatings};

/// Mean of the set ratings rounded half-up to one decimal place.
///
/// Returns `None` when no rating is set.
pub fn average_rating(ratings: &ConditionRatings) -> Option<Decimal> {
    let (sum, count) = ratings
        .present()
        .fold((0i64, 0i64), |(sum, count), r| (sum + i64::from(r), count + 1));

    if count == 0 {
        return None;
    }

    let mean = Decimal::from(sum) / Decimal::from(count);
    Some(mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

/// Map an average rating onto its condition band.
pub fn condition_category(avg: Option<Decimal>) -> ConditionCategory {
    let Some(avg) = avg else {
        return ConditionCategory::Unknown;
    };

    if avg >= Decimal::new(45, 1) {
        ConditionCategory::Excellent
    } else if avg >= Decimal::new(35, 1) {
        ConditionCategory::VeryGood
    } else if avg >= Decimal::new(25, 1) {
        ConditionCategory::Good
    } else if avg >= Decimal::new(15, 1) {
        ConditionCategory::Fair
    } else {
        ConditionCategory::Poor
    }
}

/// Bridge Condition Index: the average as a truncated percentage of 5.0.
///
/// Results beyond the `i32` range saturate.
pub fn bci_percentage(avg: Option<Decimal>) -> i32 {
    match avg {
        Some(avg) => {
            let saturated = if avg.is_sign_negative() {
                i32::MIN
            } else {
                i32::MAX
            };
            (avg / Decimal::from(5))
                .checked_mul(Decimal::from(100))
                .and_then(|pct| pct.trunc().to_i32())
                .unwrap_or(saturated)
        }
        None => 0,
    }
}
