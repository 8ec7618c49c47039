use chrono::NaiveDateTime;

use crate::types::TargetFault;

/// Whole days between two timestamps, independent of their order.
pub fn days_between(first: NaiveDateTime, second: NaiveDateTime) -> Result<i64, TargetFault> {
    Ok((second - first).num_days().abs())
}
