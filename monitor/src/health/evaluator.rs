//! Pure health verdict computation

use super::types::{ChainSnapshot, HealthVerdict};

/// Compare the latest and finalized heights against the allowed gap.
///
/// The gap is not clamped: a finalized head ahead of the latest head
/// (possible between two non-atomic reads) yields a negative gap, which is
/// never healthy.
pub fn evaluate(snapshot: &ChainSnapshot, max_gap: u64) -> HealthVerdict {
    let gap = snapshot.latest as i64 - snapshot.finalized as i64;

    let sync_percentage = if snapshot.latest == 0 {
        0.0
    } else {
        let percentage = (snapshot.finalized as f64 / snapshot.latest as f64) * 100.0;
        (percentage * 100.0).round() / 100.0
    };

    let is_healthy = gap >= 0 && gap as u64 <= max_gap;

    HealthVerdict {
        gap,
        sync_percentage,
        is_healthy,
    }
}
