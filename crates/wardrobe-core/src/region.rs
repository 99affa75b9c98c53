//! Partitioning of the step budget across frames (Linear mode only).

use serde::{Deserialize, Serialize};

/// Contiguous inclusive span of the global step budget owned by one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRegion {
    pub start_step: u32,
    pub end_step: u32,
}

impl TimeRegion {
    /// Number of steps covered, inclusive of both ends.
    pub fn step_count(&self) -> u32 {
        self.end_step - self.start_step + 1
    }
}

/// Split `[0, total_steps]` into one region per frame.
///
/// Regions are contiguous and non-overlapping; the last region absorbs the
/// integer-division remainder so coverage is exactly the full budget.
/// With more frames than steps the division saturates and regions become
/// zero-width; their coincident keyframes collapse in the merger.
pub fn plan_regions(frame_count: usize, total_steps: u32) -> Vec<TimeRegion> {
    debug_assert!(frame_count > 0);
    let n = frame_count as u32;
    let steps_per_region = total_steps / n;
    let mut regions = Vec::with_capacity(frame_count);
    for i in 0..n {
        let start_step = i * steps_per_region;
        let end_step = if i + 1 == n {
            total_steps
        } else {
            ((i + 1) * steps_per_region).saturating_sub(1)
        };
        regions.push(TimeRegion {
            start_step,
            end_step,
        });
    }
    regions
}
