//! Pointer velocity estimation from recent move samples
//!
//! Release resolution needs the fling velocity at the moment the pointer
//! lifts. The tracker keeps a short window of timestamped samples and
//! estimates velocity as the displacement across that window.

use std::collections::VecDeque;
use std::time::Duration;

use crate::geometry::Point;

/// How far back samples still count toward the velocity estimate
const SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Sliding-window velocity estimator for one pointer
#[derive(Debug, Default)]
pub(crate) struct VelocityTracker {
    samples: VecDeque<(Duration, Point)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all samples (call on pointer down)
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Record a pointer position at a monotonic timestamp
    ///
    /// Samples older than the window relative to `time` are dropped.
    pub fn add_sample(&mut self, time: Duration, pos: Point) {
        while let Some(&(oldest, _)) = self.samples.front() {
            if oldest + SAMPLE_WINDOW < time {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        self.samples.push_back((time, pos));
    }

    /// Estimated (x, y) velocity in px/s over the current window
    ///
    /// Returns zero until two samples with distinct timestamps exist.
    pub fn velocity(&self) -> (f32, f32) {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return (0.0, 0.0);
        };

        let dt = t1.saturating_sub(t0).as_secs_f32();
        if dt <= f32::EPSILON {
            return (0.0, 0.0);
        }

        ((p1.x - p0.x) / dt, (p1.y - p0.y) / dt)
    }
}
