//! Drag physics: pointer capture, position clamping, and settle animation
//!
//! The engine owns the mechanical half of a swipe: which pointer currently
//! drags the content surface, where the content is allowed to go, and the
//! simulated slide that finishes a gesture after release. Gesture
//! *recognition* (slop, claim angle) lives in the panel; the engine only
//! answers "where is the content now".

use std::time::Duration;

use thiserror::Error;

use crate::config::SwipeConfig;
use crate::events::PointerId;
use crate::geometry::clamp_horizontal;

/// Transient faults while forwarding pointer input into the engine
///
/// These are the swallow-and-log class: a panel logs them and keeps
/// tracking, it never propagates them out of the event path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DragError {
    /// A move/release arrived for a pointer the engine never captured
    #[error("pointer {0:?} is not the captured pointer")]
    PointerNotCaptured(PointerId),

    /// A release arrived with no capture in progress
    #[error("no pointer is captured")]
    NothingCaptured,
}

// ============================================================================
// Settle scroller
// ============================================================================

/// Quintic ease-out: fast start, long deceleration tail
fn ease_out(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u * u * u + 1.0
}

/// One settle animation from a start position to a target position
#[derive(Debug, Clone)]
struct Scroller {
    start: i32,
    end: i32,
    duration: Duration,
    elapsed: Duration,
}

impl Scroller {
    fn new(start: i32, end: i32, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `dt` and return the interpolated position
    fn tick(&mut self, dt: Duration) -> i32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.finished() {
            return self.end;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let swept = (self.end - self.start) as f32 * ease_out(t);
        self.start + swept.round() as i32
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

// ============================================================================
// Drag engine
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Capture {
    pointer: PointerId,
    /// Content left coordinate at the moment of capture
    origin_left: i32,
}

/// Capture, clamp, and settle state for one panel's content surface
#[derive(Debug)]
pub(crate) struct DragEngine {
    base_settle: Duration,
    max_settle: Duration,
    capture: Option<Capture>,
    scroller: Option<Scroller>,
}

impl DragEngine {
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            base_settle: Duration::from_millis(config.base_settle_ms),
            max_settle: Duration::from_millis(config.max_settle_ms),
            capture: None,
            scroller: None,
        }
    }

    /// Capture a pointer for dragging, recording the content rest reference
    ///
    /// A fresh capture aborts any settle in flight: a new finger owns the
    /// surface from here on.
    pub fn capture(&mut self, pointer: PointerId, content_left: i32) {
        self.scroller = None;
        self.capture = Some(Capture {
            pointer,
            origin_left: content_left,
        });
    }

    /// New clamped content position for a total pointer displacement
    ///
    /// `total_dx` is measured from the gesture origin, not the previous
    /// event; the content position is always `origin + total`, clamped.
    pub fn drag_position(
        &self,
        pointer: PointerId,
        total_dx: f32,
        min_left: i32,
        max_left: i32,
    ) -> Result<i32, DragError> {
        let capture = self.capture.ok_or(DragError::NothingCaptured)?;
        if capture.pointer != pointer {
            return Err(DragError::PointerNotCaptured(pointer));
        }
        let raw = capture.origin_left + total_dx.round() as i32;
        Ok(clamp_horizontal(raw, min_left, max_left))
    }

    /// Drop the capture at pointer release
    pub fn release_capture(&mut self, pointer: PointerId) -> Result<(), DragError> {
        let capture = self.capture.ok_or(DragError::NothingCaptured)?;
        if capture.pointer != pointer {
            return Err(DragError::PointerNotCaptured(pointer));
        }
        self.capture = None;
        Ok(())
    }

    /// Begin (or retarget) a settle slide toward `target`
    ///
    /// No-op when a slide toward the same target is already running, or
    /// when the content already rests there.
    pub fn settle_to(&mut self, current: i32, target: i32, velocity: f32, extent: i32) {
        if self.settle_target() == Some(target) {
            return;
        }
        if current == target {
            self.scroller = None;
            return;
        }
        let duration = self.settle_duration(target - current, velocity, extent);
        self.scroller = Some(Scroller::new(current, target, duration));
    }

    pub fn settle_target(&self) -> Option<i32> {
        self.scroller.as_ref().map(|s| s.end)
    }

    pub fn is_settling(&self) -> bool {
        self.scroller.is_some()
    }

    pub fn abort_settle(&mut self) {
        self.scroller = None;
    }

    /// Advance the settle simulation by `dt`
    ///
    /// Returns the new content position, or `None` when nothing is
    /// settling. The scroller is dropped on the tick that reaches the
    /// target, so `is_settling()` reports false afterwards.
    pub fn tick(&mut self, dt: Duration) -> Option<i32> {
        let scroller = self.scroller.as_mut()?;
        let pos = scroller.tick(dt);
        if scroller.finished() {
            self.scroller = None;
        }
        Some(pos)
    }

    /// Slide duration for the given distance and release velocity
    ///
    /// A real fling covers the distance at (a padded multiple of) its own
    /// speed; a velocity-less settle takes the base duration scaled by the
    /// fraction of the extent still to travel. Either way the duration is
    /// capped.
    fn settle_duration(&self, distance: i32, velocity: f32, extent: i32) -> Duration {
        let distance = distance.abs() as f32;
        let velocity = velocity.abs();

        let ms = if velocity > 1.0 {
            (4.0 * 1000.0 * distance / velocity).round() as u64
        } else if extent > 0 {
            let fraction = distance / extent as f32;
            (self.base_settle.as_millis() as f32 * fraction).round() as u64
        } else {
            0
        };

        Duration::from_millis(ms.min(self.max_settle.as_millis() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DragEngine {
        DragEngine::new(&SwipeConfig::default())
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    const POINTER: PointerId = PointerId(7);

    #[test]
    fn test_drag_position_clamps_both_ends() {
        let mut engine = engine();
        engine.capture(POINTER, 0);

        assert_eq!(engine.drag_position(POINTER, -10_000.0, -200, 0), Ok(-200));
        assert_eq!(engine.drag_position(POINTER, 10_000.0, -200, 0), Ok(0));
        assert_eq!(engine.drag_position(POINTER, -77.0, -200, 0), Ok(-77));
    }

    #[test]
    fn test_unknown_pointer_is_an_error() {
        let mut engine = engine();
        engine.capture(POINTER, 0);

        let stray = PointerId(99);
        assert_eq!(
            engine.drag_position(stray, -5.0, -200, 0),
            Err(DragError::PointerNotCaptured(stray))
        );
        assert_eq!(
            engine.release_capture(stray),
            Err(DragError::PointerNotCaptured(stray))
        );
    }

    #[test]
    fn test_release_without_capture_is_an_error() {
        let mut engine = engine();
        assert_eq!(engine.release_capture(POINTER), Err(DragError::NothingCaptured));
    }

    #[test]
    fn test_settle_reaches_target_and_stops() {
        let mut engine = engine();
        engine.settle_to(0, -200, 0.0, 200);
        assert!(engine.is_settling());

        let mut last = 0;
        for _ in 0..200 {
            match engine.tick(ms(16)) {
                Some(pos) => last = pos,
                None => break,
            }
        }
        assert_eq!(last, -200);
        assert!(!engine.is_settling());
    }

    #[test]
    fn test_settle_progress_is_monotonic() {
        let mut engine = engine();
        engine.settle_to(0, -200, 0.0, 200);

        let mut previous = 0;
        while let Some(pos) = engine.tick(ms(16)) {
            assert!(pos <= previous, "settle moved backwards: {} -> {}", previous, pos);
            previous = pos;
        }
        assert_eq!(previous, -200);
    }

    #[test]
    fn test_settle_to_same_target_is_noop() {
        let mut engine = engine();
        engine.settle_to(0, -200, 0.0, 200);
        let target = engine.settle_target();

        // Retargeting to the same position must not restart the slide
        engine.tick(ms(100));
        engine.settle_to(-50, -200, 0.0, 200);
        assert_eq!(engine.settle_target(), target);
    }

    #[test]
    fn test_settle_at_rest_does_nothing() {
        let mut engine = engine();
        engine.settle_to(0, 0, 0.0, 200);
        assert!(!engine.is_settling());
        assert_eq!(engine.tick(ms(16)), None);
    }

    #[test]
    fn test_fresh_capture_aborts_settle() {
        let mut engine = engine();
        engine.settle_to(0, -200, 0.0, 200);
        assert!(engine.is_settling());

        engine.capture(POINTER, -40);
        assert!(!engine.is_settling());
    }

    #[test]
    fn test_fling_duration_is_capped() {
        let engine = engine();
        // A crawl over a huge distance would exceed the cap
        let duration = engine.settle_duration(10_000, 50.0, 10_000);
        assert_eq!(duration, ms(SwipeConfig::default().max_settle_ms));
    }

    #[test]
    fn test_zero_extent_settles_instantly() {
        let engine = engine();
        assert_eq!(engine.settle_duration(0, 0.0, 0), Duration::ZERO);
    }
}
