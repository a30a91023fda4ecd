//! Event types crossing the panel's boundary
//!
//! Three contracts live here: the normalized pointer stream a host feeds
//! into [`crate::panel::SwipePanel`], the tagged lifecycle events a panel
//! emits back, and the hit-test/consumption types that tell the host what
//! to do with an event it forwarded.
//!
//! The design follows a "feed -> result" pattern: the host pushes every
//! pointer event at the panel and routes it onward (or not) based on the
//! returned [`EventResult`]. `Claimed` is the one-shot signal to disable
//! ancestor scroll intercept for the rest of the gesture.

use std::time::Duration;

use crate::geometry::Point;

// ============================================================================
// Pointer stream
// ============================================================================

/// Stable identity of one pointer (mouse or finger) across a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// The mouse pointer; finger ids start above it
pub const MOUSE_POINTER: PointerId = PointerId(0);

/// Where in its lifecycle a pointer event sits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    /// The host took the pointer away mid-gesture (scroll intercept,
    /// window loss); there will be no Release
    Cancel,
}

/// One normalized pointer event
///
/// `time` is monotonic from an arbitrary epoch; only differences matter
/// (the velocity tracker consumes them).
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pos: Point,
    pub pointer: PointerId,
    pub time: Duration,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, pos: Point, pointer: PointerId, time: Duration) -> Self {
        Self {
            phase,
            pos,
            pointer,
            time,
        }
    }

    /// A mouse press at the given position
    pub fn press(x: f32, y: f32, time: Duration) -> Self {
        Self::new(PointerPhase::Press, Point::new(x, y), MOUSE_POINTER, time)
    }

    /// A mouse move at the given position
    pub fn moved(x: f32, y: f32, time: Duration) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y), MOUSE_POINTER, time)
    }

    /// A mouse release at the given position
    pub fn release(x: f32, y: f32, time: Duration) -> Self {
        Self::new(PointerPhase::Release, Point::new(x, y), MOUSE_POINTER, time)
    }

    /// A cancellation at the given position
    pub fn cancel(x: f32, y: f32, time: Duration) -> Self {
        Self::new(PointerPhase::Cancel, Point::new(x, y), MOUSE_POINTER, time)
    }
}

// ============================================================================
// Event results
// ============================================================================

/// What the host should do with an event it forwarded to a panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// The panel handled the event; stop propagation
    Consumed,

    /// The event is not the panel's; pass it to the ancestor scroller
    Bubble,

    /// The panel just claimed this gesture: handled, and the host must
    /// also disable ancestor intercept until the pointer lifts
    Claimed,
}

// ============================================================================
// Lifecycle events
// ============================================================================

/// The panel lifecycle contract: six notification points, one callback
///
/// `Open` and `Close` are level-triggered, not edge-triggered: they
/// re-fire on any position update that finds the panel already resting at
/// that end. Listener bookkeeping must be idempotent under the re-fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    /// The content moved toward the open position
    StartOpen,
    /// The panel reached (or is resting at) the fully open position
    Open,
    /// The content moved toward the closed position
    StartClose,
    /// The panel reached (or is resting at) the fully closed position
    Close,
    /// Incremental content movement during a drag or settle
    Update { dx: i32, dy: i32 },
    /// The pointer lifted with the given release velocity (px/s)
    HandRelease { xvel: f32, yvel: f32 },
}

// ============================================================================
// Hit targets
// ============================================================================

/// Which surface a tap landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The always-visible primary surface
    Content,
    /// A menu surface, by reveal order (0 is nearest the content edge)
    Menu { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_constructors_use_the_mouse_pointer() {
        let press = PointerEvent::press(10.0, 20.0, Duration::from_millis(5));
        assert_eq!(press.phase, PointerPhase::Press);
        assert_eq!(press.pos, Point::new(10.0, 20.0));
        assert_eq!(press.pointer, MOUSE_POINTER);

        assert_eq!(
            PointerEvent::moved(0.0, 0.0, Duration::ZERO).phase,
            PointerPhase::Move
        );
        assert_eq!(
            PointerEvent::release(0.0, 0.0, Duration::ZERO).phase,
            PointerPhase::Release
        );
        assert_eq!(
            PointerEvent::cancel(0.0, 0.0, Duration::ZERO).phase,
            PointerPhase::Cancel
        );
    }

    #[test]
    fn test_pointer_ids_compare_by_value() {
        assert_eq!(PointerId(3), PointerId(3));
        assert_ne!(PointerId(3), MOUSE_POINTER);
    }
}
