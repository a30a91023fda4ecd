//! Winit event translation into the normalized pointer stream
//!
//! Winit reports cursor motion and button state as separate events and
//! touch input through its own phases; panels want one flat
//! press/move/release/cancel stream with positions and timestamps. The
//! adapter tracks the pieces winit splits up (last cursor position,
//! primary-button state) and stamps every event with a monotonic time
//! since adapter creation, which is what the velocity tracker consumes.

use std::time::{Duration, Instant};

use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::events::{PointerEvent, PointerId, PointerPhase, MOUSE_POINTER};
use crate::geometry::Point;

/// Translates winit window events into [`PointerEvent`]s
pub struct PointerAdapter {
    epoch: Instant,
    cursor: Point,
    mouse_down: bool,
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            cursor: Point::default(),
            mouse_down: false,
        }
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Translate one window event; returns `None` for events panels do
    /// not care about (hover motion, other buttons, keyboard, ...)
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                if self.mouse_down {
                    Some(PointerEvent::new(
                        PointerPhase::Move,
                        self.cursor,
                        MOUSE_POINTER,
                        self.now(),
                    ))
                } else {
                    None
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let phase = match state {
                    ElementState::Pressed => {
                        self.mouse_down = true;
                        PointerPhase::Press
                    }
                    ElementState::Released => {
                        self.mouse_down = false;
                        PointerPhase::Release
                    }
                };
                Some(PointerEvent::new(
                    phase,
                    self.cursor,
                    MOUSE_POINTER,
                    self.now(),
                ))
            }
            WindowEvent::Touch(touch) => {
                let phase = match touch.phase {
                    TouchPhase::Started => PointerPhase::Press,
                    TouchPhase::Moved => PointerPhase::Move,
                    TouchPhase::Ended => PointerPhase::Release,
                    TouchPhase::Cancelled => PointerPhase::Cancel,
                };
                let pos = Point::new(touch.location.x as f32, touch.location.y as f32);
                // Finger ids are offset by one to keep pointer id 0
                // reserved for the mouse.
                Some(PointerEvent::new(
                    phase,
                    pos,
                    PointerId(touch.id + 1),
                    self.now(),
                ))
            }
            _ => None,
        }
    }
}
