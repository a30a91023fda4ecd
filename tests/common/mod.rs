//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use swipecell::config::SwipeConfig;
use swipecell::coordinator::PanelSource;
use swipecell::events::{EventResult, PointerEvent, SwipeEvent};
use swipecell::geometry::{Rect, Size};
use swipecell::panel::{RevealMode, SwipePanel};
use swipecell::PanelHandle;

pub const ROW_WIDTH: i32 = 400;
pub const ROW_HEIGHT: i32 = 80;

/// Press point at the content surface center
pub const CENTER: (f32, f32) = (200.0, 40.0);

/// Simulated frame interval
pub const TICK: Duration = Duration::from_millis(16);

/// Build a measured, laid-out panel with the given menu widths
pub fn test_panel(mode: RevealMode, menu_widths: &[i32]) -> SwipePanel {
    let mut panel = SwipePanel::new(mode, &SwipeConfig::default());
    panel.add_surface(Size::new(ROW_WIDTH, ROW_HEIGHT));
    for &width in menu_widths {
        panel.add_surface(Size::new(width, ROW_HEIGHT));
    }
    panel.set_frame(Rect::new(0, 0, ROW_WIDTH, ROW_HEIGHT));
    panel.measure();
    panel.layout();
    panel
}

/// Same panel wrapped in the shared handle the coordinator works with
pub fn shared_panel(mode: RevealMode, menu_widths: &[i32]) -> PanelHandle {
    Rc::new(RefCell::new(test_panel(mode, menu_widths)))
}

/// A bindable row exposing its panel, as a recycling host would
pub struct TestRow {
    pub panel: PanelHandle,
}

impl TestRow {
    pub fn new(panel: PanelHandle) -> Self {
        Self { panel }
    }
}

impl PanelSource for TestRow {
    fn swipe_panel(&self) -> Option<PanelHandle> {
        Some(self.panel.clone())
    }
}

/// A misconfigured row with no panel inside
pub struct EmptyRow;

impl PanelSource for EmptyRow {
    fn swipe_panel(&self) -> Option<PanelHandle> {
        None
    }
}

/// Feed one pointer event, borrowing only for the call
pub fn feed(panel: &PanelHandle, event: PointerEvent) -> EventResult {
    panel.borrow_mut().on_pointer_event(&event)
}

/// A quick drag released at speed: press at the content center, five
/// moves 16ms apart, release at the end point. The short hop times give
/// the release a real fling velocity in the drag direction.
pub fn fling(panel: &PanelHandle, dx: f32, dy: f32, clock: &mut Duration) -> Vec<EventResult> {
    let (sx, sy) = CENTER;
    let mut results = vec![feed(panel, PointerEvent::press(sx, sy, *clock))];
    let steps = 5;
    for i in 1..=steps {
        *clock += TICK;
        let x = sx + dx * i as f32 / steps as f32;
        let y = sy + dy * i as f32 / steps as f32;
        results.push(feed(panel, PointerEvent::moved(x, y, *clock)));
    }
    *clock += TICK;
    results.push(feed(
        panel,
        PointerEvent::release(sx + dx, sy + dy, *clock),
    ));
    results
}

/// A drag that stops dead before releasing: the hold pushes every moving
/// sample out of the velocity window, so release velocity is ~0.
pub fn drag_and_hold(panel: &PanelHandle, dx: f32, dy: f32, clock: &mut Duration) -> Vec<EventResult> {
    let (sx, sy) = CENTER;
    let (ex, ey) = (sx + dx, sy + dy);
    let mut results = vec![feed(panel, PointerEvent::press(sx, sy, *clock))];
    let steps = 5;
    for i in 1..=steps {
        *clock += TICK;
        let x = sx + dx * i as f32 / steps as f32;
        let y = sy + dy * i as f32 / steps as f32;
        results.push(feed(panel, PointerEvent::moved(x, y, *clock)));
    }
    for _ in 0..3 {
        *clock += Duration::from_millis(60);
        results.push(feed(panel, PointerEvent::moved(ex, ey, *clock)));
    }
    *clock += TICK;
    results.push(feed(panel, PointerEvent::release(ex, ey, *clock)));
    results
}

/// Drag a panel fully open and settle it
pub fn open_by_gesture(panel: &PanelHandle, clock: &mut Duration) {
    let extent = panel.borrow().drag_extent();
    fling(panel, -(extent as f32), 0.0, clock);
    settle(panel);
}

/// Tick a panel's settle animation to completion
pub fn settle(panel: &PanelHandle) {
    for _ in 0..1_000 {
        if !panel.borrow_mut().tick(TICK) {
            return;
        }
    }
    panic!("settle did not converge within 1000 ticks");
}

/// Record every lifecycle event the panel emits
pub fn record_events(panel: &PanelHandle) -> Rc<RefCell<Vec<SwipeEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    panel
        .borrow_mut()
        .set_swipe_listener(Box::new(move |_, event| sink.borrow_mut().push(event)));
    log
}

/// Current content-surface left coordinate
pub fn content_left(panel: &PanelHandle) -> i32 {
    panel.borrow().content().expect("panel has a content surface").frame().left()
}

/// Current menu-surface frames in reveal order
pub fn menu_frames(panel: &PanelHandle) -> Vec<Rect> {
    panel
        .borrow()
        .menu_surfaces()
        .iter()
        .map(|surface| surface.frame())
        .collect()
}
