//! Swipeable reveal panel
//!
//! A [`SwipePanel`] owns one content surface and an ordered set of menu
//! surfaces revealed by dragging the content horizontally. The panel
//! consumes a normalized pointer stream, decides whether each gesture is
//! its own or an ancestor scroller's, redistributes menu geometry per
//! reveal mode while the content moves, and resolves a release into a
//! settle animation advanced by cooperative [`SwipePanel::tick`] calls.
//!
//! The panel knows nothing about logical list positions; see
//! [`crate::coordinator`] for the piece that survives instance recycling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::config::SwipeConfig;
use crate::events::{EventResult, HitTarget, PointerEvent, PointerId, PointerPhase, SwipeEvent};
use crate::geometry::{Insets, Point, Rect, Size};

mod drag;
mod velocity;

pub use drag::DragError;
use drag::DragEngine;
use velocity::VelocityTracker;

/// Movement steeper than this (degrees from horizontal) belongs to a
/// vertical scroller, not the panel
const MAX_CLAIM_ANGLE_DEG: f32 = 70.0;

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a panel instance across rebinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

impl PanelId {
    fn next() -> Self {
        PanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// How menu surfaces track the content during a drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Menus sit beside the content and shift rigidly with it
    PullOut,
    /// Menus are stacked statically behind the content
    LayDown,
    /// Menus telescope out, farther ones lagging behind nearer ones
    PullStack,
}

/// Where the panel currently rests, derived from content position
///
/// Never stored: always recomputed from geometry so it cannot go stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Closed,
    Open,
    Middle,
}

/// Command a layout observer hands back to the freshly laid-out panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleCommand {
    Open,
    Close,
}

/// Lifecycle listener: one callback, six tagged notification points
pub type SwipeListener = Box<dyn FnMut(PanelId, SwipeEvent)>;

/// Tap listener: receives the identity of the tapped surface
pub type TapListener = Box<dyn FnMut(PanelId, HitTarget)>;

/// Consulted after every layout pass; the returned command is applied to
/// the panel (this is how recycled instances replay open intent)
pub(crate) type LayoutObserver = Box<dyn FnMut(PanelId) -> Option<SettleCommand>>;

/// One child surface: a measured size plus its current placement
#[derive(Clone, Copy, Debug, Default)]
pub struct Surface {
    measured: Size,
    frame: Rect,
}

impl Surface {
    pub fn measured(&self) -> Size {
        self.measured
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}

#[derive(Clone, Copy, Debug)]
enum GesturePhase {
    /// No pointer down
    Idle,
    /// Pointer down, gesture not yet claimed
    Pending { pointer: PointerId, origin: Point },
    /// Gesture claimed; the content follows the pointer
    Claimed { pointer: PointerId, origin: Point },
}

/// A swipeable panel holding one content surface and N menu surfaces
pub struct SwipePanel {
    id: PanelId,
    mode: RevealMode,
    frame: Rect,
    insets: Insets,
    /// Index 0 is the content surface; the rest are menus in reveal order
    surfaces: Vec<Surface>,
    /// Rest rectangles of the menu surfaces, snapshot at each layout pass
    init_rects: Vec<Rect>,
    drag_extent: i32,
    touch_slop: f32,
    min_fling_velocity: f32,
    engine: DragEngine,
    gesture: GesturePhase,
    velocity: VelocityTracker,
    swipe_listener: Option<SwipeListener>,
    memory_listener: Option<SwipeListener>,
    tap_listener: Option<TapListener>,
    layout_observer: Option<LayoutObserver>,
    needs_redraw: bool,
    attached: bool,
}

impl SwipePanel {
    pub fn new(mode: RevealMode, config: &SwipeConfig) -> Self {
        Self {
            id: PanelId::next(),
            mode,
            frame: Rect::default(),
            insets: Insets::default(),
            surfaces: Vec::new(),
            init_rects: Vec::new(),
            drag_extent: 0,
            touch_slop: config.touch_slop,
            min_fling_velocity: config.min_fling_velocity,
            engine: DragEngine::new(config),
            gesture: GesturePhase::Idle,
            velocity: VelocityTracker::new(),
            swipe_listener: None,
            memory_listener: None,
            tap_listener: None,
            layout_observer: None,
            needs_redraw: false,
            attached: true,
        }
    }

    /// Append a child surface; the first one becomes the content surface
    ///
    /// Surface order is fixed after construction: menus reveal in
    /// insertion order, nearest the content edge first.
    pub fn add_surface(&mut self, size: Size) {
        self.surfaces.push(Surface {
            measured: size,
            frame: Rect::default(),
        });
    }

    /// Update a surface's measured size (host re-measure hook)
    pub fn set_surface_size(&mut self, index: usize, size: Size) {
        if let Some(surface) = self.surfaces.get_mut(index) {
            surface.measured = size;
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// The always-visible primary surface, if any child exists
    pub fn content(&self) -> Option<&Surface> {
        self.surfaces.first()
    }

    pub fn menu_surfaces(&self) -> &[Surface] {
        self.surfaces.get(1..).unwrap_or(&[])
    }

    pub fn menu_count(&self) -> usize {
        self.surfaces.len().saturating_sub(1)
    }

    /// Total horizontal drag travel; valid after [`SwipePanel::measure`]
    pub fn drag_extent(&self) -> i32 {
        self.drag_extent
    }

    /// Register the lifecycle listener (single slot, last write wins)
    pub fn set_swipe_listener(&mut self, listener: SwipeListener) {
        self.swipe_listener = Some(listener);
    }

    /// Register the tap listener (single slot, last write wins)
    pub fn set_tap_listener(&mut self, listener: TapListener) {
        self.tap_listener = Some(listener);
    }

    /// Coordinator-owned listener slot, repointed across rebinds
    pub(crate) fn set_memory_listener(&mut self, listener: SwipeListener) {
        self.memory_listener = Some(listener);
    }

    pub(crate) fn set_layout_observer(&mut self, observer: LayoutObserver) {
        self.layout_observer = Some(observer);
    }

    // ========================================================================
    // Measure & layout
    // ========================================================================

    /// Recompute the drag extent from current menu measurements
    ///
    /// Must run before every layout pass. With zero menu surfaces the
    /// extent is zero and the panel is a fixed, undraggable display.
    pub fn measure(&mut self) {
        self.drag_extent = self.menu_surfaces().iter().map(|s| s.measured.width).sum();
    }

    /// Place all surfaces at their rest geometry and snapshot it
    ///
    /// Layout always produces the closed arrangement; the layout observer
    /// then replays open intent by commanding a settle. A panel with no
    /// children stays inert.
    pub fn layout(&mut self) {
        if self.surfaces.is_empty() {
            return;
        }
        self.layout_content();

        self.init_rects.clear();
        self.init_rects.resize(self.menu_count(), Rect::default());
        match self.mode {
            RevealMode::LayDown => self.layout_lay_down(),
            RevealMode::PullStack => self.layout_pull_stack(),
            RevealMode::PullOut => self.layout_pull_out(),
        }
        self.needs_redraw = true;

        self.run_layout_observer();
    }

    fn layout_content(&mut self) {
        let left = self.rest_left();
        let top = self.frame.y + self.insets.top;
        let size = self.surfaces[0].measured;
        self.surfaces[0].frame = Rect::at(left, top, size);
    }

    fn layout_pull_out(&mut self) {
        let mut last = self.surfaces[0].frame;
        for i in 0..self.menu_count() {
            let size = self.surfaces[i + 1].measured;
            let rect = Rect::new(last.right(), last.top(), size.width, size.height);
            self.surfaces[i + 1].frame = rect;
            self.init_rects[i] = rect;
            last = rect;
        }
    }

    fn layout_lay_down(&mut self) {
        let content = self.surfaces[0].frame;
        let mut last: Option<Rect> = None;
        for i in (0..self.menu_count()).rev() {
            let size = self.surfaces[i + 1].measured;
            let rect = match last {
                // Farthest menu is right-aligned under the content edge
                None => Rect::new(
                    content.right() - size.width,
                    content.top(),
                    size.width,
                    size.height,
                ),
                Some(prev) => {
                    Rect::new(prev.left() - size.width, prev.top(), size.width, size.height)
                }
            };
            self.surfaces[i + 1].frame = rect;
            self.init_rects[i] = rect;
            last = Some(rect);
        }
    }

    fn layout_pull_stack(&mut self) {
        let content = self.surfaces[0].frame;
        for i in 0..self.menu_count() {
            let size = self.surfaces[i + 1].measured;
            let rect = Rect::new(content.right(), content.top(), size.width, size.height);
            self.surfaces[i + 1].frame = rect;
            self.init_rects[i] = rect;
        }
    }

    fn run_layout_observer(&mut self) {
        if let Some(mut observer) = self.layout_observer.take() {
            let command = observer(self.id);
            self.layout_observer = Some(observer);
            match command {
                Some(SettleCommand::Open) => self.open(),
                Some(SettleCommand::Close) => self.close(),
                None => {}
            }
        }
    }

    // ========================================================================
    // Status & positions
    // ========================================================================

    /// Content left coordinate when fully closed
    fn rest_left(&self) -> i32 {
        self.frame.x + self.insets.left
    }

    /// Content left coordinate when fully open
    fn open_left(&self) -> i32 {
        self.rest_left() - self.drag_extent
    }

    /// Current panel status, derived purely from content position
    pub fn status(&self) -> Status {
        let Some(content) = self.surfaces.first() else {
            return Status::Closed;
        };
        let left = content.frame.left();
        if left == self.rest_left() {
            Status::Closed
        } else if left == self.open_left() {
            Status::Open
        } else {
            Status::Middle
        }
    }

    // ========================================================================
    // Programmatic open/close & settle ticks
    // ========================================================================

    /// Animate to the fully open position
    pub fn open(&mut self) {
        self.settle_toward(self.open_left());
    }

    /// Animate to the fully closed position
    pub fn close(&mut self) {
        self.settle_toward(self.rest_left());
    }

    fn settle_toward(&mut self, target: i32) {
        let Some(content) = self.surfaces.first() else {
            return;
        };
        let current = content.frame.left();
        self.engine.settle_to(current, target, 0.0, self.drag_extent);
        self.needs_redraw = true;
    }

    /// Whether a settle animation is in flight
    pub fn is_settling(&self) -> bool {
        self.engine.is_settling()
    }

    /// Advance the settle simulation by `dt`
    ///
    /// Returns true while another tick is needed; the host keeps
    /// scheduling ticks until this returns false. A detached panel stops
    /// immediately.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.attached {
            self.engine.abort_settle();
            return false;
        }
        let Some(new_left) = self.engine.tick(dt) else {
            return false;
        };
        self.move_content_to(new_left);
        if self.engine.is_settling() {
            self.needs_redraw = true;
            true
        } else {
            false
        }
    }

    /// Drain the redraw flag (the host's invalidate signal)
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Detach from the host tree; in-flight animation stops scheduling
    pub fn detach(&mut self) {
        self.attached = false;
        self.engine.abort_settle();
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Feed one normalized pointer event through the gesture recognizer
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> EventResult {
        match event.phase {
            PointerPhase::Press => self.on_press(event),
            PointerPhase::Move => self.on_move(event),
            PointerPhase::Release => self.on_release(event),
            PointerPhase::Cancel => self.on_cancel(event),
        }
    }

    fn on_press(&mut self, event: &PointerEvent) -> EventResult {
        if self.surfaces.is_empty() || !self.frame.contains(event.pos) {
            return EventResult::Bubble;
        }
        self.velocity.clear();
        self.velocity.add_sample(event.time, event.pos);

        // Only the content surface is draggable; a press that lands on a
        // menu surface captures the content instead.
        let content_left = self.surfaces[0].frame.left();
        self.engine.capture(event.pointer, content_left);
        self.gesture = GesturePhase::Pending {
            pointer: event.pointer,
            origin: event.pos,
        };
        EventResult::Consumed
    }

    fn on_move(&mut self, event: &PointerEvent) -> EventResult {
        match self.gesture {
            GesturePhase::Idle => EventResult::Bubble,
            GesturePhase::Pending { pointer, origin } => {
                if pointer != event.pointer {
                    return EventResult::Bubble;
                }
                self.velocity.add_sample(event.time, event.pos);
                let dx = event.pos.x - origin.x;
                let dy = event.pos.y - origin.y;
                if dx.abs() > self.touch_slop && claim_angle_allows(dx, dy) {
                    self.gesture = GesturePhase::Claimed { pointer, origin };
                    self.apply_drag(pointer, origin, event.pos);
                    EventResult::Claimed
                } else {
                    EventResult::Bubble
                }
            }
            GesturePhase::Claimed { pointer, origin } => {
                if pointer != event.pointer {
                    return EventResult::Bubble;
                }
                self.velocity.add_sample(event.time, event.pos);
                self.apply_drag(pointer, origin, event.pos);
                EventResult::Consumed
            }
        }
    }

    fn on_release(&mut self, event: &PointerEvent) -> EventResult {
        match self.gesture {
            GesturePhase::Idle => EventResult::Bubble,
            GesturePhase::Pending { pointer, origin } => {
                if pointer != event.pointer {
                    return EventResult::Bubble;
                }
                self.gesture = GesturePhase::Idle;
                if let Err(e) = self.engine.release_capture(pointer) {
                    tracing::warn!("dropping pointer release: {}", e);
                }
                let dx = event.pos.x - origin.x;
                let dy = event.pos.y - origin.y;
                if dx.abs() <= self.touch_slop && dy.abs() <= self.touch_slop {
                    self.dispatch_tap(event.pos);
                }
                EventResult::Consumed
            }
            GesturePhase::Claimed { pointer, .. } => {
                if pointer != event.pointer {
                    return EventResult::Bubble;
                }
                self.velocity.add_sample(event.time, event.pos);
                self.gesture = GesturePhase::Idle;
                if let Err(e) = self.engine.release_capture(pointer) {
                    tracing::warn!("dropping pointer release: {}", e);
                }
                let (xvel, yvel) = self.velocity.velocity();
                self.resolve_release(xvel);
                self.notify(SwipeEvent::HandRelease { xvel, yvel });
                EventResult::Consumed
            }
        }
    }

    fn on_cancel(&mut self, event: &PointerEvent) -> EventResult {
        match self.gesture {
            GesturePhase::Idle => EventResult::Bubble,
            GesturePhase::Pending { pointer, .. } => {
                if pointer != event.pointer {
                    return EventResult::Bubble;
                }
                self.gesture = GesturePhase::Idle;
                if let Err(e) = self.engine.release_capture(pointer) {
                    tracing::warn!("dropping pointer cancel: {}", e);
                }
                EventResult::Consumed
            }
            GesturePhase::Claimed { pointer, .. } => {
                if pointer != event.pointer {
                    return EventResult::Bubble;
                }
                self.gesture = GesturePhase::Idle;
                if let Err(e) = self.engine.release_capture(pointer) {
                    tracing::warn!("dropping pointer cancel: {}", e);
                }
                // A cancelled drag settles like a zero-velocity release.
                self.resolve_release(0.0);
                self.notify(SwipeEvent::HandRelease {
                    xvel: 0.0,
                    yvel: 0.0,
                });
                EventResult::Consumed
            }
        }
    }

    fn apply_drag(&mut self, pointer: PointerId, origin: Point, pos: Point) {
        let total_dx = pos.x - origin.x;
        let (min_left, max_left) = (self.open_left(), self.rest_left());
        match self.engine.drag_position(pointer, total_dx, min_left, max_left) {
            Ok(new_left) => self.move_content_to(new_left),
            Err(e) => {
                // A drag in progress must survive input-normalization
                // faults; skip this event and keep tracking.
                tracing::warn!("dropping pointer move: {}", e);
            }
        }
    }

    /// Where the pointer release should leave the panel
    ///
    /// Distance and velocity are checked independently: a fast outward
    /// fling below half-extent still opens, a fast inward fling above it
    /// still closes. The open branch wins when both match.
    fn resolve_release(&mut self, xvel: f32) {
        let Some(content) = self.surfaces.first() else {
            return;
        };
        let distance = (self.rest_left() - content.frame.left()).abs() as f32;
        let half_extent = (self.drag_extent / 2) as f32;
        if distance >= half_extent || xvel < -self.min_fling_velocity {
            self.open();
        } else if distance < half_extent || xvel > self.min_fling_velocity {
            self.close();
        }
    }

    // ========================================================================
    // Position updates & notification
    // ========================================================================

    fn move_content_to(&mut self, new_left: i32) {
        let dx = {
            let Some(content) = self.surfaces.first_mut() else {
                return;
            };
            let dx = new_left - content.frame.left();
            if dx != 0 {
                content.frame.offset(dx, 0);
            }
            dx
        };
        if dx != 0 {
            self.position_changed(dx);
        }
    }

    fn position_changed(&mut self, dx: i32) {
        match self.mode {
            RevealMode::PullOut => self.redistribute_pull_out(dx),
            RevealMode::PullStack => self.redistribute_pull_stack(dx),
            RevealMode::LayDown => {}
        }
        self.needs_redraw = true;
        self.notify_position_changed(dx, 0);
    }

    /// Rigid shift: every menu surface tracks the content exactly
    fn redistribute_pull_out(&mut self, dx: i32) {
        for surface in self.surfaces.iter_mut().skip(1) {
            surface.frame.offset(dx, 0);
        }
    }

    /// Telescoping shift: travel is split evenly across the menus, the
    /// remainder corrected by one pixel in the travel direction
    fn redistribute_pull_stack(&mut self, dx: i32) {
        let count = self.menu_count();
        if count == 0 {
            return;
        }
        let distance_x = self.surfaces[0].frame.left() - self.rest_left();
        let unit = distance_x / count as i32;
        let correction = (distance_x % count as i32).signum();
        for i in 0..count {
            if i == 0 {
                // Nearest menu takes the full incremental shift
                self.surfaces[1].frame.offset(dx, 0);
                continue;
            }
            let offset = unit * (count - i) as i32 + correction;
            self.surfaces[i + 1].frame = self.init_rects[i].offset_by(offset, 0);
        }
    }

    fn notify_position_changed(&mut self, dx: i32, dy: i32) {
        if dx > 0 {
            self.notify(SwipeEvent::StartClose);
        }
        if dx < 0 {
            self.notify(SwipeEvent::StartOpen);
        }
        self.notify(SwipeEvent::Update { dx, dy });
        // Level-triggered: re-fires while resting at either end. The
        // coordinator's bookkeeping relies on idempotent re-application.
        match self.status() {
            Status::Closed => self.notify(SwipeEvent::Close),
            Status::Open => self.notify(SwipeEvent::Open),
            Status::Middle => {}
        }
    }

    fn notify(&mut self, event: SwipeEvent) {
        if let Some(mut listener) = self.swipe_listener.take() {
            listener(self.id, event);
            self.swipe_listener = Some(listener);
        }
        if let Some(mut listener) = self.memory_listener.take() {
            listener(self.id, event);
            self.memory_listener = Some(listener);
        }
    }

    // ========================================================================
    // Hit-testing
    // ========================================================================

    /// The surface under the point, frontmost first
    ///
    /// The content surface is frontmost; menus stack in declaration
    /// order underneath, later ones above earlier ones.
    pub fn hit_test(&self, pos: Point) -> Option<HitTarget> {
        let content = self.surfaces.first()?;
        if content.frame.contains(pos) {
            return Some(HitTarget::Content);
        }
        for index in (0..self.menu_count()).rev() {
            if self.surfaces[index + 1].frame.contains(pos) {
                return Some(HitTarget::Menu { index });
            }
        }
        None
    }

    fn dispatch_tap(&mut self, pos: Point) {
        let Some(target) = self.hit_test(pos) else {
            return;
        };
        if let Some(mut listener) = self.tap_listener.take() {
            listener(self.id, target);
            self.tap_listener = Some(listener);
        }
    }
}

fn claim_angle_allows(dx: f32, dy: f32) -> bool {
    let angle = (dy / dx).abs().atan().to_degrees();
    angle < MAX_CLAIM_ANGLE_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_with_menus(mode: RevealMode, widths: &[i32]) -> SwipePanel {
        let mut panel = SwipePanel::new(mode, &SwipeConfig::default());
        panel.add_surface(Size::new(400, 80));
        for &width in widths {
            panel.add_surface(Size::new(width, 80));
        }
        panel.set_frame(Rect::new(0, 0, 400, 80));
        panel.measure();
        panel.layout();
        panel
    }

    #[test]
    fn test_measure_sums_menu_widths() {
        let panel = panel_with_menus(RevealMode::PullOut, &[100, 60]);
        assert_eq!(panel.drag_extent(), 160);
    }

    #[test]
    fn test_pull_out_layout_is_edge_to_edge_beside_content() {
        let panel = panel_with_menus(RevealMode::PullOut, &[100, 60]);
        assert_eq!(panel.menu_surfaces()[0].frame(), Rect::new(400, 0, 100, 80));
        assert_eq!(panel.menu_surfaces()[1].frame(), Rect::new(500, 0, 60, 80));
    }

    #[test]
    fn test_lay_down_layout_stacks_under_content_edge() {
        let panel = panel_with_menus(RevealMode::LayDown, &[100, 60]);
        // Farthest menu right-aligned under the content's right edge,
        // nearer ones placed leftward from it
        assert_eq!(panel.menu_surfaces()[1].frame(), Rect::new(340, 0, 60, 80));
        assert_eq!(panel.menu_surfaces()[0].frame(), Rect::new(240, 0, 100, 80));
    }

    #[test]
    fn test_pull_stack_layout_piles_menus_at_content_edge() {
        let panel = panel_with_menus(RevealMode::PullStack, &[100, 60]);
        assert_eq!(panel.menu_surfaces()[0].frame(), Rect::new(400, 0, 100, 80));
        assert_eq!(panel.menu_surfaces()[1].frame(), Rect::new(400, 0, 60, 80));
    }

    #[test]
    fn test_status_with_no_children_is_closed() {
        let mut panel = SwipePanel::new(RevealMode::PullOut, &SwipeConfig::default());
        panel.set_frame(Rect::new(0, 0, 400, 80));
        panel.measure();
        panel.layout();
        assert_eq!(panel.status(), Status::Closed);
    }

    #[test]
    fn test_hit_test_prefers_content() {
        let panel = panel_with_menus(RevealMode::PullOut, &[100]);
        assert_eq!(panel.hit_test(Point::new(10.0, 10.0)), Some(HitTarget::Content));
        assert_eq!(
            panel.hit_test(Point::new(420.0, 10.0)),
            Some(HitTarget::Menu { index: 0 })
        );
        assert_eq!(panel.hit_test(Point::new(-5.0, 10.0)), None);
    }

    #[test]
    fn test_hit_test_overlapping_menus_picks_topmost() {
        // PullStack at rest piles every menu at the content edge; the
        // later-declared one draws on top
        let panel = panel_with_menus(RevealMode::PullStack, &[100, 60]);
        assert_eq!(
            panel.hit_test(Point::new(410.0, 10.0)),
            Some(HitTarget::Menu { index: 1 })
        );
    }

    #[test]
    fn test_claim_angle() {
        // 45 degrees: claimable
        assert!(claim_angle_allows(10.0, 10.0));
        // 70 degrees exactly: not claimable
        let dy = 10.0 * (70.0_f32).to_radians().tan();
        assert!(!claim_angle_allows(10.0, dy + 0.01));
        // Pure horizontal
        assert!(claim_angle_allows(-20.0, 0.0));
    }
}
