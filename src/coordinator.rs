//! Cross-recycling open-state coordination
//!
//! A recycling list reuses the same panel instance for different logical
//! positions, so "row 7 is open" cannot live on the panel. The coordinator
//! owns that fact: it maps positions to open intent, keeps a non-owning
//! registry of the live panel instances, and replays the recorded intent
//! onto whichever instance currently shows a position every time that
//! instance is laid out.
//!
//! Adapters are attached to a panel exactly once, on its first bind. A
//! rebind only repoints a shared position cell; the attached listener and
//! layout observer read the cell on every callback, so notification chains
//! stay linear in the number of rebinds.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::events::SwipeEvent;
use crate::panel::{PanelId, SettleCommand, Status, SwipePanel};

/// Shared handle to a panel instance, as held by host rows
pub type PanelHandle = Rc<RefCell<SwipePanel>>;

/// How a bound row exposes its swipe panel to the coordinator
pub trait PanelSource {
    /// The panel inside this row's view tree, if the row has one
    fn swipe_panel(&self) -> Option<PanelHandle>;
}

/// Configuration errors raised by [`SwipeCoordinator::bind`]
#[derive(Debug, Error)]
pub enum BindError {
    /// The bound row exposes no swipe panel - the caller wired the wrong
    /// container layout. Not retryable.
    #[error("row bound at position {position} does not expose a swipe panel")]
    PanelNotFound { position: usize },
}

/// How many panels may be open at once
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// At most one open row at a time
    Single,
    /// Any number of rows open concurrently
    Multiple,
}

struct CoordinatorState {
    policy: Policy,
    /// Sole open position under `Policy::Single`
    open_position: Option<usize>,
    /// Open positions under `Policy::Multiple`
    open_positions: HashSet<usize>,
    /// Live panel registry; non-owning, pruned as handles die
    live: HashMap<PanelId, Weak<RefCell<SwipePanel>>>,
    /// Per-instance position cells, shared with the attached adapters and
    /// repointed in place on rebind
    bindings: HashMap<PanelId, Rc<Cell<usize>>>,
}

impl CoordinatorState {
    fn position_is_open(&self, position: usize) -> bool {
        match self.policy {
            Policy::Single => self.open_position == Some(position),
            Policy::Multiple => self.open_positions.contains(&position),
        }
    }
}

/// Per-list open-state manager enforcing the open policy across recycling
pub struct SwipeCoordinator {
    state: Rc<RefCell<CoordinatorState>>,
    /// Host refresh hook: re-layout all visible rows so layout observers
    /// can apply newly recorded intent
    refresh: Box<dyn FnMut()>,
}

impl SwipeCoordinator {
    /// Create a coordinator with the host's row-refresh hook
    pub fn new(policy: Policy, refresh: Box<dyn FnMut()>) -> Self {
        Self {
            state: Rc::new(RefCell::new(CoordinatorState {
                policy,
                open_position: None,
                open_positions: HashSet::new(),
                live: HashMap::new(),
                bindings: HashMap::new(),
            })),
            refresh,
        }
    }

    pub fn policy(&self) -> Policy {
        self.state.borrow().policy
    }

    /// Switch policy; conservative reset of all open bookkeeping
    ///
    /// The binding table survives: it is keyed by instance identity and
    /// repointed on the next bind, so keeping it cannot duplicate
    /// adapters.
    pub fn set_policy(&mut self, policy: Policy) {
        let mut state = self.state.borrow_mut();
        state.policy = policy;
        state.open_position = None;
        state.open_positions.clear();
        state.live.clear();
    }

    /// Associate a row's panel instance with a logical position
    ///
    /// Idempotent per instance: the first bind attaches the listener and
    /// layout-observer adapters; every later bind of the same instance
    /// only updates the remembered position. Always (re)registers the
    /// panel in the live set.
    pub fn bind(&mut self, row: &dyn PanelSource, position: usize) -> Result<(), BindError> {
        let panel = row
            .swipe_panel()
            .ok_or(BindError::PanelNotFound { position })?;
        let id = panel.borrow().id();

        let existing = self.state.borrow().bindings.get(&id).cloned();
        match existing {
            Some(cell) => {
                cell.set(position);
                self.state
                    .borrow_mut()
                    .live
                    .insert(id, Rc::downgrade(&panel));
            }
            None => {
                let cell = Rc::new(Cell::new(position));
                {
                    let mut state = self.state.borrow_mut();
                    state.bindings.insert(id, cell.clone());
                    state.live.insert(id, Rc::downgrade(&panel));
                }
                self.attach_adapters(&panel, &cell);
            }
        }
        tracing::debug!(?id, position, "bound panel");
        Ok(())
    }

    fn attach_adapters(&self, panel: &PanelHandle, cell: &Rc<Cell<usize>>) {
        let state = Rc::downgrade(&self.state);
        let position = cell.clone();
        panel
            .borrow_mut()
            .set_memory_listener(Box::new(move |panel_id, event| {
                if let Some(state) = state.upgrade() {
                    handle_swipe_event(&state, panel_id, position.get(), event);
                }
            }));

        let state = Rc::downgrade(&self.state);
        let position = cell.clone();
        panel.borrow_mut().set_layout_observer(Box::new(move |_| {
            let state = state.upgrade()?;
            let open = state.borrow().position_is_open(position.get());
            Some(if open {
                SettleCommand::Open
            } else {
                SettleCommand::Close
            })
        }));
    }

    /// Record a position as open, then ask the host to refresh rows
    pub fn open_item(&mut self, position: usize) {
        {
            let mut state = self.state.borrow_mut();
            match state.policy {
                Policy::Multiple => {
                    state.open_positions.insert(position);
                }
                Policy::Single => state.open_position = Some(position),
            }
        }
        (self.refresh)();
    }

    /// Record a position as closed, then ask the host to refresh rows
    pub fn close_item(&mut self, position: usize) {
        {
            let mut state = self.state.borrow_mut();
            match state.policy {
                Policy::Multiple => {
                    state.open_positions.remove(&position);
                }
                Policy::Single => {
                    if state.open_position == Some(position) {
                        state.open_position = None;
                    }
                }
            }
        }
        (self.refresh)();
    }

    /// Animate-close every live panel except the given one
    pub fn close_all_except(&self, panel_id: PanelId) {
        close_live_except(&self.state, Some(panel_id));
    }

    /// Clear all open bookkeeping and animate-close every live panel
    pub fn close_all_items(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            state.open_position = None;
            state.open_positions.clear();
        }
        close_live_except(&self.state, None);
    }

    /// Prune a detached panel instance from the live registry
    pub fn detach(&mut self, panel_id: PanelId) {
        self.state.borrow_mut().live.remove(&panel_id);
    }

    pub fn is_open(&self, position: usize) -> bool {
        self.state.borrow().position_is_open(position)
    }

    /// Positions currently recorded as open (no defined order)
    pub fn open_items(&self) -> Vec<usize> {
        let state = self.state.borrow();
        match state.policy {
            Policy::Single => state.open_position.into_iter().collect(),
            Policy::Multiple => state.open_positions.iter().copied().collect(),
        }
    }

    /// Live panel instances currently at the open geometry
    pub fn open_panels(&self) -> Vec<PanelHandle> {
        let live: Vec<PanelHandle> = {
            let mut state = self.state.borrow_mut();
            state.live.retain(|_, weak| weak.strong_count() > 0);
            state.live.values().filter_map(Weak::upgrade).collect()
        };
        live.into_iter()
            .filter(|panel| panel.borrow().status() == Status::Open)
            .collect()
    }
}

/// Bookkeeping reactions to panel lifecycle events
///
/// Runs inside a panel's notify path: the panel itself is mutably
/// borrowed, so only *other* panels may be touched here.
fn handle_swipe_event(
    state: &Rc<RefCell<CoordinatorState>>,
    panel_id: PanelId,
    position: usize,
    event: SwipeEvent,
) {
    match event {
        SwipeEvent::StartOpen => {
            // Pre-emptive under Single: the previous open item starts
            // closing before this one finishes opening, so two panels are
            // never fully open during the crossing animation.
            if state.borrow().policy == Policy::Single {
                close_live_except(state, Some(panel_id));
            }
        }
        SwipeEvent::Open => {
            let close_others = {
                let mut s = state.borrow_mut();
                match s.policy {
                    Policy::Multiple => {
                        s.open_positions.insert(position);
                        false
                    }
                    Policy::Single => {
                        s.open_position = Some(position);
                        true
                    }
                }
            };
            if close_others {
                close_live_except(state, Some(panel_id));
            }
            tracing::trace!(?panel_id, position, "recorded open");
        }
        SwipeEvent::Close => {
            let mut s = state.borrow_mut();
            match s.policy {
                Policy::Multiple => {
                    s.open_positions.remove(&position);
                }
                Policy::Single => {
                    // Only the position that actually closed may clear the
                    // slot; a panel closing mid-crossing must not clobber
                    // the newly opened one.
                    if s.open_position == Some(position) {
                        s.open_position = None;
                    }
                }
            }
        }
        SwipeEvent::StartClose | SwipeEvent::Update { .. } | SwipeEvent::HandRelease { .. } => {}
    }
}

fn close_live_except(state: &Rc<RefCell<CoordinatorState>>, except: Option<PanelId>) {
    // Collect strong handles first. Closing a panel re-enters coordinator
    // state through its listeners, so no borrow may be held while calling
    // into panels.
    let others: Vec<PanelHandle> = {
        let mut s = state.borrow_mut();
        s.live.retain(|_, weak| weak.strong_count() > 0);
        s.live
            .iter()
            .filter(|(id, _)| Some(**id) != except)
            .filter_map(|(_, weak)| weak.upgrade())
            .collect()
    };
    for panel in others {
        panel.borrow_mut().close();
    }
}
