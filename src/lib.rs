//! swipecell - swipeable reveal panels for recycled lists
//!
//! This crate provides the gesture, geometry, and open-state logic for
//! swipe-to-reveal row panels: a [`panel::SwipePanel`] interprets pointer
//! input and animates its surfaces, and a [`coordinator::SwipeCoordinator`]
//! keeps the intended rows open while panel instances are recycled across
//! logical list positions. Rendering and the surrounding list container
//! belong to the host.

pub mod config;
pub mod config_paths;
pub mod coordinator;
pub mod events;
pub mod geometry;
pub mod panel;
pub mod runtime;
pub mod tracing;

// Re-export commonly used types
pub use config::SwipeConfig;
pub use coordinator::{BindError, PanelHandle, PanelSource, Policy, SwipeCoordinator};
pub use events::{EventResult, HitTarget, PointerEvent, SwipeEvent};
pub use panel::{PanelId, RevealMode, Status, SwipePanel};
