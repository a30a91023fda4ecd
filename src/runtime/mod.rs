//! Host-framework integration
//!
//! The library core consumes a normalized pointer stream; this module
//! holds the adapters that produce one from a real host.

pub mod input;

pub use input::PointerAdapter;
