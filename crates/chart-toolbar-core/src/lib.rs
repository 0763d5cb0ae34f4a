//! Core reactive primitives for the chart toolbar.
//!
//! This crate provides the building blocks the toolbar model is made of:
//!
//! - **Signal/Slot System**: Synchronous, type-safe change notification
//! - **Property System**: Interior-mutable values with change detection
//! - **Scoped Connections**: Subscriptions released when their guard drops
//! - **Logging**: `tracing` target names shared by the toolbar crates
//!
//! # Example
//!
//! ```
//! use chart_toolbar_core::{Property, Signal};
//!
//! let selected = Property::new(false);
//! let selected_changed = Signal::<bool>::new();
//!
//! selected_changed.connect(|value| println!("selected: {}", value));
//!
//! if selected.set(true) {
//!     selected_changed.emit(true);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
