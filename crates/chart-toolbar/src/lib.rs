//! Chart Toolbar - a reactive toolbar model for a charting screen.
//!
//! The crate models a horizontal bar of seven buttons (time range, interval,
//! crosshair, line type, indicators, settings, back). It owns their selection
//! and enablement state, the mutual exclusion of the tool buttons, and the
//! orientation-driven split into left and right groups. Drawing is left to a
//! rendering adapter that subscribes to the per-button signals.
//!
//! # Example
//!
//! ```
//! use chart_toolbar::{ActionType, OrientationEvent, ToolbarConfig, ToolbarController};
//!
//! let controller = ToolbarController::new(ToolbarConfig::default(), OrientationEvent::portrait());
//! controller
//!     .item(ActionType::InteractiveTool)
//!     .selected_changed
//!     .connect(|selected| println!("crosshair selected: {}", selected));
//!
//! controller.on_item_tapped(ActionType::InteractiveTool);
//! controller.on_orientation_changed(OrientationEvent::landscape());
//!
//! let widths = controller.composer().group_widths();
//! assert_eq!(widths.left, 56.0 * 2.0 + 8.0);
//! ```

pub mod composer;
pub mod config;
pub mod controller;
pub mod error;
pub mod item;
pub mod item_state;
pub mod orientation;
pub mod presentation;

pub use chart_toolbar_core::{ConnectionGuard, ConnectionId, Property, Signal};

pub use composer::{GroupWidths, ToolbarComposer};
pub use config::{ToolbarConfig, ToolbarMetrics};
pub use controller::ToolbarController;
pub use error::{ConfigError, Result};
pub use item::{ActionType, IconName, ItemStyle, ToolbarItem};
pub use item_state::ToolbarItemState;
pub use orientation::{DeviceOrientation, OrientationEvent, ScreenSize};
pub use presentation::{ItemContent, ItemPresentation};
