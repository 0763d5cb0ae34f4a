//! Property system for the chart toolbar.
//!
//! Properties hold the current value of an observable field. They do not emit
//! anything on their own: the owner decides when to emit the paired signal.
//!
//! # Example
//!
//! ```
//! use chart_toolbar_core::{Property, Signal};
//!
//! struct Button {
//!     enabled: Property<bool>,
//!     enabled_changed: Signal<bool>,
//! }
//!
//! impl Button {
//!     fn set_enabled(&self, enabled: bool) {
//!         if self.enabled.set(enabled) {
//!             self.enabled_changed.emit(enabled);
//!         }
//!     }
//! }
//!
//! let button = Button { enabled: Property::new(true), enabled_changed: Signal::new() };
//! button.set_enabled(false);
//! assert!(!button.enabled.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value holder with change detection.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Mutate the value in place without change detection.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.value.write())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
