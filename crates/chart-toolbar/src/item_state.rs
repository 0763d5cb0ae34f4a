//! Per-button reactive state.
//!
//! [`ToolbarItemState`] wraps the current [`ToolbarItem`] of one button slot
//! together with the presentation flags the toolbar policies drive (selected,
//! enabled, interactive, hidden). Each observable field has its own signal.
//!
//! # Notifications
//!
//! - [`selected_changed`](ToolbarItemState::selected_changed): after a tap or an explicit selection update
//! - [`enabled_changed`](ToolbarItemState::enabled_changed): after [`set_enabled`](ToolbarItemState::set_enabled)
//! - [`title_changed`](ToolbarItemState::title_changed): after [`set_title`](ToolbarItemState::set_title)
//! - [`item_changed`](ToolbarItemState::item_changed): after [`replace_item`](ToolbarItemState::replace_item)
//! - [`interactive_changed`](ToolbarItemState::interactive_changed): after [`set_interactive`](ToolbarItemState::set_interactive)
//! - [`hidden_changed`](ToolbarItemState::hidden_changed): after [`set_hidden`](ToolbarItemState::set_hidden)
//!
//! The notifications are independent: replacing the whole item does not emit
//! the narrower signals, so a renderer that listens to `item_changed` must
//! read selection and title off the new item itself. Every setter emits, even
//! when the value did not change.

use chart_toolbar_core::logging::targets;
use chart_toolbar_core::{Property, Signal};

use crate::item::{ActionType, ItemStyle, ToolbarItem};

/// Reactive state of one toolbar button slot.
///
/// Created once per slot and kept for the toolbar's lifetime; data refreshes
/// replace the wrapped item, never the state object.
pub struct ToolbarItemState {
    item: Property<ToolbarItem>,
    selected: Property<bool>,
    enabled: Property<bool>,
    interactive: Property<bool>,
    hidden: Property<bool>,

    /// Emitted with the new visual selection.
    pub selected_changed: Signal<bool>,
    /// Emitted with the new enabled flag.
    pub enabled_changed: Signal<bool>,
    /// Emitted with the new title.
    pub title_changed: Signal<String>,
    /// Emitted with the replacement item.
    pub item_changed: Signal<ToolbarItem>,
    /// Emitted with the new interactivity flag.
    pub interactive_changed: Signal<bool>,
    /// Emitted with the new hidden flag.
    pub hidden_changed: Signal<bool>,
}

impl ToolbarItemState {
    /// Create the state for a button showing `item`.
    ///
    /// The button starts enabled, interactive and visible.
    pub fn new(item: ToolbarItem) -> Self {
        let selected = item.is_selected;
        Self {
            item: Property::new(item),
            selected: Property::new(selected),
            enabled: Property::new(true),
            interactive: Property::new(true),
            hidden: Property::new(false),
            selected_changed: Signal::new(),
            enabled_changed: Signal::new(),
            title_changed: Signal::new(),
            item_changed: Signal::new(),
            interactive_changed: Signal::new(),
            hidden_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// A snapshot of the current item.
    pub fn item(&self) -> ToolbarItem {
        self.item.get()
    }

    /// Read the current item without cloning it.
    pub fn with_item<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ToolbarItem) -> R,
    {
        self.item.with(f)
    }

    /// The identity of this slot.
    pub fn action_type(&self) -> ActionType {
        self.item.with(|item| item.action_type)
    }

    /// The current rendering style.
    pub fn style(&self) -> ItemStyle {
        self.item.with(|item| item.style)
    }

    /// The last selection value announced through `selected_changed`.
    pub fn is_selected(&self) -> bool {
        self.selected.get()
    }

    /// Whether the button is enabled (not dimmed).
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Whether the button accepts taps.
    pub fn is_interactive(&self) -> bool {
        self.interactive.get()
    }

    /// Whether the button is hidden from the bar.
    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }

    /// Whether a tap on this button should be honored.
    pub fn accepts_taps(&self) -> bool {
        self.is_enabled() && self.is_interactive() && !self.is_hidden()
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Toggle the item's selection and announce the new value.
    ///
    /// Sibling buttons are not touched; cross-item policy belongs to the
    /// composer. Returns the new selection.
    pub fn tap(&self) -> bool {
        let selected = self.item.update(|item| {
            item.is_selected = !item.is_selected;
            item.is_selected
        });
        self.selected.set_silent(selected);
        tracing::trace!(target: targets::ITEM, action = %self.action_type(), selected, "item tapped");
        self.selected_changed.emit(selected);
        selected
    }

    /// Announce a visual selection without touching the stored item.
    pub fn set_selected(&self, selected: bool) {
        self.selected.set_silent(selected);
        self.selected_changed.emit(selected);
    }

    /// Enable or dim the button.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set_silent(enabled);
        self.enabled_changed.emit(enabled);
    }

    /// Allow or block taps without changing the enabled appearance.
    pub fn set_interactive(&self, interactive: bool) {
        self.interactive.set_silent(interactive);
        self.interactive_changed.emit(interactive);
    }

    /// Hide or show the button.
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.set_silent(hidden);
        self.hidden_changed.emit(hidden);
    }

    /// Rewrite the item's title and announce it.
    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.item.update(|item| item.title = Some(title.clone()));
        self.title_changed.emit(title);
    }

    /// Replace the wrapped item wholesale and announce the replacement.
    ///
    /// The visual selection tracks the new item, but `selected_changed` is not
    /// emitted.
    pub fn replace_item(&self, item: ToolbarItem) {
        if item.action_type != self.action_type() {
            tracing::warn!(
                target: targets::ITEM,
                current = %self.action_type(),
                replacement = %item.action_type,
                "replacing item with a different action type"
            );
        }
        self.selected.set_silent(item.is_selected);
        self.item.set_silent(item.clone());
        self.item_changed.emit(item);
    }

    /// Apply `f` to a copy of the current item and replace the item with the result.
    pub fn update_item<F>(&self, f: F)
    where
        F: FnOnce(&mut ToolbarItem),
    {
        let mut item = self.item();
        f(&mut item);
        self.replace_item(item);
    }
}

impl std::fmt::Debug for ToolbarItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarItemState")
            .field("item", &self.item())
            .field("selected", &self.is_selected())
            .field("enabled", &self.is_enabled())
            .field("interactive", &self.is_interactive())
            .field("hidden", &self.is_hidden())
            .finish()
    }
}

static_assertions::assert_impl_all!(ToolbarItemState: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recorder<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        signal.connect(move |value: &T| received_clone.lock().push(value.clone()));
        received
    }

    fn line_type() -> ToolbarItemState {
        ToolbarItemState::new(ToolbarItem::for_action(ActionType::LineType, None))
    }

    #[test]
    fn test_tap_toggles_selection() {
        let state = line_type();
        let selected = recorder(&state.selected_changed);

        assert!(state.tap());
        assert!(state.item().is_selected);
        assert!(!state.tap());
        assert!(!state.item().is_selected);

        assert_eq!(*selected.lock(), vec![true, false]);
    }

    #[test]
    fn test_set_enabled_emits_every_time() {
        let state = line_type();
        let enabled = recorder(&state.enabled_changed);

        state.set_enabled(false);
        state.set_enabled(false);
        state.set_enabled(true);

        assert_eq!(*enabled.lock(), vec![false, false, true]);
        assert!(state.is_enabled());
    }

    #[test]
    fn test_set_title_mutates_item() {
        let state = ToolbarItemState::new(ToolbarItem::for_action(ActionType::Interval, Some("1W")));
        let titles = recorder(&state.title_changed);

        state.set_title("1D");

        assert_eq!(state.item().title.as_deref(), Some("1D"));
        assert_eq!(*titles.lock(), vec!["1D".to_string()]);
    }

    #[test]
    fn test_replace_item_round_trip() {
        let state = line_type();
        let items = recorder(&state.item_changed);
        let selected = recorder(&state.selected_changed);
        let titles = recorder(&state.title_changed);

        let replacement = ToolbarItem::for_action(ActionType::LineType, None)
            .with_title("Candles")
            .with_selected(true);
        state.replace_item(replacement.clone());

        assert_eq!(state.item(), replacement);
        assert_eq!(*items.lock(), vec![replacement]);
        assert!(selected.lock().is_empty());
        assert!(titles.lock().is_empty());
        assert!(state.is_selected());
    }

    #[test]
    fn test_set_selected_leaves_item_alone() {
        let state = line_type();
        state.set_selected(true);

        assert!(state.is_selected());
        assert!(!state.item().is_selected);
    }

    #[test]
    fn test_accepts_taps() {
        let state = line_type();
        assert!(state.accepts_taps());

        state.set_interactive(false);
        assert!(state.is_enabled());
        assert!(!state.accepts_taps());

        state.set_interactive(true);
        state.set_hidden(true);
        assert!(!state.accepts_taps());
    }
}
