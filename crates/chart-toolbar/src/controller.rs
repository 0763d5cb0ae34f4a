//! Top-level toolbar coordinator.
//!
//! [`ToolbarController`] owns the seven toolbar buttons and a
//! [`ToolbarComposer`]. It turns orientation events into group layouts and
//! button taps into the tool-group selection policy.
//!
//! # Layouts
//!
//! The left group is always `[time range, interval]`. The right group depends
//! on the wide-layout flag:
//!
//! | Layout | Right group | Settings submenu |
//! |--------|-------------|------------------|
//! | wide   | crosshair, line type, indicators, settings, back | empty |
//! | narrow | crosshair, settings, back | line type, indicators |
//!
//! # Tool group
//!
//! Crosshair, line type, indicators and settings are mutually exclusive.
//! Selecting one disables its tool siblings; deselecting it re-enables them.
//! Back and the left-group pickers are not affected by this policy.
//!
//! # Example
//!
//! ```
//! use chart_toolbar::{ActionType, OrientationEvent, ToolbarConfig, ToolbarController};
//!
//! let controller = ToolbarController::new(ToolbarConfig::default(), OrientationEvent::landscape());
//! controller.on_item_tapped(ActionType::LineType);
//!
//! assert!(controller.item(ActionType::LineType).is_selected());
//! assert!(!controller.item(ActionType::Indicators).is_enabled());
//! assert!(controller.item(ActionType::Back).is_interactive());
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use chart_toolbar_core::logging::targets;
use chart_toolbar_core::{ConnectionGuard, Property, Signal};
use parking_lot::Mutex;

use crate::composer::ToolbarComposer;
use crate::config::ToolbarConfig;
use crate::item::{ActionType, ToolbarItem};
use crate::item_state::ToolbarItemState;
use crate::orientation::OrientationEvent;

const LEFT_GROUP: &[ActionType] = &[ActionType::TimeRange, ActionType::Interval];

const WIDE_RIGHT_GROUP: &[ActionType] = &[
    ActionType::InteractiveTool,
    ActionType::LineType,
    ActionType::Indicators,
    ActionType::Settings,
    ActionType::Back,
];

const NARROW_RIGHT_GROUP: &[ActionType] = &[
    ActionType::InteractiveTool,
    ActionType::Settings,
    ActionType::Back,
];

/// Owner of the toolbar buttons and their layout.
///
/// # Signals
///
/// - [`item_tapped`](Self::item_tapped): a tap was accepted
/// - [`present_menu`](Self::present_menu): an item became selected and its menu should open
/// - [`close_menu`](Self::close_menu): the open menu should close
/// - [`selected_item`](Self::selected_item): the selected tool changed
/// - [`layout_changed`](Self::layout_changed): groups were recomposed (carries the wide flag)
/// - [`submenu_item_selected`](Self::submenu_item_selected): a settings submenu entry was chosen
pub struct ToolbarController {
    items: BTreeMap<ActionType, Arc<ToolbarItemState>>,
    composer: ToolbarComposer,
    wide: Property<bool>,
    selected: Property<Option<ActionType>>,
    orientation_subscription: Mutex<Option<ConnectionGuard<OrientationEvent>>>,

    /// Emitted with the action type of every accepted tap.
    pub item_tapped: Signal<ActionType>,
    /// Emitted when an item becomes selected.
    pub present_menu: Signal<ActionType>,
    /// Emitted when the selected item is deselected.
    pub close_menu: Signal<()>,
    /// Emitted when the selected tool changes.
    pub selected_item: Signal<Option<ToolbarItem>>,
    /// Emitted after each recomposition with the wide-layout flag.
    pub layout_changed: Signal<bool>,
    /// Emitted when an entry of the settings submenu is chosen.
    pub submenu_item_selected: Signal<ToolbarItem>,
}

impl ToolbarController {
    /// Build the toolbar and lay it out for `initial`.
    ///
    /// An unsupported initial orientation lays the toolbar out narrow.
    pub fn new(config: ToolbarConfig, initial: OrientationEvent) -> Self {
        let items = ActionType::all()
            .map(|action| {
                let title = match action {
                    ActionType::TimeRange => Some(config.time_range_title.as_str()),
                    ActionType::Interval => Some(config.interval_title.as_str()),
                    _ => None,
                };
                let state = ToolbarItemState::new(ToolbarItem::for_action(action, title));
                (action, Arc::new(state))
            })
            .collect();

        let composer = ToolbarComposer::new(config.metrics);
        composer.set_exception_item(Some(ActionType::Back));

        let controller = Self {
            items,
            composer,
            wide: Property::new(initial.is_wide()),
            selected: Property::new(None),
            orientation_subscription: Mutex::new(None),
            item_tapped: Signal::new(),
            present_menu: Signal::new(),
            close_menu: Signal::new(),
            selected_item: Signal::new(),
            layout_changed: Signal::new(),
            submenu_item_selected: Signal::new(),
        };
        controller.recompose();
        controller
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The state of the button for `action_type`.
    pub fn item(&self, action_type: ActionType) -> &Arc<ToolbarItemState> {
        // Every action type is inserted by `new`.
        &self.items[&action_type]
    }

    /// All buttons, keyed by action type.
    pub fn items(&self) -> impl Iterator<Item = (ActionType, &Arc<ToolbarItemState>)> {
        self.items.iter().map(|(action, state)| (*action, state))
    }

    /// The group composer.
    pub fn composer(&self) -> &ToolbarComposer {
        &self.composer
    }

    /// Whether the wide layout is active.
    pub fn is_wide(&self) -> bool {
        self.wide.get()
    }

    /// The currently selected tool, if any.
    pub fn selected(&self) -> Option<ActionType> {
        self.selected.get()
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// React to an orientation notification.
    ///
    /// Unsupported orientations are ignored. Every supported event triggers a
    /// full recomposition, even if the layout flag did not change.
    pub fn on_orientation_changed(&self, event: OrientationEvent) {
        if !event.orientation.is_supported() {
            tracing::trace!(
                target: targets::CONTROLLER,
                orientation = ?event.orientation,
                "unsupported orientation, ignoring"
            );
            return;
        }
        self.wide.set_silent(event.is_wide());
        self.recompose();
    }

    /// Subscribe to a host orientation notifier.
    ///
    /// The subscription is held by the controller and released when the
    /// controller is dropped or [`stop_observing_orientation`](Self::stop_observing_orientation)
    /// is called. Subscribing again replaces the previous subscription.
    pub fn observe_orientation(self: &Arc<Self>, notifier: &Arc<Signal<OrientationEvent>>) {
        let weak: Weak<Self> = Arc::downgrade(self);
        let guard = notifier.connect_scoped(move |event| {
            if let Some(controller) = weak.upgrade() {
                controller.on_orientation_changed(*event);
            }
        });
        *self.orientation_subscription.lock() = Some(guard);
    }

    /// Release the orientation subscription, if any.
    pub fn stop_observing_orientation(&self) {
        self.orientation_subscription.lock().take();
    }

    fn recompose(&self) {
        let wide = self.is_wide();
        let right_actions = if wide { WIDE_RIGHT_GROUP } else { NARROW_RIGHT_GROUP };

        // A tool folded out of the bar can no longer be tapped to deselect it.
        if let Some(selected) = self.selected() {
            if !right_actions.contains(&selected) {
                tracing::debug!(
                    target: targets::CONTROLLER,
                    action = %selected,
                    "selected tool leaves the bar, clearing selection"
                );
                self.deselect_tool(selected);
                self.close_menu.emit(());
            }
        }

        let settings = self.item(ActionType::Settings);
        if wide {
            settings.update_item(|item| item.submenu_items.clear());
        } else {
            let folded = vec![
                self.item(ActionType::LineType).item(),
                self.item(ActionType::Indicators).item(),
            ];
            settings.update_item(|item| item.submenu_items = folded);
        }

        let group = |actions: &[ActionType]| -> Vec<Arc<ToolbarItemState>> {
            actions.iter().map(|action| self.item(*action).clone()).collect()
        };
        let left = group(LEFT_GROUP);
        let right = group(right_actions);

        tracing::debug!(target: targets::CONTROLLER, wide, "recomposing toolbar");
        self.composer.set_groups(left, right);

        // Tools unfolded into the bar missed the sibling policy while they were hidden.
        if let Some(selected) = self.selected() {
            self.composer.disable_others_where(selected, ActionType::is_tool);
        }
        self.layout_changed.emit(wide);
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Handle a tap on the button for `action_type`.
    ///
    /// Taps on buttons that are not in the current groups, or that are
    /// disabled, non-interactive or hidden, are ignored.
    pub fn on_item_tapped(&self, action_type: ActionType) {
        let state = self.item(action_type).clone();
        if !self.composer.contains(action_type) {
            tracing::trace!(target: targets::CONTROLLER, action = %action_type, "tap on item outside the bar, ignoring");
            return;
        }
        if !state.accepts_taps() {
            tracing::trace!(target: targets::CONTROLLER, action = %action_type, "tap on inactive item, ignoring");
            return;
        }

        self.item_tapped.emit(action_type);
        let selected = state.tap();

        if action_type.is_tool() {
            if selected {
                self.select_tool(&state);
            } else {
                self.deselect_tool(action_type);
                self.close_menu.emit(());
            }
        } else if action_type != ActionType::Back {
            if selected {
                self.present_menu.emit(action_type);
            } else {
                self.close_menu.emit(());
            }
        }
    }

    fn select_tool(&self, state: &ToolbarItemState) {
        let action_type = state.action_type();
        let item = state.item();
        tracing::debug!(target: targets::CONTROLLER, action = %action_type, "tool selected");

        self.composer.select_item(Some(item.clone()));
        self.composer
            .disable_others_where(action_type, ActionType::is_tool);
        self.selected.set_silent(Some(action_type));
        self.selected_item.emit(Some(item));
        self.present_menu.emit(action_type);
    }

    fn deselect_tool(&self, action_type: ActionType) {
        tracing::debug!(target: targets::CONTROLLER, action = %action_type, "tool deselected");

        self.composer.clear_selection_where(ActionType::is_tool);
        self.composer.enable_where(ActionType::is_tool);
        self.selected.set_silent(None);
        self.selected_item.emit(None);
    }

    // =========================================================================
    // View-model inputs
    // =========================================================================

    /// Clear every selection and re-enable every button.
    pub fn enable_all_items(&self) {
        tracing::debug!(target: targets::CONTROLLER, "enabling all items");
        self.composer.select_item(None);
        self.composer.clear_all_states();
        if self.selected.replace(None).is_some() {
            self.selected_item.emit(None);
        }
    }

    /// Disable every button other than the selected tool.
    ///
    /// Does nothing when no tool is selected.
    pub fn disable_other_items(&self) {
        match self.selected() {
            Some(selected) => self.composer.disable_others(selected),
            None => {
                tracing::trace!(target: targets::CONTROLLER, "no selected item, nothing to disable");
            }
        }
    }

    /// Choose an entry of the settings submenu.
    ///
    /// Ignored unless `action_type` is currently folded under settings.
    pub fn select_submenu_item(&self, action_type: ActionType) {
        let entry = self
            .item(ActionType::Settings)
            .with_item(|settings| settings.submenu_item(action_type).cloned());
        match entry {
            Some(entry) => {
                tracing::debug!(target: targets::CONTROLLER, action = %action_type, "submenu item selected");
                self.submenu_item_selected.emit(entry);
            }
            None => {
                tracing::trace!(target: targets::CONTROLLER, action = %action_type, "not a settings submenu entry, ignoring");
            }
        }
    }

    /// Update the title of a button (time range and interval show titles).
    pub fn set_title(&self, action_type: ActionType, title: impl Into<String>) {
        self.item(action_type).set_title(title);
    }
}

impl Drop for ToolbarController {
    fn drop(&mut self) {
        if self.orientation_subscription.get_mut().take().is_some() {
            tracing::debug!(target: targets::CONTROLLER, "released orientation subscription");
        }
    }
}

impl std::fmt::Debug for ToolbarController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarController")
            .field("wide", &self.is_wide())
            .field("selected", &self.selected())
            .field("composer", &self.composer)
            .finish()
    }
}

static_assertions::assert_impl_all!(ToolbarController: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::{DeviceOrientation, ScreenSize};

    fn landscape() -> ToolbarController {
        ToolbarController::new(ToolbarConfig::default(), OrientationEvent::landscape())
    }

    fn portrait() -> ToolbarController {
        ToolbarController::new(ToolbarConfig::default(), OrientationEvent::portrait())
    }

    #[test]
    fn test_initial_wide_layout() {
        let controller = landscape();
        assert!(controller.is_wide());
        assert_eq!(
            controller.composer().left_actions(),
            vec![ActionType::TimeRange, ActionType::Interval]
        );
        assert_eq!(
            controller.composer().right_actions(),
            vec![
                ActionType::InteractiveTool,
                ActionType::LineType,
                ActionType::Indicators,
                ActionType::Settings,
                ActionType::Back,
            ]
        );
        assert!(controller.item(ActionType::Settings).item().submenu_items.is_empty());
    }

    #[test]
    fn test_initial_narrow_layout() {
        let controller = portrait();
        assert!(!controller.is_wide());
        assert_eq!(
            controller.composer().right_actions(),
            vec![ActionType::InteractiveTool, ActionType::Settings, ActionType::Back]
        );

        let submenu = controller.item(ActionType::Settings).item().submenu_items;
        assert_eq!(
            submenu,
            vec![
                controller.item(ActionType::LineType).item(),
                controller.item(ActionType::Indicators).item(),
            ]
        );
    }

    #[test]
    fn test_titles_from_config() {
        let config = ToolbarConfig {
            time_range_title: "3M".to_string(),
            interval_title: "1D".to_string(),
            ..Default::default()
        };
        let controller = ToolbarController::new(config, OrientationEvent::portrait());
        assert_eq!(controller.item(ActionType::TimeRange).item().title.as_deref(), Some("3M"));
        assert_eq!(controller.item(ActionType::Interval).item().title.as_deref(), Some("1D"));
    }

    #[test]
    fn test_unsupported_orientation_ignored() {
        let controller = portrait();
        controller.on_orientation_changed(OrientationEvent::new(
            DeviceOrientation::LandscapeRight,
            ScreenSize::new(844.0, 390.0),
        ));
        assert!(!controller.is_wide());
        assert_eq!(controller.composer().right_actions().len(), 3);
    }

    #[test]
    fn test_back_tap_does_not_touch_tools() {
        let controller = landscape();
        controller.on_item_tapped(ActionType::Back);

        assert!(controller.item(ActionType::Back).item().is_selected);
        assert_eq!(controller.selected(), None);
        for action in ActionType::all() {
            assert!(controller.item(action).is_enabled());
        }
    }

    #[test]
    fn test_tap_outside_bar_ignored() {
        let controller = portrait();
        controller.on_item_tapped(ActionType::LineType);
        assert!(!controller.item(ActionType::LineType).item().is_selected);
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn test_disable_other_items_without_selection() {
        let controller = landscape();
        controller.disable_other_items();
        for action in ActionType::all() {
            assert!(controller.item(action).is_enabled());
            assert!(controller.item(action).is_interactive());
        }
    }

    #[test]
    fn test_set_title() {
        let controller = landscape();
        controller.set_title(ActionType::Interval, "15m");
        assert_eq!(controller.item(ActionType::Interval).item().title.as_deref(), Some("15m"));
    }
}
