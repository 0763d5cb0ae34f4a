//! Left/right group composition and cross-item policy.
//!
//! [`ToolbarComposer`] owns the ordered left and right button groups of the
//! bar. It applies the sibling policies (select, disable others, clear) and
//! derives the width each group needs from the configured metrics.
//!
//! # Exception item
//!
//! One right-group action type can be registered as the exception item. It is
//! never deselected by the clear-all path, and when its siblings are disabled
//! it is made non-interactive instead, so it keeps its enabled appearance
//! while ignoring taps.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chart_toolbar::{ActionType, ToolbarComposer, ToolbarItem, ToolbarItemState, ToolbarMetrics};
//!
//! let state = |action| Arc::new(ToolbarItemState::new(ToolbarItem::for_action(action, None)));
//! let composer = ToolbarComposer::new(ToolbarMetrics::default());
//! composer.set_exception_item(Some(ActionType::Back));
//! composer.set_groups(
//!     vec![state(ActionType::TimeRange)],
//!     vec![state(ActionType::InteractiveTool), state(ActionType::Back)],
//! );
//!
//! composer.disable_others(ActionType::InteractiveTool);
//! let back = composer.find(ActionType::Back).unwrap();
//! assert!(back.is_enabled());
//! assert!(!back.is_interactive());
//! ```

use std::sync::Arc;

use chart_toolbar_core::logging::targets;
use chart_toolbar_core::{Property, Signal};
use parking_lot::RwLock;

use crate::config::ToolbarMetrics;
use crate::item::{ActionType, ToolbarItem};
use crate::item_state::ToolbarItemState;

/// Widths the layout engine needs for the two groups.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupWidths {
    /// Width of the left group.
    pub left: f32,
    /// Width of the right group.
    pub right: f32,
}

#[derive(Default)]
struct Groups {
    left: Vec<Arc<ToolbarItemState>>,
    right: Vec<Arc<ToolbarItemState>>,
}

/// Coordinator of the left and right button groups.
///
/// Items are shared with their owner (usually the
/// [`ToolbarController`](crate::ToolbarController)); the composer only holds
/// references, and an item may be in neither group.
pub struct ToolbarComposer {
    groups: RwLock<Groups>,
    exception_item: Property<Option<ActionType>>,
    metrics: ToolbarMetrics,

    /// Emitted after every [`set_groups`](Self::set_groups) with the new widths.
    ///
    /// Renderers rebuild their view hierarchy from the new groups here.
    pub groups_changed: Signal<GroupWidths>,
}

impl ToolbarComposer {
    /// Create a composer with empty groups and no exception item.
    pub fn new(metrics: ToolbarMetrics) -> Self {
        Self {
            groups: RwLock::new(Groups::default()),
            exception_item: Property::new(None),
            metrics,
            groups_changed: Signal::new(),
        }
    }

    /// The metrics used for width computation.
    pub fn metrics(&self) -> &ToolbarMetrics {
        &self.metrics
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Replace both groups wholesale.
    pub fn set_groups(&self, left: Vec<Arc<ToolbarItemState>>, right: Vec<Arc<ToolbarItemState>>) {
        {
            let mut groups = self.groups.write();
            groups.left = left;
            groups.right = right;
        }

        let widths = self.group_widths();
        tracing::debug!(
            target: targets::COMPOSER,
            left = ?self.left_actions(),
            right = ?self.right_actions(),
            left_width = widths.left,
            right_width = widths.right,
            "groups replaced"
        );
        self.groups_changed.emit(widths);
    }

    /// The left group, in display order.
    pub fn left_items(&self) -> Vec<Arc<ToolbarItemState>> {
        self.groups.read().left.clone()
    }

    /// The right group, in display order.
    pub fn right_items(&self) -> Vec<Arc<ToolbarItemState>> {
        self.groups.read().right.clone()
    }

    /// Action types of the left group, in display order.
    pub fn left_actions(&self) -> Vec<ActionType> {
        self.groups.read().left.iter().map(|s| s.action_type()).collect()
    }

    /// Action types of the right group, in display order.
    pub fn right_actions(&self) -> Vec<ActionType> {
        self.groups.read().right.iter().map(|s| s.action_type()).collect()
    }

    /// Find the item with `action_type` in either group.
    pub fn find(&self, action_type: ActionType) -> Option<Arc<ToolbarItemState>> {
        let groups = self.groups.read();
        groups
            .left
            .iter()
            .chain(groups.right.iter())
            .find(|state| state.action_type() == action_type)
            .cloned()
    }

    /// Whether either group contains `action_type`.
    pub fn contains(&self, action_type: ActionType) -> bool {
        self.find(action_type).is_some()
    }

    // =========================================================================
    // Exception item
    // =========================================================================

    /// Register the action type exempt from the disable policy.
    pub fn set_exception_item(&self, action_type: Option<ActionType>) {
        self.exception_item.set_silent(action_type);
    }

    /// The registered exception action type.
    pub fn exception_item(&self) -> Option<ActionType> {
        self.exception_item.get()
    }

    fn is_exception(&self, state: &ToolbarItemState) -> bool {
        self.exception_item() == Some(state.action_type())
    }

    // =========================================================================
    // Policies
    // =========================================================================

    /// Apply a selection to the groups.
    ///
    /// With `Some(item)`, the group member sharing `item`'s action type has
    /// its item replaced by `item`; nothing else is touched, and an action
    /// type absent from both groups is ignored. With `None`, every item is
    /// deselected, except the exception item in the right group.
    pub fn select_item(&self, target: Option<ToolbarItem>) {
        match target {
            Some(item) => match self.find(item.action_type) {
                Some(state) => {
                    tracing::debug!(target: targets::COMPOSER, action = %item.action_type, "item selected");
                    state.replace_item(item);
                }
                None => {
                    tracing::trace!(
                        target: targets::COMPOSER,
                        action = %item.action_type,
                        "selected item is not in any group, ignoring"
                    );
                }
            },
            None => self.clear_selection_where(|_| true),
        }
    }

    /// Deselect every item whose action type satisfies `scope`.
    ///
    /// The exception item in the right group is left untouched.
    pub fn clear_selection_where<P>(&self, scope: P)
    where
        P: Fn(ActionType) -> bool,
    {
        tracing::debug!(target: targets::COMPOSER, "clearing selection");
        for state in self.left_items() {
            if scope(state.action_type()) {
                Self::deselect(&state);
            }
        }
        for state in self.right_items() {
            if scope(state.action_type()) && !self.is_exception(&state) {
                Self::deselect(&state);
            }
        }
    }

    fn deselect(state: &ToolbarItemState) {
        state.update_item(|item| item.is_selected = false);
        state.set_selected(false);
    }

    /// Disable every item other than `target`.
    ///
    /// The exception item is made non-interactive instead of disabled. An
    /// action type absent from both groups is ignored.
    pub fn disable_others(&self, target: ActionType) {
        self.disable_others_where(target, |_| true);
    }

    /// Like [`disable_others`](Self::disable_others), limited to the items
    /// whose action type satisfies `scope`.
    pub fn disable_others_where<P>(&self, target: ActionType, scope: P)
    where
        P: Fn(ActionType) -> bool,
    {
        if !self.contains(target) {
            tracing::trace!(target: targets::COMPOSER, action = %target, "target is not in any group, ignoring");
            return;
        }
        tracing::debug!(target: targets::COMPOSER, action = %target, "disabling siblings");

        for state in self.left_items() {
            let action = state.action_type();
            if action != target && scope(action) {
                state.set_enabled(false);
            }
        }
        for state in self.right_items() {
            let action = state.action_type();
            if action == target || !scope(action) {
                continue;
            }
            if self.is_exception(&state) {
                state.set_interactive(false);
            } else {
                state.set_enabled(false);
            }
        }
    }

    /// Re-enable the items whose action type satisfies `scope`.
    ///
    /// The exception item becomes interactive again instead.
    pub fn enable_where<P>(&self, scope: P)
    where
        P: Fn(ActionType) -> bool,
    {
        for state in self.left_items() {
            if scope(state.action_type()) {
                state.set_enabled(true);
            }
        }
        for state in self.right_items() {
            if !scope(state.action_type()) {
                continue;
            }
            if self.is_exception(&state) {
                state.set_interactive(true);
            } else {
                state.set_enabled(true);
            }
        }
    }

    /// Re-enable every item and resynchronize the first right item.
    ///
    /// The exception item becomes interactive again instead of being
    /// re-enabled. Afterwards the first right-group item announces the
    /// selection flag stored on its own item.
    pub fn clear_all_states(&self) {
        tracing::debug!(target: targets::COMPOSER, "clearing item states");
        self.enable_where(|_| true);

        // Reads the first entry supplied to set_groups, not the exception item.
        let first = self.groups.read().right.first().cloned();
        if let Some(first) = first {
            let selected = first.with_item(|item| item.is_selected);
            first.set_selected(selected);
        }
    }

    // =========================================================================
    // Widths
    // =========================================================================

    /// Width of the left group: every item plus the gaps between them.
    pub fn left_group_width(&self) -> f32 {
        let groups = self.groups.read();
        if groups.left.is_empty() {
            return 0.0;
        }
        let buttons: f32 = groups
            .left
            .iter()
            .map(|state| self.metrics.button_width(state.style()))
            .sum();
        buttons + (groups.left.len() - 1) as f32 * self.metrics.item_spacing
    }

    /// Width of the right group: visible items plus one spacing per visible item.
    pub fn right_group_width(&self) -> f32 {
        let groups = self.groups.read();
        let (width, count) = groups
            .right
            .iter()
            .filter(|state| !state.is_hidden())
            .fold((0.0_f32, 0_usize), |(width, count), state| {
                (width + self.metrics.button_width(state.style()), count + 1)
            });
        width + count as f32 * self.metrics.item_spacing
    }

    /// Both group widths.
    pub fn group_widths(&self) -> GroupWidths {
        GroupWidths {
            left: self.left_group_width(),
            right: self.right_group_width(),
        }
    }

    /// Smallest bar width that fits both groups and the padding at either edge.
    pub fn min_bar_width(&self) -> f32 {
        let widths = self.group_widths();
        widths.left + widths.right + 2.0 * self.metrics.edge_padding
    }

    /// Fixed height of the bar.
    pub fn bar_height(&self) -> f32 {
        self.metrics.bar_height
    }
}

impl std::fmt::Debug for ToolbarComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolbarComposer")
            .field("left", &self.left_actions())
            .field("right", &self.right_actions())
            .field("exception_item", &self.exception_item())
            .finish()
    }
}

static_assertions::assert_impl_all!(ToolbarComposer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn state(action: ActionType) -> Arc<ToolbarItemState> {
        Arc::new(ToolbarItemState::new(ToolbarItem::for_action(action, Some("1M"))))
    }

    struct Fixture {
        composer: ToolbarComposer,
        range: Arc<ToolbarItemState>,
        interval: Arc<ToolbarItemState>,
        crosshair: Arc<ToolbarItemState>,
        line: Arc<ToolbarItemState>,
        indicators: Arc<ToolbarItemState>,
        settings: Arc<ToolbarItemState>,
        back: Arc<ToolbarItemState>,
    }

    fn wide_fixture() -> Fixture {
        let f = Fixture {
            composer: ToolbarComposer::new(ToolbarMetrics::default()),
            range: state(ActionType::TimeRange),
            interval: state(ActionType::Interval),
            crosshair: state(ActionType::InteractiveTool),
            line: state(ActionType::LineType),
            indicators: state(ActionType::Indicators),
            settings: state(ActionType::Settings),
            back: state(ActionType::Back),
        };
        f.composer.set_exception_item(Some(ActionType::Back));
        f.composer.set_groups(
            vec![f.range.clone(), f.interval.clone()],
            vec![
                f.crosshair.clone(),
                f.line.clone(),
                f.indicators.clone(),
                f.settings.clone(),
                f.back.clone(),
            ],
        );
        f
    }

    fn all_items(f: &Fixture) -> Vec<ToolbarItem> {
        [&f.range, &f.interval, &f.crosshair, &f.line, &f.indicators, &f.settings, &f.back]
            .iter()
            .map(|s| s.item())
            .collect()
    }

    #[test]
    fn test_right_group_width() {
        let f = wide_fixture();
        let m = ToolbarMetrics::default();
        let expected = 3.0 * m.narrow_button_width + 2.0 * m.wide_button_width + 5.0 * m.item_spacing;
        assert_eq!(f.composer.right_group_width(), expected);
    }

    #[test]
    fn test_left_group_width() {
        let f = wide_fixture();
        let m = ToolbarMetrics::default();
        assert_eq!(f.composer.left_group_width(), 2.0 * m.wide_button_width + m.item_spacing);
    }

    #[test]
    fn test_hidden_items_excluded_from_right_width() {
        let f = wide_fixture();
        let m = ToolbarMetrics::default();
        f.line.set_hidden(true);
        let expected = 3.0 * m.narrow_button_width + m.wide_button_width + 4.0 * m.item_spacing;
        assert_eq!(f.composer.right_group_width(), expected);
    }

    #[test]
    fn test_empty_groups_have_zero_width() {
        let composer = ToolbarComposer::new(ToolbarMetrics::default());
        assert_eq!(composer.group_widths(), GroupWidths::default());
    }

    #[test]
    fn test_bar_extent() {
        let f = wide_fixture();
        let m = ToolbarMetrics::default();
        let widths = f.composer.group_widths();
        assert_eq!(f.composer.min_bar_width(), widths.left + widths.right + 2.0 * m.edge_padding);
        assert_eq!(f.composer.min_bar_width(), 120.0 + 272.0 + 40.0);
        assert_eq!(f.composer.bar_height(), 76.0);

        let custom = ToolbarComposer::new(ToolbarMetrics {
            bar_height: 60.0,
            edge_padding: 12.0,
            ..ToolbarMetrics::default()
        });
        assert_eq!(custom.min_bar_width(), 24.0);
        assert_eq!(custom.bar_height(), 60.0);
    }

    #[test]
    fn test_set_groups_emits_widths() {
        let composer = ToolbarComposer::new(ToolbarMetrics::default());
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        composer.groups_changed.connect(move |w| received_clone.lock().push(*w));

        composer.set_groups(vec![state(ActionType::Interval)], vec![state(ActionType::Back)]);

        assert_eq!(*received.lock(), vec![GroupWidths { left: 56.0, right: 48.0 }]);
    }

    #[test]
    fn test_select_item_replaces_only_target() {
        let f = wide_fixture();
        let before = all_items(&f);

        let selected = f.line.item().with_selected(true);
        f.composer.select_item(Some(selected.clone()));

        assert_eq!(f.line.item(), selected);
        let after = all_items(&f);
        for (b, a) in before.iter().zip(after.iter()) {
            if a.action_type != ActionType::LineType {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_select_absent_item_is_noop() {
        let f = wide_fixture();
        f.composer.set_groups(vec![f.range.clone()], vec![f.back.clone()]);
        let before = all_items(&f);

        f.composer
            .select_item(Some(ToolbarItem::for_action(ActionType::LineType, None).with_selected(true)));
        f.composer.disable_others(ActionType::LineType);

        assert_eq!(all_items(&f), before);
        assert!(f.range.is_enabled());
        assert!(f.back.is_interactive());
    }

    #[test]
    fn test_clear_selection_spares_exception() {
        let f = wide_fixture();
        f.crosshair.tap();
        f.back.tap();
        f.range.tap();

        f.composer.select_item(None);

        assert!(!f.crosshair.item().is_selected);
        assert!(!f.range.item().is_selected);
        assert!(f.back.item().is_selected);
        assert!(f.back.is_selected());
    }

    #[test]
    fn test_disable_others() {
        let f = wide_fixture();
        f.composer.disable_others(ActionType::Indicators);

        assert!(f.indicators.is_enabled());
        for s in [&f.range, &f.interval, &f.crosshair, &f.line, &f.settings] {
            assert!(!s.is_enabled(), "{:?} should be disabled", s.action_type());
        }
        assert!(f.back.is_enabled());
        assert!(!f.back.is_interactive());
    }

    #[test]
    fn test_clear_all_states_restores() {
        let f = wide_fixture();
        f.composer.disable_others(ActionType::Settings);
        f.composer.clear_all_states();

        for s in [&f.range, &f.interval, &f.crosshair, &f.line, &f.indicators, &f.settings, &f.back] {
            assert!(s.is_enabled());
            assert!(s.is_interactive());
        }
    }

    #[test]
    fn test_clear_all_states_resyncs_first_right_item() {
        let f = wide_fixture();
        let announced = Arc::new(Mutex::new(Vec::new()));
        let announced_clone = announced.clone();
        f.crosshair
            .selected_changed
            .connect(move |&v| announced_clone.lock().push(v));

        f.crosshair.update_item(|item| item.is_selected = true);
        f.crosshair.set_selected(false);
        f.composer.clear_all_states();

        assert!(f.crosshair.is_selected());
        assert_eq!(*announced.lock(), vec![false, true]);
        assert!(!f.back.is_selected());
    }

    #[test]
    fn test_scoped_policies_leave_other_items() {
        let f = wide_fixture();
        f.range.tap();

        f.composer.disable_others_where(ActionType::LineType, ActionType::is_tool);
        assert!(f.range.is_enabled());
        assert!(f.back.is_enabled() && f.back.is_interactive());
        assert!(!f.crosshair.is_enabled());

        f.composer.clear_selection_where(ActionType::is_tool);
        f.composer.enable_where(ActionType::is_tool);
        assert!(f.range.item().is_selected);
        assert!(f.crosshair.is_enabled());
    }

    #[test]
    fn test_clear_all_states_is_idempotent() {
        let f = wide_fixture();
        f.crosshair.tap();
        f.composer.disable_others(ActionType::InteractiveTool);

        f.composer.clear_all_states();
        let once: Vec<_> = all_items(&f);
        let flags_once: Vec<_> = f
            .composer
            .right_items()
            .iter()
            .chain(f.composer.left_items().iter())
            .map(|s| (s.is_selected(), s.is_enabled(), s.is_interactive()))
            .collect();

        f.composer.clear_all_states();
        let flags_twice: Vec<_> = f
            .composer
            .right_items()
            .iter()
            .chain(f.composer.left_items().iter())
            .map(|s| (s.is_selected(), s.is_enabled(), s.is_interactive()))
            .collect();

        assert_eq!(all_items(&f), once);
        assert_eq!(flags_twice, flags_once);
    }
}
