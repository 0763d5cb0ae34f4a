//! Toolbar item descriptors.
//!
//! A [`ToolbarItem`] is a plain value describing one button: what it shows,
//! which role it plays, and whether it is selected. Items are cheap to clone
//! and are replaced wholesale whenever the toolbar refreshes its data.

use std::fmt;

// ============================================================================
// ActionType
// ============================================================================

/// The semantic role of a toolbar button.
///
/// The action type is the identity key of an item: two items with the same
/// action type are the same logical button, whatever their other fields say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    /// Candle interval picker.
    Interval,
    /// Visible time range picker.
    TimeRange,
    /// Crosshair / interactive drawing tool.
    InteractiveTool,
    /// Chart line type picker.
    LineType,
    /// Indicator picker.
    Indicators,
    /// Settings menu.
    Settings,
    /// Leave the chart.
    Back,
}

impl ActionType {
    /// Every action type, in declaration order.
    pub const ALL: [ActionType; 7] = [
        ActionType::Interval,
        ActionType::TimeRange,
        ActionType::InteractiveTool,
        ActionType::LineType,
        ActionType::Indicators,
        ActionType::Settings,
        ActionType::Back,
    ];

    /// Returns all action types as an iterator.
    pub fn all() -> impl Iterator<Item = ActionType> {
        Self::ALL.into_iter()
    }

    /// Whether this action belongs to the mutually exclusive tool group.
    ///
    /// Selecting one tool deselects and disables the other tools.
    pub fn is_tool(self) -> bool {
        matches!(
            self,
            ActionType::InteractiveTool
                | ActionType::LineType
                | ActionType::Indicators
                | ActionType::Settings
        )
    }

    /// A stable lowercase name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Interval => "interval",
            ActionType::TimeRange => "time_range",
            ActionType::InteractiveTool => "interactive_tool",
            ActionType::LineType => "line_type",
            ActionType::Indicators => "indicators",
            ActionType::Settings => "settings",
            ActionType::Back => "back",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ItemStyle
// ============================================================================

/// How a button is drawn.
///
/// The style decides the button width used by the layout (see
/// [`ToolbarMetrics::button_width`](crate::ToolbarMetrics::button_width))
/// and whether the icon or the title is the meaningful field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemStyle {
    /// A single square icon.
    #[default]
    SingleIcon,
    /// An icon followed by a disclosure arrow.
    IconWithArrow,
    /// A text title followed by a disclosure arrow.
    TitleWithArrow,
}

impl ItemStyle {
    /// Whether the button uses the narrow width.
    pub fn is_narrow(self) -> bool {
        matches!(self, ItemStyle::SingleIcon)
    }

    /// Whether the button shows a disclosure arrow.
    pub fn has_arrow(self) -> bool {
        !self.is_narrow()
    }
}

// ============================================================================
// IconName
// ============================================================================

/// Handle to an icon asset. Loading the asset is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Crosshair.
    ChartAim,
    /// Line type.
    ChartAnalysis,
    /// Indicators.
    ChartMarkets,
    /// Settings ("more").
    ChartMore,
    /// Back arrow.
    ChartBack,
}

impl IconName {
    /// The asset name the renderer should look up.
    pub fn asset_name(self) -> &'static str {
        match self {
            IconName::ChartAim => "chartAim",
            IconName::ChartAnalysis => "chartAnalysis",
            IconName::ChartMarkets => "chartMarkets",
            IconName::ChartMore => "chartMore",
            IconName::ChartBack => "chartBack",
        }
    }
}

// ============================================================================
// ToolbarItem
// ============================================================================

/// Descriptor of a single toolbar button.
///
/// `action_type` is the item's identity and does not change over the item's
/// lifetime; every other field may be rewritten freely. `submenu_items` is
/// only populated for the settings item in the narrow layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarItem {
    /// Icon shown by icon styles.
    pub icon: Option<IconName>,
    /// Title shown by [`ItemStyle::TitleWithArrow`].
    pub title: Option<String>,
    /// Semantic role and identity.
    pub action_type: ActionType,
    /// Rendering hint.
    pub style: ItemStyle,
    /// Whether the item is currently selected.
    pub is_selected: bool,
    /// Entries folded under this item.
    pub submenu_items: Vec<ToolbarItem>,
}

impl ToolbarItem {
    /// Create an unselected item with no icon, title, or submenu.
    pub fn new(action_type: ActionType, style: ItemStyle) -> Self {
        Self {
            icon: None,
            title: None,
            action_type,
            style,
            is_selected: false,
            submenu_items: Vec::new(),
        }
    }

    /// Build the canonical descriptor for an action type.
    ///
    /// `title` is only used by the title styles (time range and interval).
    pub fn for_action(action_type: ActionType, title: Option<&str>) -> Self {
        match action_type {
            ActionType::TimeRange | ActionType::Interval => {
                let item = Self::new(action_type, ItemStyle::TitleWithArrow);
                match title {
                    Some(title) => item.with_title(title),
                    None => item,
                }
            }
            ActionType::InteractiveTool => {
                Self::new(action_type, ItemStyle::SingleIcon).with_icon(IconName::ChartAim)
            }
            ActionType::LineType => {
                Self::new(action_type, ItemStyle::IconWithArrow).with_icon(IconName::ChartAnalysis)
            }
            ActionType::Indicators => {
                Self::new(action_type, ItemStyle::IconWithArrow).with_icon(IconName::ChartMarkets)
            }
            ActionType::Settings => {
                Self::new(action_type, ItemStyle::SingleIcon).with_icon(IconName::ChartMore)
            }
            ActionType::Back => {
                Self::new(action_type, ItemStyle::SingleIcon).with_icon(IconName::ChartBack)
            }
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the title using builder pattern.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the selection flag using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    /// Set the submenu entries using builder pattern.
    pub fn with_submenu(mut self, items: Vec<ToolbarItem>) -> Self {
        self.submenu_items = items;
        self
    }

    /// The title, or an empty string when absent.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Whether this item and `other` are the same logical button.
    pub fn same_action(&self, other: &ToolbarItem) -> bool {
        self.action_type == other.action_type
    }

    /// Find a submenu entry by action type.
    pub fn submenu_item(&self, action_type: ActionType) -> Option<&ToolbarItem> {
        self.submenu_items
            .iter()
            .find(|item| item.action_type == action_type)
    }
}
