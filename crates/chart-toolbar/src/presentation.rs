//! Render-ready snapshots of button state.
//!
//! Rendering adapters dispatch on [`ItemContent`] instead of matching on
//! [`ItemStyle`] and picking optional fields themselves.

use crate::item::{ActionType, IconName, ItemStyle};
use crate::item_state::ToolbarItemState;

/// What a button draws inside its frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemContent {
    /// A bare icon.
    Icon(Option<IconName>),
    /// An icon followed by a disclosure arrow.
    IconWithArrow(Option<IconName>),
    /// A text label followed by a disclosure arrow.
    TitleWithArrow(String),
}

impl ItemContent {
    /// Whether a disclosure arrow is drawn.
    pub fn has_arrow(&self) -> bool {
        !matches!(self, ItemContent::Icon(_))
    }
}

/// Everything a renderer needs to draw one button.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPresentation {
    pub action_type: ActionType,
    pub content: ItemContent,
    /// Width of the button frame.
    pub width: f32,
    pub selected: bool,
    pub enabled: bool,
    pub interactive: bool,
    pub hidden: bool,
    /// Labels of the folded submenu entries, in order.
    pub submenu: Vec<String>,
}

impl ItemPresentation {
    /// Snapshot `state`, sizing the frame with `button_width`.
    pub fn of(state: &ToolbarItemState, button_width: impl Fn(ItemStyle) -> f32) -> Self {
        state.with_item(|item| {
            let content = match item.style {
                ItemStyle::SingleIcon => ItemContent::Icon(item.icon),
                ItemStyle::IconWithArrow => ItemContent::IconWithArrow(item.icon),
                ItemStyle::TitleWithArrow => ItemContent::TitleWithArrow(item.title_or_empty().to_string()),
            };
            let submenu = item
                .submenu_items
                .iter()
                .map(|entry| match &entry.title {
                    Some(title) => title.clone(),
                    None => entry.action_type.to_string(),
                })
                .collect();

            Self {
                action_type: item.action_type,
                content,
                width: button_width(item.style),
                selected: state.is_selected(),
                enabled: state.is_enabled(),
                interactive: state.is_interactive(),
                hidden: state.is_hidden(),
                submenu,
            }
        })
    }
}
