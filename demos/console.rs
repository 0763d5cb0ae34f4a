//! Chart Toolbar Console Demo
//!
//! Drives a toolbar through a scripted session of taps and rotations and
//! prints the bar after every step, the way a rendering adapter would see it.
//!
//! Run with: cargo run -p chart-toolbar --example console
//!
//! Pass a TOML file path to override the default metrics and titles. Set
//! `RUST_LOG=chart_toolbar=debug` to watch the state transitions.

use std::sync::Arc;

use chart_toolbar::{
    ActionType, ItemContent, ItemPresentation, OrientationEvent, Signal, ToolbarConfig, ToolbarController,
    ToolbarItemState,
};
use chart_toolbar_core::logging::directive_for_all;
use tracing_subscriber::EnvFilter;

enum Step {
    Tap(ActionType),
    Rotate(OrientationEvent),
    Title(ActionType, &'static str),
    EnableAll,
}

impl Step {
    fn describe(&self) -> String {
        match self {
            Step::Tap(action) => format!("tap {action}"),
            Step::Rotate(event) => format!("rotate to {:?}", event.orientation),
            Step::Title(action, title) => format!("retitle {action} as {title:?}"),
            Step::EnableAll => "enable all items".to_string(),
        }
    }
}

fn render_item(state: &ToolbarItemState, controller: &ToolbarController) -> String {
    let metrics = *controller.composer().metrics();
    let presentation = ItemPresentation::of(state, |style| metrics.button_width(style));

    let mut label = match &presentation.content {
        ItemContent::Icon(icon) => icon.map_or("?", |icon| icon.asset_name()).to_string(),
        ItemContent::IconWithArrow(icon) => format!("{} v", icon.map_or("?", |icon| icon.asset_name())),
        ItemContent::TitleWithArrow(title) => format!("{title} v"),
    };
    if !presentation.submenu.is_empty() {
        label.push_str(&format!(" [{}]", presentation.submenu.join(", ")));
    }

    let marker = if presentation.selected {
        '*'
    } else if !presentation.enabled {
        '-'
    } else if !presentation.interactive {
        '~'
    } else {
        ' '
    };
    format!("{marker}{label}")
}

fn render(controller: &ToolbarController) {
    let composer = controller.composer();
    let group = |items: Vec<Arc<ToolbarItemState>>| {
        items
            .iter()
            .filter(|state| !state.is_hidden())
            .map(|state| render_item(state, controller))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    let widths = composer.group_widths();

    println!(
        "  [{}]  ...  [{}]",
        group(composer.left_items()),
        group(composer.right_items())
    );
    println!(
        "  layout: {}, widths: left {:.0} right {:.0}, bar at least {:.0}x{:.0}",
        if controller.is_wide() { "wide" } else { "narrow" },
        widths.left,
        widths.right,
        composer.min_bar_width(),
        composer.bar_height()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive_for_all("info"))),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ToolbarConfig::load(path)?,
        None => ToolbarConfig::default(),
    };

    let orientation = Arc::new(Signal::<OrientationEvent>::new());
    let controller = Arc::new(ToolbarController::new(config, OrientationEvent::portrait()));
    controller.observe_orientation(&orientation);

    controller
        .present_menu
        .connect(|action| println!("  -> present {action} menu"));
    controller.close_menu.connect(|_| println!("  -> close menu"));
    controller
        .submenu_item_selected
        .connect(|item| println!("  -> submenu entry {}", item.action_type));

    println!("Legend: * selected, - disabled, ~ not interactive");
    println!();
    println!("initial");
    render(&controller);

    let script = [
        Step::Tap(ActionType::InteractiveTool),
        Step::Tap(ActionType::Settings),
        Step::Tap(ActionType::InteractiveTool),
        Step::Rotate(OrientationEvent::landscape()),
        Step::Tap(ActionType::LineType),
        Step::Rotate(OrientationEvent::portrait()),
        Step::Title(ActionType::Interval, "1D"),
        Step::Tap(ActionType::Back),
        Step::EnableAll,
    ];

    for step in script {
        println!("{}", step.describe());
        match step {
            Step::Tap(action) => controller.on_item_tapped(action),
            Step::Rotate(event) => orientation.emit(event),
            Step::Title(action, title) => controller.set_title(action, title),
            Step::EnableAll => controller.enable_all_items(),
        }
        render(&controller);
    }

    controller.select_submenu_item(ActionType::Indicators);
    Ok(())
}
