//! Status bar widgets and the bar composition.
//!
//! The factory functions mirror the repeated widget shapes (separators, glyph
//! icons, edge spacers) so the composition in [`widget_row`] stays readable.
//! Gauges declare their own refresh interval; the host owns the timer.

use serde::{Deserialize, Serialize};

use crate::{Action, Role, defaults};

/// Font selection for a text-rendering widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Font {
    /// Font family name.
    pub family: String,
    /// Point size.
    pub size: u16,
}

impl Font {
    /// A font from family and size.
    pub fn new(family: &str, size: u16) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }
}

/// Defaults applied by the host to widgets that do not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetDefaults {
    /// Default widget font.
    pub font: Font,
    /// Default horizontal padding in pixels.
    pub padding: u16,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: Font::new(defaults::BAR_FONT, defaults::BAR_FONT_SIZE),
            padding: defaults::WIDGET_PADDING,
        }
    }
}

/// Length of a spacer widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacerLength {
    /// Fixed length in pixels.
    Fixed(u16),
    /// Expand to fill the remaining bar width.
    Stretch,
}

/// Periodically refreshed system gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeKind {
    /// CPU load.
    Cpu,
    /// Memory usage.
    Memory,
    /// Network throughput.
    Net,
    /// Battery charge.
    Battery,
    /// Audio volume.
    Volume,
}

/// How the group indicator highlights the current group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMethod {
    /// Color the label text.
    Text,
    /// Fill the label background.
    Block,
    /// Underline the label.
    Line,
}

/// One element of the status bar, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// Horizontal gap.
    Spacer {
        /// Fixed or stretch length.
        length: SpacerLength,
        /// Background fill role.
        background: Role,
    },
    /// Thin vertical separator line.
    Sep {
        /// Line height as a percentage of bar height.
        size_percent: u8,
        /// Horizontal margin in pixels.
        margin: u16,
        /// Line width in pixels.
        linewidth: u16,
        /// Line color role.
        foreground: Role,
        /// Background fill role.
        background: Role,
    },
    /// Image loaded from a home-relative path.
    Image {
        /// Path to the image asset.
        path: String,
        /// Margin around the image in pixels.
        margin: u16,
        /// Background fill role.
        background: Role,
        /// Action dispatched on left click.
        on_click: Option<Action>,
    },
    /// Indicator showing all groups and the focused one.
    GroupBox {
        /// Label font.
        font: Font,
        /// Default label color role.
        foreground: Role,
        /// Background fill role.
        background: Role,
        /// Highlight border width in pixels.
        borderwidth: u16,
        /// Highlight rendering method.
        highlight_method: HighlightMethod,
        /// Highlight role for the group shown on this screen.
        current_screen_border: Role,
        /// Label role for groups with windows.
        active: Role,
        /// Label role for empty groups.
        inactive: Role,
    },
    /// Fixed glyph rendered in the icon font.
    Icon {
        /// Icon font.
        font: Font,
        /// Glyph text.
        glyph: String,
        /// Glyph color role.
        foreground: Role,
        /// Background fill role.
        background: Role,
    },
    /// Name of the active layout.
    CurrentLayout {
        /// Text color role.
        foreground: Role,
        /// Background fill role.
        background: Role,
    },
    /// Periodically refreshed system gauge.
    Gauge {
        /// Which quantity the gauge reports.
        kind: GaugeKind,
        /// Host-side format template.
        format: String,
        /// Text color role.
        foreground: Role,
        /// Background fill role.
        background: Role,
        /// Refresh interval in seconds; `None` leaves the host default.
        interval_secs: Option<u64>,
        /// Action dispatched on left click.
        on_click: Option<Action>,
    },
    /// Formatted wall-clock time.
    Clock {
        /// strftime-style format.
        format: String,
        /// Text color role.
        foreground: Role,
        /// Background fill role.
        background: Role,
    },
    /// System tray placeholder.
    Systray {
        /// Background fill role.
        background: Role,
    },
}

impl Widget {
    /// Click action, if the widget has one.
    pub fn on_click(&self) -> Option<&Action> {
        match self {
            Self::Image { on_click, .. } | Self::Gauge { on_click, .. } => on_click.as_ref(),
            _ => None,
        }
    }

    /// Refresh interval in seconds, for widgets that self-refresh.
    pub fn interval_secs(&self) -> Option<u64> {
        match self {
            Self::Gauge { interval_secs, .. } => *interval_secs,
            _ => None,
        }
    }

    /// Whether the widget is a spacer (edge padding or stretch).
    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer { .. })
    }
}

/// Separator between bar sections.
fn sep() -> Widget {
    Widget::Sep {
        size_percent: defaults::SEP_SIZE_PERCENT,
        margin: defaults::SEP_MARGIN,
        linewidth: defaults::SEP_LINEWIDTH,
        foreground: Role::Separator,
        background: Role::Background,
    }
}

/// Glyph icon in the configured icon font.
fn icon(glyph: &str) -> Widget {
    Widget::Icon {
        font: Font::new(defaults::ICON_FONT, defaults::ICON_FONT_SIZE),
        glyph: glyph.to_string(),
        foreground: Role::Accent,
        background: Role::Background,
    }
}

/// Fixed-width padding at the bar edges.
fn edge_spacer() -> Widget {
    Widget::Spacer {
        length: SpacerLength::Fixed(defaults::EDGE_SPACER_LENGTH),
        background: Role::Background,
    }
}

/// Stretch spacer pushing the remaining widgets to the right.
fn stretch_spacer() -> Widget {
    Widget::Spacer {
        length: SpacerLength::Stretch,
        background: Role::Background,
    }
}

/// A gauge widget from its parts.
fn gauge(
    kind: GaugeKind,
    format: &str,
    interval_secs: Option<u64>,
    on_click: Option<Action>,
) -> Widget {
    Widget::Gauge {
        kind,
        format: format.to_string(),
        foreground: Role::Foreground,
        background: Role::Background,
        interval_secs,
        on_click,
    }
}

/// Build the full widget sequence for the top bar.
pub fn widget_row() -> Vec<Widget> {
    let monitor = Action::spawn(format!(
        "{} -e {}",
        defaults::TERMINAL,
        defaults::PROCESS_MONITOR
    ));

    vec![
        // Left side of the bar
        edge_spacer(),
        Widget::Image {
            path: defaults::LAUNCHER_ICON.to_string(),
            margin: defaults::IMAGE_MARGIN,
            background: Role::Background,
            on_click: Some(Action::spawn(defaults::LAUNCHER_DRUN)),
        },
        Widget::GroupBox {
            font: Font::new(defaults::BAR_FONT, defaults::GROUPBOX_FONT_SIZE),
            foreground: Role::Muted,
            background: Role::Background,
            borderwidth: 4,
            highlight_method: HighlightMethod::Text,
            current_screen_border: Role::Accent,
            active: Role::Foreground,
            inactive: Role::Muted,
        },
        sep(),
        icon(defaults::GLYPH_LAYOUT),
        Widget::CurrentLayout {
            foreground: Role::Foreground,
            background: Role::Background,
        },
        sep(),
        stretch_spacer(),
        // Center and right
        sep(),
        icon(defaults::GLYPH_CPU),
        gauge(
            GaugeKind::Cpu,
            defaults::CPU_FORMAT,
            Some(defaults::GAUGE_INTERVAL_SECS),
            Some(monitor.clone()),
        ),
        sep(),
        icon(defaults::GLYPH_MEMORY),
        gauge(
            GaugeKind::Memory,
            defaults::MEMORY_FORMAT,
            Some(defaults::GAUGE_INTERVAL_SECS),
            Some(monitor),
        ),
        sep(),
        icon(defaults::GLYPH_NET),
        gauge(
            GaugeKind::Net,
            defaults::NET_FORMAT,
            Some(defaults::GAUGE_INTERVAL_SECS),
            Some(Action::spawn(defaults::NETWORK_MENU)),
        ),
        sep(),
        icon(defaults::GLYPH_BATTERY),
        gauge(GaugeKind::Battery, defaults::BATTERY_FORMAT, None, None),
        sep(),
        icon(defaults::GLYPH_VOLUME),
        gauge(GaugeKind::Volume, defaults::VOLUME_FORMAT, None, None),
        sep(),
        icon(defaults::GLYPH_DATE),
        Widget::Clock {
            format: defaults::DATE_FORMAT.to_string(),
            foreground: Role::Foreground,
            background: Role::Background,
        },
        icon(defaults::GLYPH_TIME),
        Widget::Clock {
            format: defaults::TIME_FORMAT.to_string(),
            foreground: Role::Foreground,
            background: Role::Background,
        },
        Widget::Systray {
            background: Role::Background,
        },
        edge_spacer(),
    ]
}
