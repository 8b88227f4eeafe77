//! Bar geometry and screen assembly.

use serde::{Deserialize, Serialize};

use crate::{Widget, defaults, widgets};

/// The top status bar: an ordered widget sequence plus geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bar {
    /// Widgets, left to right.
    pub widgets: Vec<Widget>,
    /// Bar height in pixels.
    pub height: u16,
    /// Window opacity in the range [0.0, 1.0]. `1.0` is fully opaque.
    pub opacity: f32,
    /// Outer margins in pixels: top, right, bottom, left.
    pub margin: [u16; 4],
}

/// One monitor's bar arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Screen {
    /// Bar docked at the top edge.
    pub top: Bar,
}

/// Build the screen list. A single screen is declared; the host reuses it
/// for additional monitors.
pub fn screens() -> Vec<Screen> {
    vec![Screen {
        top: Bar {
            widgets: widgets::widget_row(),
            height: defaults::BAR_HEIGHT,
            opacity: defaults::BAR_OPACITY,
            margin: defaults::BAR_MARGIN,
        },
    }]
}
