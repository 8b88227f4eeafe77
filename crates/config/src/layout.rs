//! Tiling layout table.
//!
//! Order matters: `next_layout` cycles through the table in declaration
//! order.

use serde::{Deserialize, Serialize};

use crate::{Color, Error, defaults};

/// Tiling strategy implemented by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Master window on the left, stack on the right.
    MonadTall,
    /// Windows arranged in resizable columns.
    Columns,
    /// Single maximized window.
    Max,
}

/// Border and spacing parameters applied to a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutStyle {
    /// Border color of the focused window.
    pub border_focus: Color,
    /// Border color of unfocused windows.
    pub border_normal: Color,
    /// Border width in pixels.
    pub border_width: u16,
    /// Gap between windows in pixels.
    pub margin: u16,
}

impl LayoutStyle {
    /// The border style shared by the tiled layouts.
    pub fn standard() -> Result<Self, Error> {
        Ok(Self {
            border_focus: Color::parse(defaults::BORDER_FOCUS)?,
            border_normal: Color::parse(defaults::BORDER_NORMAL)?,
            border_width: defaults::BORDER_WIDTH,
            margin: defaults::LAYOUT_MARGIN,
        })
    }
}

/// One selectable layout with optional styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// Tiling strategy.
    pub kind: LayoutKind,
    /// Style parameters; `None` leaves the host defaults in place.
    pub style: Option<LayoutStyle>,
}

/// Build the ordered layout cycle.
pub fn layouts() -> Result<Vec<Layout>, Error> {
    let style = LayoutStyle::standard()?;
    Ok(vec![
        Layout {
            kind: LayoutKind::MonadTall,
            style: Some(style.clone()),
        },
        Layout {
            kind: LayoutKind::Columns,
            style: Some(style),
        },
        Layout {
            kind: LayoutKind::Max,
            style: None,
        },
    ])
}
