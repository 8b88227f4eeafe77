//! Colors, semantic roles, and the named palette registry.
//!
//! Widgets never hold raw color strings for themeable surfaces; they hold a
//! [`Role`] resolved against the active [`Palette`]. That makes a dangling
//! color reference unrepresentable, and confines color validation to palette
//! construction.

use std::{collections::HashMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{Error, parse_rgb};

/// A validated color value, kept in its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Parse a `#rrggbb` hex string or a named color.
    pub fn parse(value: &str) -> Result<Self, Error> {
        if parse_rgb(value).is_none() {
            return Err(Error::InvalidColor {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The color as originally written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed rgb components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_rgb(&self.0).unwrap_or((255, 255, 255))
    }
}

/// Semantic color role a widget can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Bar and widget background fill.
    Background,
    /// Primary text color.
    Foreground,
    /// Accent color for icons and the focused-group highlight.
    Accent,
    /// De-emphasized text, e.g. unfocused group labels.
    Muted,
    /// Separator line color.
    Separator,
}

/// A role to color mapping, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Bar and widget background fill.
    pub background: Color,
    /// Primary text color.
    pub foreground: Color,
    /// Accent color for icons and highlights.
    pub accent: Color,
    /// De-emphasized text color.
    pub muted: Color,
    /// Separator line color.
    pub separator: Color,
}

impl Palette {
    /// Resolve a role to its color.
    pub fn get(&self, role: Role) -> &Color {
        match role {
            Role::Background => &self.background,
            Role::Foreground => &self.foreground,
            Role::Accent => &self.accent,
            Role::Muted => &self.muted,
            Role::Separator => &self.separator,
        }
    }
}

/// All registered palettes, built once.
fn palettes() -> &'static HashMap<String, Palette> {
    static PALETTES: OnceLock<HashMap<String, Palette>> = OnceLock::new();
    PALETTES.get_or_init(|| {
        fn color(s: &str) -> Color {
            Color::parse(s).unwrap_or_else(|_| panic!("invalid palette color: {}", s))
        }

        let material = Palette {
            background: color("#263238"),
            foreground: color("#f8f8f2"),
            accent: color("#1de5de"),
            muted: color("#78909c"),
            separator: color("#555555"),
        };

        let dracula = Palette {
            background: color("#282a36"),
            foreground: color("#f8f8f2"),
            accent: color("#8be9fd"),
            muted: color("#bbbbbb"),
            separator: color("#555555"),
        };

        let mut map = HashMap::new();
        map.insert("material".to_string(), material);
        map.insert("dracula".to_string(), dracula);
        map
    })
}

/// Look up a palette by name.
pub fn load_palette(name: &str) -> Result<Palette, Error> {
    palettes().get(name).cloned().ok_or_else(|| {
        let mut names = palette_names();
        names.sort_unstable();
        Error::UnknownPalette {
            name: name.to_string(),
            available: names.join(", "),
        }
    })
}

/// Names of all registered palettes, in arbitrary order.
pub fn palette_names() -> Vec<&'static str> {
    palettes().keys().map(String::as_str).collect()
}
