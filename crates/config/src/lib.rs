//! Declarative configuration model for the plank window manager.
//!
//! The host runtime loads one immutable [`Config`] per (re)load and owns all
//! event dispatch afterwards. This crate only builds and validates the tables
//! the host reads: bindings, groups, layouts, the bar, floating rules, and
//! behavior toggles.
#![warn(unsafe_op_in_unsafe_fn)]

mod action;
mod bar;
mod config;
mod defaults;
mod error;
mod groups;
mod keys;
mod layout;
mod rules;
mod theme;
mod types;
mod widgets;

#[cfg(test)]
mod test_build;
#[cfg(test)]
mod test_widgets;

pub use action::{Action, HostCommand, SpawnSpec};
pub use bar::{Bar, Screen, screens};
pub use config::Config;
pub use error::Error;
pub use groups::{Group, groups};
pub use keys::{KeyBinding, Modifier, MouseBinding, MouseButton, key_bindings, mouse_bindings};
pub use layout::{Layout, LayoutKind, LayoutStyle, layouts};
pub use rules::{FloatingRules, WindowMatch, WindowType, default_float_rules};
pub use theme::{Color, Palette, Role, load_palette, palette_names};
pub use types::{ActivationFocus, Behavior};
pub use widgets::{Font, GaugeKind, HighlightMethod, SpacerLength, Widget, WidgetDefaults, widget_row};

/// Parse color into raw rgb tuple.
pub(crate) fn parse_rgb(s: &str) -> Option<(u8, u8, u8)> {
    colornames::Color::try_from(s).ok().map(|c| c.rgb())
}
