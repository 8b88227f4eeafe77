//! The immutable top-level configuration and its builder.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::{
    Action, Behavior, Error, FloatingRules, Group, KeyBinding, Layout, MouseBinding, Palette,
    Screen, WidgetDefaults, bar, defaults, groups, keys, layout, theme,
};

/// Host commands whose first argument names a group.
const GROUP_COMMANDS: [&str; 2] = ["group.toscreen", "window.togroup"];

/// Everything the host reads at (re)load, built once and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Ordered key binding table.
    pub(crate) keys: Vec<KeyBinding>,
    /// Mouse bindings for floating-window manipulation.
    pub(crate) mouse: Vec<MouseBinding>,
    /// Virtual desktop groups, in switch order.
    pub(crate) groups: Vec<Group>,
    /// Layout cycle, in `next_layout` order.
    pub(crate) layouts: Vec<Layout>,
    /// Name of the active palette.
    pub(crate) theme: String,
    /// Resolved role-to-color mapping.
    pub(crate) palette: Palette,
    /// Per-monitor bar arrangement.
    pub(crate) screens: Vec<Screen>,
    /// Defaults applied to widgets that do not override them.
    pub(crate) widget_defaults: WidgetDefaults,
    /// Floating-window rule table.
    pub(crate) floating: FloatingRules,
    /// Host behavior toggles.
    pub(crate) behavior: Behavior,
    /// Terminal emulator used by spawn bindings and gauge clicks.
    pub(crate) terminal: String,
}

impl Config {
    /// Build and validate the configuration with the default palette.
    pub fn build() -> Result<Self, Error> {
        Self::build_with_theme(defaults::DEFAULT_PALETTE)
    }

    /// Build and validate the configuration with a named palette.
    pub fn build_with_theme(name: &str) -> Result<Self, Error> {
        let palette = theme::load_palette(name)?;
        let groups = groups::groups();
        let keys = keys::key_bindings(&groups);
        let cfg = Self {
            keys,
            mouse: keys::mouse_bindings(),
            groups,
            layouts: layout::layouts()?,
            theme: name.to_string(),
            palette,
            screens: bar::screens(),
            widget_defaults: WidgetDefaults::default(),
            floating: FloatingRules::standard(),
            behavior: Behavior::default(),
            terminal: defaults::TERMINAL.to_string(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the cross-table invariants the host relies on.
    fn validate(&self) -> Result<(), Error> {
        if self.layouts.is_empty() {
            return Err(Error::NoLayouts);
        }

        for binding in &self.keys {
            if let Action::Host(cmd) = &binding.action
                && GROUP_COMMANDS.contains(&cmd.name.as_str())
                && let Some(label) = cmd.args.first()
                && !self.groups.iter().any(|g| g.name == *label)
            {
                return Err(Error::UnknownGroup {
                    label: label.clone(),
                });
            }
        }

        // Duplicate gestures are legal (the host shadows last-wins) but
        // almost always a mistake worth surfacing.
        let mut seen = HashSet::new();
        for binding in &self.keys {
            let mut mods = binding.mods.clone();
            mods.sort_unstable();
            if !seen.insert((mods, binding.key.clone())) {
                warn!(key = %binding.key, "duplicate key binding; the host keeps the last one");
            }
        }

        Ok(())
    }

    /// Key binding table.
    pub fn keys(&self) -> &[KeyBinding] {
        &self.keys
    }

    /// Mouse binding table.
    pub fn mouse(&self) -> &[MouseBinding] {
        &self.mouse
    }

    /// Group table.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Layout cycle.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Active palette name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Resolved palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Screen list.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Widget defaults.
    pub fn widget_defaults(&self) -> &WidgetDefaults {
        &self.widget_defaults
    }

    /// Floating rule table.
    pub fn floating(&self) -> &FloatingRules {
        &self.floating
    }

    /// Behavior toggles.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Configured terminal emulator.
    pub fn terminal(&self) -> &str {
        &self.terminal
    }
}
