//! Key and mouse binding tables.
//!
//! The tables are ordered; the host registers entries in order and resolves
//! duplicate gestures last-wins. Per-group bindings are generated from the
//! group table so labels always line up with the groups they address.

use serde::{Deserialize, Serialize};

use crate::{Action, Group, HostCommand, defaults};

/// Keyboard modifier understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Shift key.
    Shift,
    /// Control key.
    Control,
    /// Alt key.
    Mod1,
    /// Super/logo key.
    Mod4,
}

/// Mouse button understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left button.
    Button1,
    /// Middle button.
    Button2,
    /// Right button.
    Button3,
}

/// One key gesture bound to one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyBinding {
    /// Modifier set held for the gesture.
    pub mods: Vec<Modifier>,
    /// Key name as the host understands it (e.g. `h`, `space`, `Return`).
    pub key: String,
    /// What the gesture does.
    pub action: Action,
    /// Human-readable description shown in host help surfaces.
    pub desc: String,
}

impl KeyBinding {
    /// A binding from its parts.
    pub fn new(mods: &[Modifier], key: &str, action: Action, desc: &str) -> Self {
        Self {
            mods: mods.to_vec(),
            key: key.to_string(),
            action,
            desc: desc.to_string(),
        }
    }
}

/// One mouse gesture for manipulating floating windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseBinding {
    /// Press-and-move gesture; `start` queries the value the drag updates.
    Drag {
        /// Modifier set held for the gesture.
        mods: Vec<Modifier>,
        /// Button that starts the drag.
        button: MouseButton,
        /// Host command applied while dragging.
        action: HostCommand,
        /// Host command queried once when the drag starts.
        start: HostCommand,
    },
    /// Single-click gesture.
    Click {
        /// Modifier set held for the gesture.
        mods: Vec<Modifier>,
        /// Button that triggers the action.
        button: MouseButton,
        /// Host command invoked on click.
        action: HostCommand,
    },
}

/// Build the ordered key binding table: the fixed entries followed by two
/// generated bindings per group (switch-to, move-window-and-follow).
pub fn key_bindings(groups: &[Group]) -> Vec<KeyBinding> {
    let m = defaults::MOD;
    let ms = [defaults::MOD, Modifier::Shift];
    let mc = [defaults::MOD, Modifier::Control];

    let mut keys = vec![
        // Switch between windows
        KeyBinding::new(&[m], "h", Action::host("layout.left"), "Move focus to left"),
        KeyBinding::new(&[m], "l", Action::host("layout.right"), "Move focus to right"),
        KeyBinding::new(&[m], "j", Action::host("layout.down"), "Move focus down"),
        KeyBinding::new(&[m], "k", Action::host("layout.up"), "Move focus up"),
        KeyBinding::new(
            &[m],
            "space",
            Action::host("layout.next"),
            "Move window focus to other window",
        ),
        // Move windows between left/right columns or up/down in the stack.
        // Moving out of range in the columns layout creates a new column.
        KeyBinding::new(
            &ms,
            "h",
            Action::host("layout.shuffle_left"),
            "Move window to the left",
        ),
        KeyBinding::new(
            &ms,
            "l",
            Action::host("layout.shuffle_right"),
            "Move window to the right",
        ),
        KeyBinding::new(&ms, "j", Action::host("layout.shuffle_down"), "Move window down"),
        KeyBinding::new(&ms, "k", Action::host("layout.shuffle_up"), "Move window up"),
        // Grow windows. Growing toward a screen edge shrinks the window instead.
        KeyBinding::new(
            &mc,
            "h",
            Action::host("layout.grow_left"),
            "Grow window to the left",
        ),
        KeyBinding::new(
            &mc,
            "l",
            Action::host("layout.grow_right"),
            "Grow window to the right",
        ),
        KeyBinding::new(&mc, "j", Action::host("layout.grow_down"), "Grow window down"),
        KeyBinding::new(&mc, "k", Action::host("layout.grow_up"), "Grow window up"),
        KeyBinding::new(
            &[m],
            "n",
            Action::host("layout.normalize"),
            "Reset all window sizes",
        ),
        KeyBinding::new(&ms, "Return", Action::spawn(defaults::TERMINAL), "Launch terminal"),
        KeyBinding::new(&ms, "f", Action::spawn(defaults::BROWSER), "Launch Web Browser"),
        KeyBinding::new(
            &[m],
            "Return",
            Action::spawn(defaults::FILE_MANAGER),
            "Launch file manager",
        ),
        KeyBinding::new(
            &[m],
            "Tab",
            Action::host("next_layout"),
            "Toggle between layouts",
        ),
        KeyBinding::new(&ms, "c", Action::host("window.kill"), "Kill focused window"),
        KeyBinding::new(&ms, "r", Action::host("reload_config"), "Reload the config"),
        KeyBinding::new(&ms, "q", Action::host("shutdown"), "Shut down the window manager"),
        KeyBinding::new(
            &[m],
            "r",
            Action::spawn(defaults::LAUNCHER_RUN),
            "Run a command using rofi",
        ),
        KeyBinding::new(
            &[m],
            "p",
            Action::spawn(defaults::LAUNCHER_DRUN),
            "Open an application using rofi",
        ),
    ];

    for group in groups {
        keys.push(KeyBinding::new(
            &[m],
            &group.name,
            Action::host_with_arg("group.toscreen", &group.name),
            &format!("Switch to group {}", group.name),
        ));
        keys.push(KeyBinding::new(
            &ms,
            &group.name,
            Action::host_with_arg("window.togroup", &group.name),
            &format!("Switch to & move focused window to group {}", group.name),
        ));
    }

    keys
}

/// Build the mouse binding table for dragging and raising floating windows.
pub fn mouse_bindings() -> Vec<MouseBinding> {
    let m = defaults::MOD;
    vec![
        MouseBinding::Drag {
            mods: vec![m],
            button: MouseButton::Button1,
            action: HostCommand::new("window.set_position_floating"),
            start: HostCommand::new("window.get_position"),
        },
        MouseBinding::Drag {
            mods: vec![m],
            button: MouseButton::Button3,
            action: HostCommand::new("window.set_size_floating"),
            start: HostCommand::new("window.get_size"),
        },
        MouseBinding::Click {
            mods: vec![m],
            button: MouseButton::Button2,
            action: HostCommand::new("window.bring_to_front"),
        },
    ]
}
