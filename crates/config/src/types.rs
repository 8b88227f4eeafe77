//! Shared small types and host behavior toggles.

use serde::{Deserialize, Serialize};

/// Focus policy when a window requests activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ActivationFocus {
    /// Focus only when the window is on the visible group.
    #[default]
    Smart,
    /// Mark the window urgent instead of focusing it.
    Urgent,
    /// Always focus the window.
    Focus,
    /// Ignore activation requests.
    Never,
}

/// Host behavior toggles read once at load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Behavior {
    /// Focus follows the mouse pointer.
    pub follow_mouse_focus: bool,
    /// Raise floating windows on plain click.
    pub bring_front_click: bool,
    /// Move the pointer to the focused window.
    pub cursor_warp: bool,
    /// Honor fullscreen requests from clients.
    pub auto_fullscreen: bool,
    /// Focus policy for activation requests.
    pub focus_on_window_activation: ActivationFocus,
    /// Re-evaluate screen configuration when displays change.
    pub reconfigure_screens: bool,
    /// Honor clients that minimize themselves on focus loss.
    pub auto_minimize: bool,
    /// WM name advertised to clients. Some Java toolkits misrender under
    /// unknown window managers, so a whitelisted name is reported.
    pub wmname: String,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: ActivationFocus::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".to_string(),
        }
    }
}
