//! Floating-window matching rules.
//!
//! The host evaluates rules per new window, first match wins. The standard
//! set starts with the host's stock rules and appends explicit entries for
//! dialog windows that must not tile.

use serde::{Deserialize, Serialize};

/// Window type reported by the window's properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    /// Transient dialog window.
    Dialog,
    /// Utility palette window.
    Utility,
    /// Splash screen.
    Splash,
    /// Notification popup.
    Notification,
    /// Detached toolbar.
    Toolbar,
}

/// One matching predicate; values compare for exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMatch {
    /// Match on the window class.
    Class(String),
    /// Match on the window title.
    Title(String),
    /// Match on the reported window type.
    Type(WindowType),
}

impl WindowMatch {
    /// A class predicate.
    pub fn class(value: &str) -> Self {
        Self::Class(value.to_string())
    }

    /// A title predicate.
    pub fn title(value: &str) -> Self {
        Self::Title(value.to_string())
    }

    /// Evaluate the predicate against a window's properties.
    fn matches(&self, class: &str, title: &str, win_type: Option<WindowType>) -> bool {
        match self {
            Self::Class(v) => v == class,
            Self::Title(v) => v == title,
            Self::Type(t) => win_type == Some(*t),
        }
    }
}

/// The host's stock floating rules, kept ahead of explicit entries.
pub fn default_float_rules() -> Vec<WindowMatch> {
    vec![
        WindowMatch::Type(WindowType::Utility),
        WindowMatch::Type(WindowType::Notification),
        WindowMatch::Type(WindowType::Toolbar),
        WindowMatch::Type(WindowType::Splash),
        WindowMatch::Type(WindowType::Dialog),
        WindowMatch::class("file_progress"),
        WindowMatch::class("confirm"),
        WindowMatch::class("dialog"),
        WindowMatch::class("download"),
        WindowMatch::class("error"),
    ]
}

/// Ordered floating rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloatingRules {
    /// Predicates in evaluation order.
    pub rules: Vec<WindowMatch>,
}

impl FloatingRules {
    /// Stock rules plus the explicit dialog entries, in that order.
    pub fn standard() -> Self {
        let mut rules = default_float_rules();
        rules.extend([
            // Inspect a client's class and title with `xprop`.
            WindowMatch::class("confirmreset"), // gitk
            WindowMatch::class("makebranch"),   // gitk
            WindowMatch::class("maketag"),      // gitk
            WindowMatch::class("ssh-askpass"),  // ssh-askpass
            WindowMatch::title("branchdialog"), // gitk
            WindowMatch::title("pinentry"),     // GPG key password entry
        ]);
        Self { rules }
    }

    /// First rule matching the window's properties, if any.
    pub fn matches(
        &self,
        class: &str,
        title: &str,
        win_type: Option<WindowType>,
    ) -> Option<&WindowMatch> {
        self.rules
            .iter()
            .find(|r| r.matches(class, title, win_type))
    }
}
