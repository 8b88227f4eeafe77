//! Error types for configuration construction and validation.

use thiserror::Error;

/// Errors produced while building or validating a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color value could not be parsed as hex or a known color name.
    #[error("invalid color value {value:?}")]
    InvalidColor {
        /// The offending color string.
        value: String,
    },
    /// The requested palette is not in the registry.
    #[error("unknown palette {name:?} (available: {available})")]
    UnknownPalette {
        /// Requested palette name.
        name: String,
        /// Comma-separated list of registered palette names.
        available: String,
    },
    /// A binding references a group label that is not in the group table.
    #[error("binding references unknown group {label:?}")]
    UnknownGroup {
        /// The dangling group label.
        label: String,
    },
    /// The layout table is empty; the host requires at least one layout.
    #[error("layout table is empty")]
    NoLayouts,
}

impl Error {
    /// Render a human-friendly message for host-side diagnostics.
    pub fn pretty(&self) -> String {
        format!("Config validation error\n{}", self)
    }
}
