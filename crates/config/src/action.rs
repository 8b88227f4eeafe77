//! Actions a binding or widget click can trigger.
//!
//! Actions form a closed set: either a command implemented by the host
//! runtime, or an external process launch through the host's spawn facility.
//! The host resolves both at dispatch time; nothing runs while the
//! configuration is being built.

use serde::{Deserialize, Serialize};

/// A command implemented by the host runtime, addressed by dotted name
/// (for example `layout.left` or `window.kill`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostCommand {
    /// Dotted command name the host dispatches on.
    pub name: String,
    /// Positional arguments, e.g. a group label for `group.toscreen`.
    #[serde(default)]
    pub args: Vec<String>,
}

impl HostCommand {
    /// A host command with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A host command with a single argument.
    pub fn with_arg(name: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: vec![arg.into()],
        }
    }
}

/// Specification for an external process launch: either a whole command line,
/// or an explicit argv when arguments must not be re-split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpawnSpec {
    /// A command line split on whitespace at spawn time.
    Cmd(String),
    /// An explicit argument vector.
    Argv(Vec<String>),
}

impl SpawnSpec {
    /// The canonical command-line string.
    pub fn command(&self) -> String {
        match self {
            Self::Cmd(c) => c.clone(),
            Self::Argv(v) => v.join(" "),
        }
    }

    /// The argument vector handed to the process-spawn facility.
    pub fn argv(&self) -> Vec<String> {
        match self {
            Self::Cmd(c) => c.split_whitespace().map(str::to_string).collect(),
            Self::Argv(v) => v.clone(),
        }
    }
}

/// Something a gesture can do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Invoke a host command.
    Host(HostCommand),
    /// Launch an external process and do not wait for it.
    Spawn(SpawnSpec),
}

impl Action {
    /// A host command action with no arguments.
    pub fn host(name: impl Into<String>) -> Self {
        Self::Host(HostCommand::new(name))
    }

    /// A host command action with a single argument.
    pub fn host_with_arg(name: impl Into<String>, arg: impl Into<String>) -> Self {
        Self::Host(HostCommand::with_arg(name, arg))
    }

    /// A process spawn action from a command line.
    pub fn spawn(cmd: impl Into<String>) -> Self {
        Self::Spawn(SpawnSpec::Cmd(cmd.into()))
    }
}
