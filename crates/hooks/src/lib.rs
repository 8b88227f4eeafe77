//! Startup hook registration and dispatch.
//!
//! The host emits two lifecycle events: `startup_once` fires the first time
//! the process starts, `startup` fires on every start including config
//! reloads. Hook state is a single one-way transition: once the autostart
//! script has run, repeated `startup_once` events are ignored for the rest of
//! the process lifetime.
#![warn(unsafe_op_in_unsafe_fn)]

use std::{
    env, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

use plank_config::SpawnSpec;
use tracing::warn;

mod runner;

#[cfg(test)]
mod test_hooks;

pub use runner::{ProcessRunner, Runner};

/// External tool that resets the root cursor after a (re)start.
const CURSOR_TOOL: [&str; 3] = ["xsetroot", "-cursor_name", "left_ptr"];

/// Host lifecycle events a hook can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// First start of the host process; never re-emitted on reload.
    StartupOnce,
    /// Every start, including config reloads.
    Startup,
}

/// Path of the user autostart script (`~/.config/plank/scripts/autostart.sh`).
pub fn autostart_script_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".config");
    p.push("plank");
    p.push("scripts");
    p.push("autostart.sh");
    p
}

/// The two startup hooks and their once-per-process guard.
#[derive(Debug)]
pub struct StartupHooks {
    /// Synchronous autostart invocation for the first start.
    autostart: SpawnSpec,
    /// Fire-and-forget cursor reset for every start.
    cursor_tool: SpawnSpec,
    /// Set after the autostart script has been invoked.
    once_fired: AtomicBool,
}

impl StartupHooks {
    /// Hooks with the autostart script resolved under the user's home.
    pub fn new() -> Self {
        Self::with_autostart(autostart_script_path())
    }

    /// Hooks with an explicit autostart script path.
    pub fn with_autostart(script: PathBuf) -> Self {
        Self {
            autostart: SpawnSpec::Argv(vec![script.to_string_lossy().into_owned()]),
            cursor_tool: SpawnSpec::Argv(CURSOR_TOOL.iter().map(|s| s.to_string()).collect()),
            once_fired: AtomicBool::new(false),
        }
    }

    /// Dispatch a lifecycle event.
    ///
    /// `StartupOnce` runs the autostart script synchronously, at most once
    /// per process; a nonzero exit is logged, not an error. `Startup`
    /// launches the cursor tool without waiting; spawn failures are logged
    /// and swallowed, matching the host's own handling of detached spawns.
    pub fn dispatch(&self, event: LifecycleEvent, runner: &dyn Runner) -> io::Result<()> {
        match event {
            LifecycleEvent::StartupOnce => {
                if self.once_fired.swap(true, Ordering::SeqCst) {
                    return Ok(());
                }
                let status = runner.call(&self.autostart.argv())?;
                if status != 0 {
                    warn!(status, script = %self.autostart.command(), "autostart script exited nonzero");
                }
                Ok(())
            }
            LifecycleEvent::Startup => {
                if let Err(e) = runner.spawn(&self.cursor_tool.argv()) {
                    warn!(error = %e, tool = %self.cursor_tool.command(), "cursor tool failed to spawn");
                }
                Ok(())
            }
        }
    }
}

impl Default for StartupHooks {
    fn default() -> Self {
        Self::new()
    }
}
