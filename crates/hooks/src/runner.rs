//! Process execution seam used by hook dispatch.

use std::{io, process::Command};

use tracing::debug;

/// How hooks reach the operating system's process-creation facility.
///
/// A trait seam so dispatch can be exercised in tests without launching
/// anything.
pub trait Runner: Send + Sync {
    /// Run a command and wait for it; returns the exit code, or -1 when the
    /// process was terminated by a signal.
    fn call(&self, argv: &[String]) -> io::Result<i32>;

    /// Launch a command without waiting for it.
    fn spawn(&self, argv: &[String]) -> io::Result<()>;
}

/// Runner backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn call(&self, argv: &[String]) -> io::Result<i32> {
        let (program, args) = split(argv)?;
        debug!(%program, "running hook command");
        let status = Command::new(program).args(args).status()?;
        Ok(status.code().unwrap_or(-1))
    }

    fn spawn(&self, argv: &[String]) -> io::Result<()> {
        let (program, args) = split(argv)?;
        debug!(%program, "spawning hook command");
        // The child is intentionally detached; the host never reaps it.
        Command::new(program).args(args).spawn().map(|_| ())
    }
}

/// Split argv into program and arguments, rejecting empty vectors.
fn split(argv: &[String]) -> io::Result<(&String, &[String])> {
    argv.split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argv"))
}
