//! Command-line interface definitions for plank-check.

use clap::Parser;

/// Command-line interface for the `plank-check` binary.
#[derive(Parser, Debug)]
#[command(
    name = "plank-check",
    about = "Build and validate the plank configuration",
    version
)]
pub struct Cli {
    /// Palette to build the configuration with.
    #[arg(long, default_value = "material", value_name = "NAME")]
    pub theme: String,

    /// Print the resolved configuration as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also check that the autostart script exists on disk.
    #[arg(long)]
    pub hooks: bool,

    /// Explicit tracing filter directive (overrides RUST_LOG).
    #[arg(long, value_name = "SPEC")]
    pub log_filter: Option<String>,
}
