//! Build and validate the plank configuration from the command line.
//!
//! The host performs the same construction at (re)load; this binary surfaces
//! validation diagnostics without restarting the window manager.

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use plank_config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match &cli.log_filter {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = match Config::build_with_theme(&cli.theme) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e.pretty());
            return ExitCode::FAILURE;
        }
    };

    if cli.hooks {
        let script = plank_hooks::autostart_script_path();
        if script.is_file() {
            info!(script = %script.display(), "autostart script found");
        } else {
            warn!(script = %script.display(), "autostart script missing; startup_once will fail");
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&cfg) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize config: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "config ok: {} key bindings, {} mouse bindings, {} groups, {} layouts, {} widgets, {} floating rules",
        cfg.keys().len(),
        cfg.mouse().len(),
        cfg.groups().len(),
        cfg.layouts().len(),
        cfg.screens()[0].top.widgets.len(),
        cfg.floating().rules.len(),
    );
    ExitCode::SUCCESS
}
