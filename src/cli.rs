//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - CLI flags override config-file values.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// CLI wrapper for the plan_sync library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Regenerate the D3D12 backend subplan documents from the built-in catalog"
)]
pub struct Args {
    /// Override the plans directory (normally configured via XML).
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the plans directory")]
    pub plans_dir: Option<PathBuf>,

    /// Dry-run: report actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be deleted and created, but do not modify files"
    )]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the catalog document names in write order, then exit.
    #[arg(long, help = "Print the catalog document names and exit")]
    pub list: bool,

    /// Print where plan_sync will look for the config file (or PLAN_SYNC_CONFIG if set), then exit.
    #[arg(
        long,
        help = "Print the config file location used by plan_sync and exit"
    )]
    pub print_config: bool,

    /// Write a template config file at the default location, then exit.
    #[arg(
        long,
        help = "Write a template config file at the default location and exit"
    )]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.plans_dir {
            cfg.plans_dir = dir.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
