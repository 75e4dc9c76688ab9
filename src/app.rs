//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the plans directory,
//! and runs the delete phase followed by the write phase.

use anyhow::Result;
use tracing::{debug, error, info};

use plan_sync::cli::Args;
use plan_sync::config::xml::CONFIG_ENV;
use plan_sync::config::{default_config_path, ensure_default_config_exists, load_effective_config};
use plan_sync::output as out;
use plan_sync::{catalog, sync_plans, PlanSyncError};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Informational modes run before logging init and touch nothing.
    if args.print_config {
        if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
            out::print_info(&format!(
                "To override, unset {CONFIG_ENV} or set it to another file."
            ));
            return Ok(());
        }
        match default_config_path() {
            Ok(p) => {
                out::print_info(&format!("Default plan_sync config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run with --init-config to create a template.");
                }
            }
            Err(e) => {
                out::print_error(&format!("Could not determine a default config path: {e}"));
            }
        }
        return Ok(());
    }

    if args.init_config {
        match ensure_default_config_exists()? {
            Some(path) => {
                out::print_success(&format!(
                    "A template plan_sync config was written to: {}",
                    path.display()
                ));
                out::print_info("Edit the file to set `plans_dir` and optionally `log_level`, `log_file` and `dry_run`.");
            }
            None => {
                out::print_info(&format!(
                    "Nothing to do: either {CONFIG_ENV} is set or a config file already exists."
                ));
            }
        }
        return Ok(());
    }

    if args.list {
        for doc in catalog::plan_documents() {
            out::print_user(&doc.name);
        }
        return Ok(());
    }

    // Build config (may read XML), then apply CLI overrides (CLI wins).
    let mut cfg = load_effective_config()?;
    args.apply_overrides(&mut cfg);

    // Initialize logging and keep the guard until the run finishes so the
    // file appender flushes.
    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting plan_sync: {:?}", args);

    let result = (|| -> Result<()> {
        cfg.validate()?;

        let docs = catalog::plan_documents();
        let report = sync_plans(&cfg, &catalog::LEGACY_FILES, &docs)?;

        out::print_user("");
        if cfg.dry_run {
            out::print_user(&format!(
                "Total: {} plan documents would be created",
                report.written.count()
            ));
        } else {
            out::print_user(&format!(
                "Total: {} plan documents created",
                report.written.count()
            ));
        }
        info!(
            removed = report.removed.count(),
            written = report.written.count(),
            plans_dir = %cfg.plans_dir.display(),
            "sync completed"
        );
        Ok(())
    })();

    if let Err(e) = &result {
        if let Some(pe) = e.downcast_ref::<PlanSyncError>() {
            let code = pe.exit_code();
            match pe {
                PlanSyncError::TargetInvalid { path, reason } => {
                    error!(code, kind = "target_invalid", path = %path.display(), %reason, "Sync failed")
                }
                PlanSyncError::RemoveFailed { path, .. } => {
                    error!(code, kind = "remove_failed", path = %path.display(), "Sync failed")
                }
                PlanSyncError::WriteFailed { path, .. } => {
                    error!(code, kind = "write_failed", path = %path.display(), "Sync failed")
                }
            }
        } else {
            error!(error = ?e, "Sync failed");
        }
    }

    // Ensure logs are flushed before exit.
    drop(guard);

    result
}
