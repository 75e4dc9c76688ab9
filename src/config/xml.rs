//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Writes a starter template on explicit request (`--init-config`); a plain
//!   run never creates files outside the plans directory.
//!
//! Unknown XML fields are a hard error so misconfigurations surface early.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::Config;
use super::PLANS_DIR_DEFAULT;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PLAN_SYNC_CONFIG";

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    plans_dir: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    dry_run: Option<bool>,
}

// Map XmlConfig -> Config, trimming string fields and ignoring empties.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(s) = parsed.plans_dir.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.plans_dir = PathBuf::from(trimmed);
        }
    }
    if let Some(s) = parsed.log_level.as_deref()
        && let Ok(level) = s.trim().parse()
    {
        cfg.log_level = level;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg.dry_run = parsed.dry_run.unwrap_or(false);

    cfg
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Effective config before CLI overrides.
/// Precedence: PLAN_SYNC_CONFIG (must exist and parse) > default-path file if
/// present > built-in defaults.
pub fn load_effective_config() -> Result<Config> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(p);
        let cfg = load_config_from_xml_path(&p)
            .with_context(|| format!("load config named by {CONFIG_ENV}"))?;
        debug!(path = %p.display(), "loaded config from {CONFIG_ENV}");
        return Ok(cfg);
    }

    let path = default_config_path()?;
    if path.exists() {
        let cfg = load_config_from_xml_path(&path)?;
        debug!(path = %path.display(), "loaded config from default path");
        return Ok(cfg);
    }

    Ok(Config::default())
}

/// Write a commented template config at `path`. Refuses to follow symlinked
/// ancestors and to clobber an existing file.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Best-effort; creation still succeeds on filesystems that refuse.
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let content = format!(
        "<!--\n  plan_sync configuration (XML)\n\n  Fields:\n    plans_dir  -> directory that receives the generated plan documents\n    log_level  -> quiet | normal | info | debug\n    log_file   -> path to log file (optional; stdout is always used)\n    dry_run    -> true/false; report actions without touching the filesystem\n\n  Notes:\n    - CLI flags override XML values.\n-->\n<config>\n  <plans_dir>{PLANS_DIR_DEFAULT}</plans_dir>\n  <log_level>normal</log_level>\n  <dry_run>false</dry_run>\n</config>\n"
    );

    let mut file = fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .with_context(|| format!("create template config '{}'", path.display()))?;
    file.write_all(content.as_bytes())?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    debug!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if PLAN_SYNC_CONFIG is not set and no file exists
/// yet; returns the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Result<Option<PathBuf>> {
    if env::var_os(CONFIG_ENV).is_some() {
        return Ok(None);
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return Ok(None);
    }

    create_template_config(&cfg_path)?;
    Ok(Some(cfg_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn unknown_fields_are_rejected() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, "<config><plans_dir>x</plans_dir><bogus>1</bogus></config>").unwrap();
        assert!(load_config_from_xml_path(&p).is_err());
    }

    #[test]
    fn empty_fields_fall_back_to_defaults() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, "<config><plans_dir>  </plans_dir><log_level>debug</log_level></config>")
            .unwrap();
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.plans_dir, PathBuf::from(PLANS_DIR_DEFAULT));
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }

    #[test]
    fn template_refuses_to_clobber() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, "<config></config>").unwrap();
        assert!(create_template_config(&p).is_err());
    }
}
