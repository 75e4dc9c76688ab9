//! Core library for `plan_sync`.
//!
//! Regenerates a fixed set of planning documents inside a target directory:
//! first the legacy filenames left behind by earlier catalog generations are
//! deleted, then every document in the built-in catalog is written verbatim.
//! The two phases (`remove_legacy`, `materialize`) take their inputs as plain
//! values so tests can drive them with small synthetic catalogs instead of
//! the real one.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod sync;

mod utils;

pub use catalog::{plan_documents, CATALOG_LEN, LEGACY_FILES};
pub use config::{
    default_config_path, load_config_from_xml_path, path_has_symlink_ancestor,
    Config, LogLevel,
};
pub use errors::PlanSyncError;
pub use sync::{
    materialize, remove_legacy, sync_plans, PlanDocument, RemovalReport, SyncReport, WriteReport,
};
