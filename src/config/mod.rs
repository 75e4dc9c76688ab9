//! Configuration: types, default paths, XML loading and validation.

pub mod paths;
pub mod types;
pub mod validate;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{
    create_template_config, ensure_default_config_exists, load_config_from_xml_path,
    load_effective_config,
};

/// Directory that receives the generated documents when nothing else is
/// configured, relative to the working directory.
pub const PLANS_DIR_DEFAULT: &str = "plans/d3d12-backend";
