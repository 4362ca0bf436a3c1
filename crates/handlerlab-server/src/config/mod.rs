//! Service config loader (strict parsing).
//!
//! The default document is embedded at build time; there is no runtime
//! config file.

pub mod schema;

use handlerlab_core::error::{LabError, Result};

pub use schema::{LabConfig, ListenSection};

/// Config document compiled into the binaries.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../handlerlab.yaml");

pub fn load_default() -> Result<LabConfig> {
    load_from_str(DEFAULT_CONFIG_YAML)
}

pub fn load_from_str(s: &str) -> Result<LabConfig> {
    let cfg: LabConfig = serde_yaml::from_str(s)
        .map_err(|e| LabError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
