//! Loading wrapper configuration from TOML

use decor_records::{DecorError, Result};
use decor_wrap::WrapConfig;
use std::fs;
use std::path::Path;

/// Read and validate the configuration at `path`, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<WrapConfig> {
    let Some(path) = path else {
        return Ok(WrapConfig::default());
    };

    let text = fs::read_to_string(path)?;
    let config = parse_config(&text).map_err(|err| match err {
        DecorError::Config(reason) => DecorError::Config(format!("{}: {}", path.display(), reason)),
        other => other,
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse and validate a TOML document
pub fn parse_config(text: &str) -> Result<WrapConfig> {
    let config: WrapConfig =
        toml::from_str(text).map_err(|err| DecorError::Config(err.to_string()))?;
    config.validate()?;
    Ok(config)
}
