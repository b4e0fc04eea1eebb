//! Wrapper configuration
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! [gate]
//! secret = "secret"
//! prompt = "Enter secret: "
//! denial_notice = "Nooo...!"
//!
//! [csv]
//! delimiter = ","
//! include_header = false
//! ```

use crate::serialize::CsvOptions;
use decor_records::{DecorError, Result};
use serde::Deserialize;

/// Expected secret used when none is configured
pub const DEFAULT_SECRET: &str = "secret";
/// Prompt shown by interactive credential sources
pub const DEFAULT_PROMPT: &str = "Enter secret: ";
/// Notice emitted when the gate denies a call
pub const DEFAULT_DENIAL_NOTICE: &str = "Nooo...!";

/// Settings for the access gate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Credential that opens the gate
    pub secret: String,
    /// Prompt shown before reading a credential
    pub prompt: String,
    /// Message emitted on denial
    pub denial_notice: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            denial_notice: DEFAULT_DENIAL_NOTICE.to_string(),
        }
    }
}

/// Complete wrapper configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapConfig {
    /// Access gate settings
    pub gate: GateConfig,
    /// CSV serializer settings
    pub csv: CsvOptions,
}

impl WrapConfig {
    /// Reject settings that would produce unusable output.
    ///
    /// A delimiter containing a newline would make the header line and the
    /// data line indistinguishable.
    pub fn validate(&self) -> Result<()> {
        if self.csv.delimiter.contains('\n') {
            return Err(DecorError::Config(
                "csv.delimiter must not contain a newline".to_string(),
            ));
        }
        if self.gate.secret.is_empty() {
            return Err(DecorError::Config("gate.secret must not be empty".to_string()));
        }
        Ok(())
    }
}
