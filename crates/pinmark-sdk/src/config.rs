use std::path::Path;

use pinmark_cid::GatewayConfig;
use pinmark_units::MAX_DECIMALS;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Process-wide settings, passed explicitly to [`crate::Pinmark::new`].
///
/// ```toml
/// strict_proofs = true
/// price_decimals = 18
///
/// [gateway]
/// base_url = "https://ipfs.io"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinmarkConfig {
    /// Reject verification data whose field widths differ from what the
    /// verifier reads.
    pub strict_proofs: bool,
    /// Decimal places used when scaling listing prices.
    pub price_decimals: u32,
    /// Gateway used to render content URLs.
    pub gateway: GatewayConfig,
}

impl Default for PinmarkConfig {
    fn default() -> Self {
        Self {
            strict_proofs: true,
            price_decimals: pinmark_units::ETHER_DECIMALS,
            gateway: GatewayConfig::default(),
        }
    }
}

impl PinmarkConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| SdkError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Check values the type system cannot.
    pub fn validate(&self) -> SdkResult<()> {
        if self.price_decimals > MAX_DECIMALS {
            return Err(SdkError::Config(format!(
                "price_decimals must be at most {MAX_DECIMALS}, got {}",
                self.price_decimals
            )));
        }
        Ok(())
    }
}
