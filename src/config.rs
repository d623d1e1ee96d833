// ============================================================================
// Codec Configuration
// Policy for accepting decimal input
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls what `parse_with` accepts besides plain digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    /// Skip ASCII whitespace before and after the number
    pub trim_whitespace: bool,

    /// Accept a leading `+`
    pub allow_plus_sign: bool,

    /// Optional: Maximum number of significant digits (leading zeros excluded)
    /// None means unlimited
    pub max_digits: Option<usize>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            allow_plus_sign: true,
            max_digits: None,
        }
    }
}

impl CodecConfig {
    /// Only `-?[0-9]+` is accepted
    pub fn strict() -> Self {
        Self {
            trim_whitespace: false,
            allow_plus_sign: false,
            max_digits: None,
        }
    }

    /// Builder method: Set whitespace trimming
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Builder method: Set `+` acceptance
    pub fn with_plus_sign(mut self, allow: bool) -> Self {
        self.allow_plus_sign = allow;
        self
    }

    /// Builder method: Set significant digit limit
    pub fn with_max_digits(mut self, limit: usize) -> Self {
        self.max_digits = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_digits == Some(0) {
            return Err(NumericError::InvalidConfig);
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields take their `Default` values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> NumericResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::debug!(%err, "rejected codec configuration");
            NumericError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }
}
