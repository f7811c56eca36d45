//! Model configuration.

use serde::{Deserialize, Serialize};

/// The default additive smoothing constant (classic Laplace smoothing).
pub const DEFAULT_SMOOTHING_K: u64 = 1;

/// Settings applied when a model is built.
///
/// Deserializes from any serde format, so hosts can embed it in their own
/// configuration files. Missing fields take their defaults.
///
/// ```rust
/// use bayes_prob::ModelConfig;
///
/// let config = ModelConfig::default();
/// assert_eq!(config.smoothing_k, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Additive smoothing constant `k`. Zero gives the unsmoothed estimate.
    pub smoothing_k: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            smoothing_k: DEFAULT_SMOOTHING_K,
        }
    }
}

impl ModelConfig {
    pub fn with_smoothing(smoothing_k: u64) -> Self {
        Self { smoothing_k }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ModelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_explicit_smoothing() {
        let config: ModelConfig = serde_json::from_str(r#"{"smoothing_k": 0}"#).unwrap();
        assert_eq!(config.smoothing_k, 0);
    }

    #[test]
    fn test_negative_smoothing_is_rejected() {
        let result: Result<ModelConfig, _> = serde_json::from_str(r#"{"smoothing_k": -1}"#);
        assert!(result.is_err());
    }
}
