//! Verification parameters — the tunable thresholds of the pipeline.

use serde::{Deserialize, Serialize};

/// Thresholds applied by the authenticity scorer and the cross-validator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationParams {
    /// Minimum number of true authenticity indicators (out of the fixed set
    /// of 6) for a document to be considered genuine. The identifier-pattern
    /// indicator and the negative indicator must hold regardless of score.
    pub min_true_indicators: u32,

    /// Full-name similarity must strictly exceed this value to match.
    /// Similarity is `1 − edit_distance / max_len` over lowercased names.
    pub name_similarity_threshold: f64,
}

impl VerificationParams {
    /// Production defaults: simple majority of indicators, 0.7 name similarity.
    pub fn production_defaults() -> Self {
        Self {
            min_true_indicators: 4,
            name_similarity_threshold: 0.7,
        }
    }
}

impl Default for VerificationParams {
    fn default() -> Self {
        Self::production_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_production_values() {
        let params = VerificationParams::default();
        assert_eq!(params.min_true_indicators, 4);
        assert_eq!(params.name_similarity_threshold, 0.7);
    }

    #[test]
    fn serde_roundtrip() {
        let params = VerificationParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: VerificationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_true_indicators, params.min_true_indicators);
        assert_eq!(
            back.name_similarity_threshold,
            params.name_similarity_threshold
        );
    }
}
