use serde::{Deserialize, Serialize};

use crate::error::ElectionError;

/// Tolerated floating-point drift when checking that a strength vector
/// sums to 1.
pub const STRENGTH_SUM_TOLERANCE: f64 = 1e-6;

/// A political party, the only identity that is stable across rounds.
///
/// Parties are addressed by index everywhere in the engine; the name is
/// presentation only. `anchor` is the party's fixed position on the
/// ideology axis — `None` means a position is sampled once at the start
/// of a run and held fixed thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub anchor: Option<f64>,
    pub initial_strength: f64,
}

impl Party {
    pub fn new(name: impl Into<String>, initial_strength: f64) -> Self {
        Self {
            name: name.into(),
            anchor: None,
            initial_strength,
        }
    }

    pub fn with_anchor(name: impl Into<String>, anchor: f64, initial_strength: f64) -> Self {
        Self {
            name: name.into(),
            anchor: Some(anchor),
            initial_strength,
        }
    }
}

/// Check that `strengths` is a probability vector: every entry finite and
/// non-negative, total within [`STRENGTH_SUM_TOLERANCE`] of 1.
pub fn validate_strengths(strengths: &[f64]) -> Result<(), ElectionError> {
    for (party, &s) in strengths.iter().enumerate() {
        if !s.is_finite() || s < 0.0 {
            return Err(ElectionError::InvalidDistribution {
                reason: format!("party {party} has strength {s}"),
            });
        }
    }
    let total: f64 = strengths.iter().sum();
    if (total - 1.0).abs() > STRENGTH_SUM_TOLERANCE {
        return Err(ElectionError::InvalidDistribution {
            reason: format!("strengths sum to {total}, expected 1"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_distribution_accepted() {
        assert!(validate_strengths(&[0.35, 0.25, 0.20, 0.15, 0.05]).is_ok());
    }

    #[test]
    fn exact_thirds_within_tolerance() {
        let third = 1.0 / 3.0;
        assert!(validate_strengths(&[third, third, third]).is_ok());
    }

    #[test]
    fn negative_strength_rejected() {
        let err = validate_strengths(&[0.6, -0.1, 0.5]).unwrap_err();
        assert!(matches!(err, ElectionError::InvalidDistribution { .. }));
    }

    #[test]
    fn wrong_sum_rejected() {
        let err = validate_strengths(&[0.5, 0.4]).unwrap_err();
        assert!(matches!(err, ElectionError::InvalidDistribution { .. }));
    }

    #[test]
    fn nan_rejected() {
        let err = validate_strengths(&[f64::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, ElectionError::InvalidDistribution { .. }));
    }

    #[test]
    fn empty_vector_rejected() {
        // Sums to 0, not 1.
        assert!(validate_strengths(&[]).is_err());
    }
}
