use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::ElectionError;
use crate::model::validate_strengths;

/// How candidates get attached to parties each round.
///
/// One capability with two variants, selected by configuration rather
/// than duplicated pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MembershipPolicy {
    /// Draw each candidate's party independently from the categorical
    /// distribution defined by the current strength vector.
    WeightedCategorical,
    /// Deterministically assign each candidate to the party with the
    /// highest attractiveness score: ideological closeness traded off
    /// against how competitive (near 0.5 strength) the party is.
    AttractivenessBiased {
        /// Scales ideological distance against the competitiveness term.
        distance_weight: f64,
    },
}

impl MembershipPolicy {
    /// Assign a party index to every candidate.
    ///
    /// `anchors` holds the per-party axis positions (already resolved for
    /// the run) and `strengths` the current strength vector; both are
    /// indexed by party.
    pub fn assign(
        &self,
        candidate_positions: &[f64],
        anchors: &[f64],
        strengths: &[f64],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<usize>, ElectionError> {
        match self {
            MembershipPolicy::WeightedCategorical => {
                weighted_categorical(candidate_positions.len(), strengths, rng)
            }
            MembershipPolicy::AttractivenessBiased { distance_weight } => Ok(
                attractiveness_biased(candidate_positions, anchors, strengths, *distance_weight),
            ),
        }
    }
}

fn weighted_categorical(
    n_candidates: usize,
    strengths: &[f64],
    rng: &mut dyn RngCore,
) -> Result<Vec<usize>, ElectionError> {
    use rand::Rng;

    validate_strengths(strengths)?;
    let parties = (0..n_candidates)
        .map(|_| {
            let roll: f64 = rng.random_range(0.0..1.0);
            let mut cumulative = 0.0;
            for (party, &s) in strengths.iter().enumerate() {
                cumulative += s;
                if roll < cumulative {
                    return party;
                }
            }
            strengths.len() - 1
        })
        .collect();
    Ok(parties)
}

/// Score how attractive `party` looks to a candidate at `position`.
///
/// Parties at exactly 0.5 strength zero out the competitiveness penalty,
/// so a perfectly competitive party at zero distance scores infinite and
/// beats every finite competitor. That bias is intended.
fn attractiveness(position: f64, anchor: f64, strength: f64, distance_weight: f64) -> f64 {
    let competitiveness = (0.5 - strength).powi(2);
    1.0 / (distance_weight * (position - anchor).abs() + competitiveness)
}

fn attractiveness_biased(
    candidate_positions: &[f64],
    anchors: &[f64],
    strengths: &[f64],
    distance_weight: f64,
) -> Vec<usize> {
    candidate_positions
        .iter()
        .map(|&position| {
            let mut best_party = 0;
            let mut best_score = f64::NEG_INFINITY;
            for (party, (&anchor, &strength)) in anchors.iter().zip(strengths).enumerate() {
                let score = attractiveness(position, anchor, strength, distance_weight);
                // Strict comparison keeps the lowest party index on ties.
                if score > best_score {
                    best_score = score;
                    best_party = party;
                }
            }
            best_party
        })
        .collect()
}
