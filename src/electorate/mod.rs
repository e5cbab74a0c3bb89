pub mod membership;
pub mod sample;
pub mod voting;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::ElectionError;

pub use membership::MembershipPolicy;
pub use sample::sample_positions;
pub use voting::{VoteTally, assign_votes, strength_adjustment};

/// Configuration for generating each round's electorate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectorateConfig {
    /// Number of voters sampled each round.
    pub n_voters: usize,
    /// Number of candidates sampled each round.
    pub n_candidates: usize,
    /// Lower bound of the ideology axis.
    pub ideology_min: f64,
    /// Upper bound of the ideology axis (exclusive when sampling).
    pub ideology_max: f64,
    /// How candidates are attached to parties.
    pub membership: MembershipPolicy,
    /// Weight voter distances by the inverse of each candidate's party
    /// strength, so strong parties pull in farther voters.
    pub strength_weighted_votes: bool,
}

impl Default for ElectorateConfig {
    fn default() -> Self {
        Self {
            n_voters: 500,
            n_candidates: 40,
            ideology_min: 0.0,
            ideology_max: 100.0,
            membership: MembershipPolicy::WeightedCategorical,
            strength_weighted_votes: true,
        }
    }
}

/// One round's ephemeral electorate: voter and candidate positions plus
/// each candidate's party, regenerated from scratch every round.
///
/// Voters and candidates carry no identity across rounds; only parties
/// (by index) persist.
#[derive(Debug, Clone, PartialEq)]
pub struct Electorate {
    pub voter_positions: Vec<f64>,
    pub candidate_positions: Vec<f64>,
    /// Party index per candidate.
    pub candidate_parties: Vec<usize>,
}

impl Electorate {
    /// Sample a fresh electorate and attach candidates to parties under
    /// the configured membership policy and current strength vector.
    pub fn generate(
        config: &ElectorateConfig,
        anchors: &[f64],
        strengths: &[f64],
        rng: &mut dyn RngCore,
    ) -> Result<Self, ElectionError> {
        let voter_positions =
            sample_positions(config.n_voters, config.ideology_min, config.ideology_max, rng);
        let candidate_positions = sample_positions(
            config.n_candidates,
            config.ideology_min,
            config.ideology_max,
            rng,
        );
        let candidate_parties =
            config
                .membership
                .assign(&candidate_positions, anchors, strengths, rng)?;
        Ok(Self {
            voter_positions,
            candidate_positions,
            candidate_parties,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn generated_electorate_has_configured_sizes() {
        let config = ElectorateConfig {
            n_voters: 30,
            n_candidates: 8,
            ..ElectorateConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let electorate = Electorate::generate(&config, &[25.0, 75.0], &[0.5, 0.5], &mut rng)
            .unwrap();
        assert_eq!(electorate.voter_positions.len(), 30);
        assert_eq!(electorate.candidate_positions.len(), 8);
        assert_eq!(electorate.candidate_parties.len(), 8);
        assert!(electorate.candidate_parties.iter().all(|&p| p < 2));
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let config = ElectorateConfig::default();
        let strengths = [0.35, 0.25, 0.20, 0.15, 0.05];
        let anchors = [10.0, 30.0, 50.0, 70.0, 90.0];
        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        let a = Electorate::generate(&config, &anchors, &strengths, &mut rng1).unwrap();
        let b = Electorate::generate(&config, &anchors, &strengths, &mut rng2).unwrap();
        assert_eq!(a, b);
    }
}
