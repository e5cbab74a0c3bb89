use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::config::SimConfig;
use crate::allocate::{ElectoralSystem, RoundBallots, SeatAllocator};
use crate::electorate::{
    Electorate, MembershipPolicy, VoteTally, assign_votes, sample_positions, strength_adjustment,
};
use crate::error::ElectionError;
use crate::model::{Party, RoundRecord, SimulationOutcome, validate_strengths};

/// Run the round-over-round feedback loop for one electoral system.
///
/// Each round samples a fresh electorate, assigns candidates to parties
/// from the current strength vector, derives votes from weighted spatial
/// proximity, allocates seats under `system`, and replaces the strength
/// vector with each party's seat share. The strength vector is the only
/// state threaded across rounds; it is owned here and written exactly
/// once per round, at round end.
///
/// A fixed `config.seed` makes the whole run bit-reproducible. A failed
/// round aborts the run with the round index in the error — no partial
/// history is returned.
pub fn run_simulation(
    parties: &[Party],
    system: ElectoralSystem,
    config: &SimConfig,
) -> Result<SimulationOutcome, ElectionError> {
    validate(parties, system, config)?;

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let anchors = resolve_anchors(parties, config, &mut rng);
    let mut strength: Vec<f64> = parties.iter().map(|p| p.initial_strength).collect();
    let allocator = system.allocator();
    let mut history = Vec::with_capacity(config.n_rounds);

    for round in 0..config.n_rounds {
        let electorate = Electorate::generate(&config.electorate, &anchors, &strength, &mut rng)?;
        let weights = config
            .electorate
            .strength_weighted_votes
            .then(|| strength_adjustment(&electorate.candidate_parties, &strength));
        let assignment = assign_votes(
            &electorate.voter_positions,
            &electorate.candidate_positions,
            weights.as_deref(),
        );
        let tally = VoteTally::from_assignment(
            &assignment,
            &electorate.candidate_parties,
            config.electorate.n_candidates,
            parties.len(),
        );
        if tally.total_votes() == 0 {
            return Err(ElectionError::EmptyElectorate { round });
        }
        let vote_shares = tally.party_shares();

        let ballots = RoundBallots {
            electorate: &electorate,
            assignment: &assignment,
            tally: &tally,
            n_parties: parties.len(),
        };
        let seats = allocator.allocate(&ballots);
        let seat_total: u32 = seats.iter().sum();
        if seat_total == 0 {
            return Err(ElectionError::DegenerateAllocation {
                system: allocator.name(),
                round,
            });
        }

        strength = seats
            .iter()
            .map(|&s| f64::from(s) / f64::from(seat_total))
            .collect();
        check_strength_invariant(&strength, round)?;

        tracing::debug!(round, system = allocator.name(), ?seats, "round complete");
        history.push(RoundRecord {
            round,
            vote_shares,
            seats,
            strength: strength.clone(),
        });
    }

    tracing::info!(
        system = allocator.name(),
        rounds = config.n_rounds,
        final_strength = ?strength,
        "simulation finished"
    );
    Ok(SimulationOutcome {
        history,
        final_strength: strength,
    })
}

/// Fix each party's axis anchor for the whole run, sampling a position
/// for any party that does not declare its own.
fn resolve_anchors(parties: &[Party], config: &SimConfig, rng: &mut dyn RngCore) -> Vec<f64> {
    let e = &config.electorate;
    parties
        .iter()
        .map(|party| match party.anchor {
            Some(anchor) => anchor,
            None => sample_positions(1, e.ideology_min, e.ideology_max, rng)[0],
        })
        .collect()
}

/// Seat counts divide exactly, so anything beyond float drift in the
/// updated strength vector is a bug, not bad input.
fn check_strength_invariant(strength: &[f64], round: usize) -> Result<(), ElectionError> {
    if let Err(ElectionError::InvalidDistribution { reason }) = validate_strengths(strength) {
        return Err(ElectionError::InvalidDistribution {
            reason: format!("after round {round}: {reason}"),
        });
    }
    Ok(())
}

/// Fail fast on bad configuration, before round 0 touches the rng.
fn validate(
    parties: &[Party],
    system: ElectoralSystem,
    config: &SimConfig,
) -> Result<(), ElectionError> {
    let e = &config.electorate;
    if parties.is_empty() {
        return Err(invalid_config("at least one party is required"));
    }
    if e.n_voters == 0 {
        return Err(invalid_config("n_voters must be positive"));
    }
    if e.n_candidates == 0 {
        return Err(invalid_config("n_candidates must be positive"));
    }
    if !(e.ideology_min < e.ideology_max) {
        return Err(invalid_config(format!(
            "ideology axis [{}, {}) is empty or inverted",
            e.ideology_min, e.ideology_max
        )));
    }
    if system.total_seats() == 0 {
        return Err(invalid_config(format!(
            "{} is configured with zero total seats",
            system.label()
        )));
    }
    if let MembershipPolicy::AttractivenessBiased { distance_weight } = &e.membership {
        if !(*distance_weight >= 0.0) {
            return Err(invalid_config(format!(
                "distance_weight {distance_weight} must be non-negative"
            )));
        }
    }
    let strengths: Vec<f64> = parties.iter().map(|p| p.initial_strength).collect();
    validate_strengths(&strengths)?;
    Ok(())
}

fn invalid_config(reason: impl Into<String>) -> ElectionError {
    ElectionError::InvalidConfiguration {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::electorate::ElectorateConfig;
    use crate::testutil::five_parties;

    fn tiny_config(seed: u64) -> SimConfig {
        SimConfig {
            electorate: ElectorateConfig {
                n_voters: 60,
                n_candidates: 10,
                ..ElectorateConfig::default()
            },
            n_rounds: 3,
            seed: Some(seed),
        }
    }

    #[test]
    fn declared_anchors_are_kept_verbatim() {
        let parties = vec![
            Party::with_anchor("L", 10.0, 0.5),
            Party::with_anchor("R", 90.0, 0.5),
        ];
        let config = tiny_config(4);
        let mut rng = SmallRng::seed_from_u64(4);
        assert_eq!(resolve_anchors(&parties, &config, &mut rng), vec![10.0, 90.0]);
    }

    #[test]
    fn missing_anchors_are_sampled_in_bounds() {
        let parties = vec![Party::new("A", 0.5), Party::new("B", 0.5)];
        let config = tiny_config(4);
        let mut rng = SmallRng::seed_from_u64(4);
        let anchors = resolve_anchors(&parties, &config, &mut rng);
        assert!(anchors.iter().all(|&a| (0.0..100.0).contains(&a)));
    }

    #[test]
    fn zero_rounds_is_a_noop_run() {
        let mut config = tiny_config(1);
        config.n_rounds = 0;
        let outcome = run_simulation(
            &five_parties(),
            ElectoralSystem::Proportional { seats: 20 },
            &config,
        )
        .unwrap();
        assert!(outcome.history.is_empty());
        assert_eq!(
            outcome.final_strength,
            vec![0.35, 0.25, 0.20, 0.15, 0.05],
            "no round ran, so the initial strengths must survive untouched"
        );
    }

    #[test]
    fn strength_invariant_flags_drifted_vectors() {
        let err = check_strength_invariant(&[0.5, 0.4], 2).unwrap_err();
        match err {
            ElectionError::InvalidDistribution { reason } => {
                assert!(reason.contains("after round 2"), "reason was: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
