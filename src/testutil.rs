//! Shared fixtures for unit and integration tests.

use crate::allocate::RoundBallots;
use crate::electorate::{Electorate, VoteTally};
use crate::model::Party;

/// The five-party lineup from the reference scenario.
pub fn five_parties() -> Vec<Party> {
    vec![
        Party::new("Party A", 0.35),
        Party::new("Party B", 0.25),
        Party::new("Party C", 0.20),
        Party::new("Party D", 0.15),
        Party::new("Party E", 0.05),
    ]
}

/// Three parties at equal strength, handy for tie-break fixtures.
pub fn three_equal_parties() -> Vec<Party> {
    let third = 1.0 / 3.0;
    vec![
        Party::with_anchor("Left", 20.0, third),
        Party::with_anchor("Center", 50.0, third),
        Party::with_anchor("Right", 80.0, third),
    ]
}

/// Owns one hand-built round of ballot data and lends it to allocators
/// as [`RoundBallots`].
pub struct BallotFixture {
    pub electorate: Electorate,
    pub assignment: Vec<usize>,
    pub tally: VoteTally,
    pub n_parties: usize,
}

impl BallotFixture {
    /// Fixture where voter `i` voted for `assignment[i]` and candidates
    /// carry the given party memberships. Positions are synthesized on a
    /// unit grid; allocators only read the assignment and memberships.
    pub fn from_assignment(
        assignment: Vec<usize>,
        candidate_parties: Vec<usize>,
        n_parties: usize,
    ) -> Self {
        let n_candidates = candidate_parties.len();
        let electorate = Electorate {
            voter_positions: (0..assignment.len()).map(|i| i as f64).collect(),
            candidate_positions: (0..n_candidates).map(|i| i as f64).collect(),
            candidate_parties,
        };
        let tally =
            VoteTally::from_assignment(&assignment, &electorate.candidate_parties, n_candidates, n_parties);
        Self {
            electorate,
            assignment,
            tally,
            n_parties,
        }
    }

    pub fn ballots(&self) -> RoundBallots<'_> {
        RoundBallots {
            electorate: &self.electorate,
            assignment: &self.assignment,
            tally: &self.tally,
            n_parties: self.n_parties,
        }
    }
}
