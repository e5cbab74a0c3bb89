/// Assign every voter to the candidate minimizing weighted distance.
///
/// `weights` is an optional per-candidate distance multiplier (see
/// [`strength_adjustment`]); without it plain ideological distance
/// decides. Exact ties go to the lowest candidate index, so the output is
/// fully determined by its inputs. The result has one candidate index per
/// voter, in voter order.
///
/// # Panics
/// Panics if there are voters but no candidates.
pub fn assign_votes(
    voter_positions: &[f64],
    candidate_positions: &[f64],
    weights: Option<&[f64]>,
) -> Vec<usize> {
    assert!(
        !candidate_positions.is_empty() || voter_positions.is_empty(),
        "vote assignment requires at least one candidate"
    );
    voter_positions
        .iter()
        .map(|&voter| {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (candidate, &position) in candidate_positions.iter().enumerate() {
                let mut distance = (voter - position).abs();
                if let Some(w) = weights {
                    distance *= w[candidate];
                }
                // Strict comparison keeps the lowest candidate index on ties.
                if distance < best_distance {
                    best_distance = distance;
                    best = candidate;
                }
            }
            best
        })
        .collect()
}

/// Per-candidate distance multipliers from party strength: the inverse of
/// the candidate's party strength, substituting 1 for zero-strength
/// parties so the division stays defined.
pub fn strength_adjustment(candidate_parties: &[usize], strengths: &[f64]) -> Vec<f64> {
    candidate_parties
        .iter()
        .map(|&party| {
            let s = strengths[party];
            if s > 0.0 { 1.0 / s } else { 1.0 }
        })
        .collect()
}

/// Aggregated votes for one round: raw counts per candidate and summed
/// counts per party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    /// Raw votes per candidate.
    pub candidate_votes: Vec<u64>,
    /// Votes per party, summed over that party's candidates.
    pub party_votes: Vec<u64>,
}

impl VoteTally {
    /// Count the assignment into per-candidate and per-party totals.
    pub fn from_assignment(
        assignment: &[usize],
        candidate_parties: &[usize],
        n_candidates: usize,
        n_parties: usize,
    ) -> Self {
        let mut candidate_votes = vec![0u64; n_candidates];
        let mut party_votes = vec![0u64; n_parties];
        for &candidate in assignment {
            candidate_votes[candidate] += 1;
            party_votes[candidate_parties[candidate]] += 1;
        }
        Self {
            candidate_votes,
            party_votes,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.party_votes.iter().sum()
    }

    /// Each party's share of the total vote.
    ///
    /// With zero total votes every share is 0 rather than NaN. Empty
    /// tallies arise legitimately from district truncation and must not
    /// abort an allocation; a whole *round* with zero votes is rejected
    /// separately by the feedback driver.
    pub fn party_shares(&self) -> Vec<f64> {
        let total = self.total_votes();
        if total == 0 {
            return vec![0.0; self.party_votes.len()];
        }
        self.party_votes
            .iter()
            .map(|&votes| votes as f64 / total as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voter_picks_nearest_candidate() {
        // The reference scenario: one voter at 50 against 10/50/90.
        let assignment = assign_votes(&[50.0], &[10.0, 50.0, 90.0], None);
        assert_eq!(assignment, vec![1]);
    }

    #[test]
    fn every_voter_assigned_exactly_once() {
        let voters = [5.0, 20.0, 80.0, 99.0];
        let assignment = assign_votes(&voters, &[0.0, 50.0, 100.0], None);
        assert_eq!(assignment.len(), voters.len());
    }

    #[test]
    fn exact_tie_goes_to_lowest_candidate_index() {
        // Voter at 50 is exactly 10 away from both candidates.
        let assignment = assign_votes(&[50.0], &[40.0, 60.0], None);
        assert_eq!(assignment, vec![0]);
    }

    #[test]
    fn weights_can_flip_the_choice() {
        // Candidate 1 is nearer, but its distance is doubled while
        // candidate 0's is quartered.
        let assignment = assign_votes(&[50.0], &[30.0, 60.0], Some(&[0.25, 2.0]));
        assert_eq!(assignment, vec![0]);
    }

    #[test]
    fn no_voters_yield_empty_assignment() {
        assert!(assign_votes(&[], &[], None).is_empty());
    }

    #[test]
    fn zero_strength_party_gets_unit_adjustment() {
        let weights = strength_adjustment(&[0, 1], &[0.0, 0.25]);
        assert_eq!(weights, vec![1.0, 4.0]);
    }

    #[test]
    fn tally_counts_candidates_and_parties() {
        // Candidates 0,1 belong to party 0; candidate 2 to party 1.
        let tally = VoteTally::from_assignment(&[0, 1, 1, 2], &[0, 0, 1], 3, 2);
        assert_eq!(tally.candidate_votes, vec![1, 2, 1]);
        assert_eq!(tally.party_votes, vec![3, 1]);
        assert_eq!(tally.total_votes(), 4);
        assert_eq!(tally.party_shares(), vec![0.75, 0.25]);
    }

    #[test]
    fn empty_tally_has_zero_shares() {
        let tally = VoteTally::from_assignment(&[], &[0, 1], 2, 2);
        assert_eq!(tally.total_votes(), 0);
        assert_eq!(tally.party_shares(), vec![0.0, 0.0]);
    }
}
