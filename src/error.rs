//! Typed errors for simulation runs.
//!
//! Given a seed the whole computation is deterministic, so every failure
//! here is a configuration or invariant violation — nothing is transient
//! or worth retrying.

/// Errors produced while validating or running a simulation.
///
/// Variants carry the offending round index and electoral-system label
/// where one applies.
#[derive(Debug, thiserror::Error)]
pub enum ElectionError {
    /// A party-strength vector contained negatives or did not sum to ~1.
    #[error("invalid strength distribution: {reason}")]
    InvalidDistribution { reason: String },

    /// A round produced zero total votes, leaving vote shares undefined.
    #[error("empty electorate in round {round}: no votes were cast")]
    EmptyElectorate { round: usize },

    /// An allocator awarded zero total seats when seats were requested.
    #[error("{system} allocation in round {round} produced zero total seats")]
    DegenerateAllocation { system: &'static str, round: usize },

    /// Rejected before any round ran.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}
