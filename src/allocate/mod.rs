pub mod dhondt;
pub mod district;
pub mod mixed;

use serde::{Deserialize, Serialize};

use crate::electorate::{Electorate, VoteTally};

pub use dhondt::{DHondtAllocator, d_hondt};
pub use district::DistrictAllocator;
pub use mixed::MixedAllocator;

/// One round's ballot data, bundled for the allocators.
///
/// Bundled so allocator signatures stay stable if more per-round data is
/// added later.
pub struct RoundBallots<'a> {
    pub electorate: &'a Electorate,
    /// Candidate index each voter voted for, in voter order.
    pub assignment: &'a [usize],
    pub tally: &'a VoteTally,
    pub n_parties: usize,
}

/// A seat-allocation strategy: one round's ballots in, seats per party
/// out.
///
/// Object-safe so the configured system can be selected at runtime and
/// all three systems can be driven through one property suite.
/// Implementations must award exactly `total_seats()` seats and be
/// deterministic for identical inputs.
pub trait SeatAllocator {
    /// Short label used in logs and error messages.
    fn name(&self) -> &'static str;
    /// Number of seats this allocator always awards.
    fn total_seats(&self) -> u32;
    /// Award seats per party; the result is indexed by party.
    fn allocate(&self, ballots: &RoundBallots<'_>) -> Vec<u32>;
}

/// Electoral-system selection, carrying its seat configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectoralSystem {
    /// Single-seat districts, plurality winner per district.
    FirstPastThePost { districts: u32 },
    /// Parallel district + list tracks, summed without compensation.
    MixedMemberMajoritarian {
        constituency_seats: u32,
        list_seats: u32,
    },
    /// Pure D'Hondt proportional allocation.
    Proportional { seats: u32 },
}

impl ElectoralSystem {
    pub fn label(&self) -> &'static str {
        match self {
            ElectoralSystem::FirstPastThePost { .. } => "FPTP",
            ElectoralSystem::MixedMemberMajoritarian { .. } => "MMM",
            ElectoralSystem::Proportional { .. } => "PR",
        }
    }

    pub fn total_seats(&self) -> u32 {
        match *self {
            ElectoralSystem::FirstPastThePost { districts } => districts,
            ElectoralSystem::MixedMemberMajoritarian {
                constituency_seats,
                list_seats,
            } => constituency_seats + list_seats,
            ElectoralSystem::Proportional { seats } => seats,
        }
    }

    /// Build the allocator implementing this system.
    pub fn allocator(&self) -> Box<dyn SeatAllocator> {
        match *self {
            ElectoralSystem::FirstPastThePost { districts } => {
                Box::new(DistrictAllocator { districts })
            }
            ElectoralSystem::MixedMemberMajoritarian {
                constituency_seats,
                list_seats,
            } => Box::new(MixedAllocator::new(constituency_seats, list_seats)),
            ElectoralSystem::Proportional { seats } => Box::new(DHondtAllocator { seats }),
        }
    }
}
