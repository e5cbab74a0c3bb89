pub mod allocate;
pub mod electorate;
pub mod error;
pub mod model;
pub mod sim;
pub mod testutil;

pub use allocate::{
    DHondtAllocator, DistrictAllocator, ElectoralSystem, MixedAllocator, RoundBallots,
    SeatAllocator, d_hondt,
};
pub use electorate::{
    Electorate, ElectorateConfig, MembershipPolicy, VoteTally, assign_votes, sample_positions,
    strength_adjustment,
};
pub use error::ElectionError;
pub use model::{Party, RoundRecord, STRENGTH_SUM_TOLERANCE, SimulationOutcome, validate_strengths};
pub use sim::{SimConfig, run_simulation};
