pub mod party;
pub mod round;

pub use party::{Party, STRENGTH_SUM_TOLERANCE, validate_strengths};
pub use round::{RoundRecord, SimulationOutcome};
