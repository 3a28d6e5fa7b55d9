pub(crate) mod basefee;
mod economy;

pub use self::{basefee::*, economy::*};

use crate::models::*;

/// Defects in consensus-supplied inputs. These indicate upstream corruption
/// and must propagate to block validation, never be clamped away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    GasAboveLimit {
        used: u64,
        limit: u64,
    }, // gas_used > gas_limit
    NegativeDuration {
        got: Duration,
    }, // inter-block time cannot run backwards
    ZeroElasticity,         // rules would divide by zero deriving the gas target
    ZeroAdjustmentPeriod,   // rules would divide by zero scaling the delta
    ZeroMaxChangePeriod,    // rules would divide by zero clamping the delta
    FloorAboveInitial {
        floor: U256,
        initial: U256,
    }, // genesis block would violate the floor
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ValidationError {}
