use super::*;
use serde::{Deserialize, Serialize};

/// The per-block facts the fee subsystem consumes, extracted from a finalized
/// block header. Produced once by the execution/consensus layers and immutable
/// afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFeeHeader {
    pub number: BlockNumber,
    pub base_fee: U256,
    pub gas_limit: u64,
    pub gas_used: u64,
    /// Time elapsed since the parent block, as recorded in the header's
    /// [`DurationExtra`] payload.
    pub duration: Duration,
}

impl BlockFeeHeader {
    pub fn new(
        number: impl Into<BlockNumber>,
        base_fee: U256,
        gas_limit: u64,
        gas_used: u64,
        duration: Duration,
    ) -> Self {
        Self {
            number: number.into(),
            base_fee,
            gas_limit,
            gas_used,
            duration,
        }
    }
}
