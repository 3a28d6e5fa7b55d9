use crate::{
    chain::{basefee::saturating_u256, EconomyRules},
    models::*,
};
use parking_lot::RwLock;
use std::collections::VecDeque;
use tracing::*;

/// Tuning knobs for the suggestion heuristic. The defaults keep suggestions
/// inside a 10% band of the realized base fee under steady load.
#[derive(Clone, Copy, Debug)]
pub struct OracleConfig {
    /// Number of trailing finalized blocks retained.
    pub block_window: usize,
    /// Number of observed priority fees retained.
    pub tip_window: usize,
    /// Headroom added on top of the latest base fee, as a fraction.
    pub headroom_numerator: u64,
    pub headroom_denominator: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            block_window: 32,
            tip_window: 128,
            headroom_numerator: 1,
            headroom_denominator: 20,
        }
    }
}

/// One retained observation from a finalized block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceSample {
    pub block_number: BlockNumber,
    pub base_fee: U256,
}

#[derive(Debug, Default)]
struct OracleState {
    samples: VecDeque<PriceSample>,
    tips: VecDeque<U256>,
}

/// Suggests a gas price for an about-to-be-submitted transaction.
///
/// Fed from the block-ingestion path, queried from the RPC path; the two run
/// concurrently and share nothing but the window behind the lock. Unlike the
/// base fee engine this is not consensus-critical: nodes may disagree here
/// without breaking agreement.
#[derive(Debug)]
pub struct GasPriceOracle {
    rules: EconomyRules,
    config: OracleConfig,
    state: RwLock<OracleState>,
}

impl GasPriceOracle {
    pub fn new(rules: EconomyRules, config: OracleConfig) -> Self {
        assert_ne!(config.headroom_denominator, 0);
        Self {
            rules,
            config,
            state: RwLock::new(OracleState::default()),
        }
    }

    /// Ingests a newly finalized block. Blocks must arrive in order; anything
    /// else is dropped so a replayed or reordered feed cannot poison the
    /// window.
    pub fn observe_block(&self, header: &BlockFeeHeader) {
        let mut state = self.state.write();

        if let Some(last) = state.samples.back() {
            if header.number <= last.block_number {
                warn!(
                    number = header.number.0,
                    latest = last.block_number.0,
                    "dropping out-of-order fee sample"
                );
                return;
            }
        }

        state.samples.push_back(PriceSample {
            block_number: header.number,
            base_fee: header.base_fee,
        });
        while state.samples.len() > self.config.block_window {
            state.samples.pop_front();
        }

        trace!(
            number = header.number.0,
            base_fee = %header.base_fee,
            "observed finalized block"
        );
    }

    /// Records the priority fee paid by a recently included transaction.
    pub fn observe_tip(&self, tip: U256) {
        let mut state = self.state.write();
        state.tips.push_back(tip);
        while state.tips.len() > self.config.tip_window {
            state.tips.pop_front();
        }
    }

    /// Latest observed base fee plus configured headroom plus the median
    /// observed tip. Never fails: before any block has been observed, the
    /// rules' initial base fee is a safe default.
    pub fn suggest_gas_price(&self) -> U256 {
        let state = self.state.read();

        let Some(latest) = state.samples.back() else {
            return self.rules.initial_base_fee;
        };

        latest
            .base_fee
            .saturating_add(self.headroom(latest.base_fee))
            .saturating_add(median(&state.tips))
    }

    pub fn latest_base_fee(&self) -> Option<U256> {
        self.state.read().samples.back().map(|sample| sample.base_fee)
    }

    fn headroom(&self, base_fee: U256) -> U256 {
        saturating_u256(
            base_fee.full_mul(U256::from(self.config.headroom_numerator))
                / U512::from(self.config.headroom_denominator),
        )
    }
}

fn median(values: &VecDeque<U256>) -> U256 {
    if values.is_empty() {
        return U256::zero();
    }

    let mut sorted = values.iter().copied().collect::<Vec<_>>();
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}
