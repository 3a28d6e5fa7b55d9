use super::ValidationError;
use crate::models::*;
use serde::Deserialize;

/// Immutable fee-adjustment parameters for one network epoch.
///
/// Supplied by the surrounding node per network and never mutated here; the
/// built-in parameter files live in [`crate::res::economy`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EconomyRules {
    /// Base fee of the genesis block.
    pub initial_base_fee: U256,
    /// Hard floor the base fee never drops below.
    pub min_base_fee: U256,
    /// Gas target divisor: a block is on target when it uses
    /// `gas_limit / elasticity_multiplier` gas.
    pub elasticity_multiplier: u64,
    /// Time a fully over-utilized block stream (2x target) takes to double
    /// the base fee. Smaller means a more reactive market.
    pub adjustment_period: Duration,
    /// Time over which the base fee may move by at most 100%, regardless of
    /// utilization. Bounds single-step movement during bursts of slow blocks.
    pub max_change_period: Duration,
}

impl EconomyRules {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.elasticity_multiplier == 0 {
            return Err(ValidationError::ZeroElasticity);
        }
        if self.adjustment_period.as_nanos() <= 0 {
            return Err(ValidationError::ZeroAdjustmentPeriod);
        }
        if self.max_change_period.as_nanos() <= 0 {
            return Err(ValidationError::ZeroMaxChangePeriod);
        }
        if self.min_base_fee > self.initial_base_fee {
            return Err(ValidationError::FloorAboveInitial {
                floor: self.min_base_fee,
                initial: self.initial_base_fee,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_rules() {
        let good = crate::res::economy::DEVNET.clone();
        assert_eq!(good.validate(), Ok(()));

        let mut rules = good.clone();
        rules.elasticity_multiplier = 0;
        assert_eq!(rules.validate(), Err(ValidationError::ZeroElasticity));

        let mut rules = good.clone();
        rules.adjustment_period = Duration(0);
        assert_eq!(rules.validate(), Err(ValidationError::ZeroAdjustmentPeriod));

        let mut rules = good.clone();
        rules.max_change_period = Duration(-1);
        assert_eq!(rules.validate(), Err(ValidationError::ZeroMaxChangePeriod));

        let mut rules = good;
        rules.min_base_fee = rules.initial_base_fee + U256::one();
        assert!(matches!(
            rules.validate(),
            Err(ValidationError::FloorAboveInitial { .. })
        ));
    }
}
