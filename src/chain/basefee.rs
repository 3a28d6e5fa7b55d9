use super::{EconomyRules, ValidationError};
use crate::models::*;

/// Base fee of the genesis block. A pure lookup so that every node starts the
/// chain from the identical value.
pub fn initial_base_fee(rules: &EconomyRules) -> U256 {
    rules.initial_base_fee
}

pub fn validate_fee_header(header: &BlockFeeHeader) -> Result<(), ValidationError> {
    if header.gas_used > header.gas_limit {
        return Err(ValidationError::GasAboveLimit {
            used: header.gas_used,
            limit: header.gas_limit,
        });
    }

    if header.duration.is_negative() {
        return Err(ValidationError::NegativeDuration {
            got: header.duration,
        });
    }

    Ok(())
}

/// Computes the base fee of the block following `parent`.
///
/// The adjustment is rate-per-time, not rate-per-block: a block stream with
/// variable cadence moves the fee proportionally to the wall-clock time each
/// block covers. All arithmetic is integer-only with truncation toward zero,
/// so every node derives the identical value. Consensus-critical.
pub fn base_fee_for_next_block(
    parent: &BlockFeeHeader,
    rules: &EconomyRules,
) -> Result<U256, ValidationError> {
    validate_fee_header(parent)?;
    rules.validate()?;

    let gas_target = parent.gas_limit / rules.elasticity_multiplier;
    if gas_target == 0 {
        return Ok(std::cmp::max(parent.base_fee, rules.min_base_fee));
    }

    let duration = parent.duration.as_nanos() as u64;

    let (gas_delta, overutilized) = if parent.gas_used > gas_target {
        (parent.gas_used - gas_target, true)
    } else {
        (gas_target - parent.gas_used, false)
    };

    // delta = base_fee * gas_delta * duration / (gas_target * adjustment_period)
    //
    // gas_delta * duration and gas_target * adjustment_period each fit U256;
    // the numerator needs U512.
    let divisor = U512::from(
        U256::from(gas_target) * U256::from(rules.adjustment_period.as_nanos() as u64),
    );
    let raw = parent
        .base_fee
        .full_mul(U256::from(gas_delta) * U256::from(duration))
        / divisor;

    // Cap the single-step movement at base_fee * duration / max_change_period.
    let cap = parent.base_fee.full_mul(U256::from(duration))
        / U512::from(rules.max_change_period.as_nanos() as u64);
    let delta = saturating_u256(std::cmp::min(raw, cap));

    let next = if overutilized {
        parent.base_fee.saturating_add(delta)
    } else {
        parent.base_fee.saturating_sub(delta)
    };

    Ok(std::cmp::max(next, rules.min_base_fee))
}

pub(crate) fn saturating_u256(x: U512) -> U256 {
    if x.0[4..].iter().any(|limb| *limb != 0) {
        U256::max_value()
    } else {
        U256([x.0[0], x.0[1], x.0[2], x.0[3]])
    }
}
