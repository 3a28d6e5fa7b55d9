pub mod chain;
pub mod gasprice;
pub mod models;
pub mod res;

pub use chain::{base_fee_for_next_block, initial_base_fee, EconomyRules, ValidationError};
pub use gasprice::{GasPriceOracle, OracleConfig};
pub use models::*;
