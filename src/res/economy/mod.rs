use crate::chain::EconomyRules;
use once_cell::sync::Lazy;

pub static MAINNET: Lazy<EconomyRules> =
    Lazy::new(|| ron::from_str(include_str!("mainnet.ron")).unwrap());
pub static DEVNET: Lazy<EconomyRules> =
    Lazy::new(|| ron::from_str(include_str!("devnet.ron")).unwrap());
