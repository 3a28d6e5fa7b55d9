mod duration;
mod header;

pub use self::{duration::*, header::*};

use derive_more::{Deref, DerefMut, Display, From};
use serde::{Deserialize, Serialize};
use std::ops::Add;

pub use ethereum_types::{U256, U512};

#[derive(
    Clone,
    Copy,
    Debug,
    Deref,
    DerefMut,
    Default,
    Display,
    PartialEq,
    Eq,
    From,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct BlockNumber(pub u64);

impl Add<u64> for BlockNumber {
    type Output = BlockNumber;

    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

pub const GIGA: u64 = 1_000_000_000; // = 10^9
pub const GWEI: u64 = GIGA;
