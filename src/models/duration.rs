use super::GIGA;
use derive_more::{Add, Deref, Display, From, Sub};
use serde::{Deserialize, Serialize};

pub const NANOS_PER_SECOND: i64 = GIGA as i64;

/// Nanoseconds elapsed between two consecutive blocks' creation times.
///
/// Signed so that a corrupted upstream value can be represented and rejected
/// during header validation instead of silently wrapping.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deref,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Add,
    Sub,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Duration(pub i64);

impl Duration {
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * NANOS_PER_SECOND)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn as_nanos(self) -> i64 {
        self.0
    }
}

pub const DURATION_EXTRA_LENGTH: usize = 16;

/// The fixed binary payload a block producer embeds in the header's free-form
/// extra-data field: the block's own creation time followed by the time
/// elapsed since the parent block, both in nanoseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DurationExtra {
    pub timestamp_nanos: u64,
    pub duration_nanos: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtraDataError {
    UnexpectedLength { expected: usize, got: usize },
}

impl std::fmt::Display for ExtraDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ExtraDataError {}

impl DurationExtra {
    /// Builds the payload for a block created at `timestamp_nanos` whose
    /// parent carries `parent_timestamp_nanos`, maintaining the invariant
    /// `duration(N) == timestamp(N) - timestamp(N-1)`.
    pub fn between(parent_timestamp_nanos: u64, timestamp_nanos: u64) -> Self {
        Self {
            timestamp_nanos,
            duration_nanos: timestamp_nanos.saturating_sub(parent_timestamp_nanos),
        }
    }

    /// Two big-endian u64s, creation timestamp first.
    pub fn encode(&self) -> [u8; DURATION_EXTRA_LENGTH] {
        let mut out = [0; DURATION_EXTRA_LENGTH];
        out[..8].copy_from_slice(&self.timestamp_nanos.to_be_bytes());
        out[8..].copy_from_slice(&self.duration_nanos.to_be_bytes());
        out
    }

    /// Reads the payload back from the first 16 bytes of an extra-data field.
    /// Trailing vanity bytes are permitted; short input is a format error.
    pub fn decode(data: &[u8]) -> Result<Self, ExtraDataError> {
        if data.len() < DURATION_EXTRA_LENGTH {
            return Err(ExtraDataError::UnexpectedLength {
                expected: DURATION_EXTRA_LENGTH,
                got: data.len(),
            });
        }

        Ok(Self {
            timestamp_nanos: u64::from_be_bytes(data[..8].try_into().unwrap()),
            duration_nanos: u64::from_be_bytes(data[8..16].try_into().unwrap()),
        })
    }

    pub fn duration(&self) -> Duration {
        Duration(self.duration_nanos as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn roundtrip() {
        for (t, d) in [
            (0, 0),
            (1, 1),
            (1_700_000_000_000_000_000, 2_000_000_000),
            (u64::MAX, u64::MAX),
            (u64::MAX, 0),
        ] {
            let extra = DurationExtra {
                timestamp_nanos: t,
                duration_nanos: d,
            };
            assert_eq!(DurationExtra::decode(&extra.encode()), Ok(extra));
        }
    }

    #[test]
    fn known_encoding() {
        let extra = DurationExtra {
            timestamp_nanos: 1_700_000_000_000_000_000,
            duration_nanos: 2_000_000_000,
        };
        assert_eq!(
            extra.encode(),
            hex!("17979cfe362a0000" "0000000077359400")
        );
        let decoded = DurationExtra::decode(&extra.encode()).unwrap();
        assert_eq!(decoded.timestamp_nanos, 1_700_000_000_000_000_000);
        assert_eq!(decoded.duration_nanos, 2_000_000_000);
    }

    #[test]
    fn decode_ignores_trailing_vanity() {
        let mut data = DurationExtra {
            timestamp_nanos: 42,
            duration_nanos: 7,
        }
        .encode()
        .to_vec();
        data.extend_from_slice(b"client/1.0");

        let decoded = DurationExtra::decode(&data).unwrap();
        assert_eq!(decoded.timestamp_nanos, 42);
        assert_eq!(decoded.duration_nanos, 7);
    }

    #[test]
    fn decode_rejects_short_input() {
        for len in 0..DURATION_EXTRA_LENGTH {
            assert_eq!(
                DurationExtra::decode(&vec![0; len]),
                Err(ExtraDataError::UnexpectedLength {
                    expected: DURATION_EXTRA_LENGTH,
                    got: len,
                })
            );
        }
    }

    #[test]
    fn between_derives_duration_from_parent() {
        let extra = DurationExtra::between(1_000, 3_500);
        assert_eq!(extra.timestamp_nanos, 3_500);
        assert_eq!(extra.duration_nanos, 2_500);

        // A clock running backwards must not wrap.
        let extra = DurationExtra::between(3_500, 1_000);
        assert_eq!(extra.duration_nanos, 0);
    }
}
