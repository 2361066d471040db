use core::fmt;
use core::num::NonZeroU32;

use crate::SyError;

/// Number of a station on the board.
///
/// Station numbers are positive and, on a built board, dense from 1, so
/// `index()` doubles as the slot of the station in the board's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct StationNumber(NonZeroU32);

impl StationNumber {
    /// Create a station number, `None` for zero.
    pub const fn new(number: u32) -> Option<Self> {
        match NonZeroU32::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Create a station number from a 0-based arena index by storing index+1.
    pub fn from_index(index: usize) -> Self {
        let number = u32::try_from(index + 1).expect("station index fits in u32");
        Self(NonZeroU32::new(number).expect("index+1 is nonzero"))
    }

    /// The number as printed on the board.
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Recover the 0-based arena index.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for StationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.get())
    }
}

impl fmt::Display for StationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u32> for StationNumber {
    type Error = SyError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| SyError::InvalidArg {
            what: format!("invalid station number ({number})"),
        })
    }
}

impl TryFrom<i64> for StationNumber {
    type Error = SyError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        u32::try_from(number)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| SyError::InvalidArg {
                what: format!("invalid station number ({number})"),
            })
    }
}

impl From<StationNumber> for u32 {
    fn from(number: StationNumber) -> Self {
        number.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 198] {
            let n = StationNumber::from_index(i);
            assert_eq!(n.index(), i);
            assert_eq!(n.get() as usize, i + 1);
        }
    }

    #[test]
    fn zero_and_negative_rejected() {
        assert!(StationNumber::new(0).is_none());
        assert!(StationNumber::try_from(0_u32).is_err());
        assert!(StationNumber::try_from(-3_i64).is_err());
        assert!(StationNumber::try_from(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(StationNumber::try_from(7_i64).unwrap().get(), 7);
    }

    #[test]
    fn option_number_is_small() {
        assert_eq!(
            core::mem::size_of::<StationNumber>(),
            core::mem::size_of::<Option<StationNumber>>()
        );
    }

    #[test]
    fn display_is_plain_number() {
        let n = StationNumber::new(128).unwrap();
        assert_eq!(n.to_string(), "128");
        assert_eq!(format!("{n:?}"), "Station(128)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn index_and_number_agree(index in 0_usize..1_000_000) {
            let n = StationNumber::from_index(index);
            prop_assert_eq!(n.index(), index);
            prop_assert_eq!(StationNumber::try_from(i64::from(n.get())).unwrap(), n);
        }
    }
}
