use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An interleaved key / value sequence had an odd number of elements, leaving the final key
/// without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddKeyValueCount {
    pub len: usize,
}

impl Display for OddKeyValueCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to build a map from {} interleaved keys and values, the count must be even!",
            self.len
        )
    }
}

impl Error for OddKeyValueCount {}

/// Parallel key and value sequences didn't have the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub keys: usize,
    pub values: usize,
}

impl Display for LengthMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to pair {} keys with {} values, the lengths must match!",
            self.keys, self.values
        )
    }
}

impl Error for LengthMismatch {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyReduction;

impl Display for EmptyReduction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to reduce a collection with no elements!")
    }
}

impl Error for EmptyReduction {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroGroupSize;

impl Display for ZeroGroupSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to split a collection into groups of 0 elements!")
    }
}

impl Error for ZeroGroupSize {}

/// The exact total of a sum can't be represented as a `Decimal`, either because it's too large or
/// because it needs more significant digits than a `Decimal` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InexactSum;

impl Display for InexactSum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to represent the sum exactly, it exceeds the range or precision of a Decimal!"
        )
    }
}

impl Error for InexactSum {}

/// Any input that breaks the contract of one of this crate's functions. Every function that can
/// fail this way comes in two forms: `try_*`, returning this error, and a plain form that panics
/// with its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContractViolation {
    OddKeyValueCount(OddKeyValueCount),
    LengthMismatch(LengthMismatch),
    EmptyReduction(EmptyReduction),
    ZeroGroupSize(ZeroGroupSize),
    InexactSum(InexactSum),
}

impl ContractViolation {
    /// Wraps `error` as an [`Err`], logging the rejection at `debug` level when the `tracing`
    /// feature is enabled.
    pub(crate) fn reject<T>(error: impl Into<ContractViolation>) -> Result<T, ContractViolation> {
        let error = error.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(%error, "rejected input");
        Err(error)
    }
}
