use thiserror::Error;

///
/// ParseBigIntError
///
/// Raised only by the decimal string parser. A failed parse never leaves a
/// partial value behind.
///

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("cannot parse big integer from empty string")]
    InvalidFormat,

    #[error("invalid digit found in string")]
    InvalidDigit,
}
