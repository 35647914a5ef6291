use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The statistic isn't defined for an empty vector
    Empty,
    /// Sample statistics need at least two values
    NotEnoughData,
    /// An elementwise operand didn't have the same length as the receiver
    LengthMismatch { expected: usize, found: usize },
    /// More quantiles were requested than there are values
    InvalidQuantile { quantity: usize, len: usize },
    /// A moving-average window which doesn't fit in the vector
    InvalidPeriod { period: usize, len: usize },
    InvalidPercentile(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("Can't compute this statistic for an empty vector"),
            Error::NotEnoughData => {
                f.write_str("Can't compute sample statistics when sample size is less than 2")
            }
            Error::LengthMismatch { expected, found } => write!(
                f,
                "Operand has length {}, but the vector has length {}",
                found, expected
            ),
            Error::InvalidQuantile { quantity, len } => write!(
                f,
                "Can't split {} values into {} quantiles",
                len, quantity
            ),
            Error::InvalidPeriod { period, len } => write!(
                f,
                "A period of {} doesn't fit in a vector of length {}",
                period, len
            ),
            Error::InvalidPercentile(p) => write!(f, "{} is not a valid percentile", p),
        }
    }
}

impl std::error::Error for Error {}
