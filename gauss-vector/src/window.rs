//! Moving averages

use crate::buffer::Vector;
use crate::error::Error;
use log::*;

/// Parameters for an exponential moving average.
///
/// `ratio` maps the period to the smoothing factor.  A bare period
/// converts into the conventional `2 / (period + 1)`.
#[derive(Clone, Copy, Debug)]
pub struct Ema {
    pub period: usize,
    pub ratio: fn(usize) -> f64,
}

impl Ema {
    pub fn new(period: usize) -> Ema {
        Ema {
            period,
            ratio: |n| 2. / (n as f64 + 1.),
        }
    }

    /// Wilder's smoothing, `1 / period`
    pub fn wilder(period: usize) -> Ema {
        Ema {
            period,
            ratio: |n| 1. / n as f64,
        }
    }

    pub fn with_ratio(period: usize, ratio: fn(usize) -> f64) -> Ema {
        Ema { period, ratio }
    }
}

impl From<usize> for Ema {
    fn from(period: usize) -> Ema {
        Ema::new(period)
    }
}

impl Vector {
    fn check_period(&self, period: usize) -> Result<(), Error> {
        if period == 0 || period > self.len() {
            debug!("Period {} doesn't fit {} values", period, self.len());
            Err(Error::InvalidPeriod {
                period,
                len: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// The simple moving average: the unweighted mean of each window of
    /// `period` consecutive values.  Returns `n - period + 1` values.
    pub fn sma(&self, period: usize) -> Result<Vector, Error> {
        self.check_period(period)?;
        if period == 1 {
            return Ok(self.copy());
        }
        let p = period as f64;
        // Keep a rolling sum rather than re-summing every window
        let mut sum = self.slice(..period).sum();
        let mut sma = Vector::with_capacity(self.len() - period + 1);
        sma.push(sum / p);
        for i in 1..self.len() - period + 1 {
            sum += self[i + period - 1] - self[i - 1];
            sma.push(sum / p);
        }
        Ok(sma)
    }

    /// The exponential moving average.  Seeded with the mean of the first
    /// window, then each value moves the average `ratio` of the way
    /// towards the next value.  Returns `n - period + 1` values.
    ///
    /// Takes either a period or an `Ema`.
    pub fn ema(&self, options: impl Into<Ema>) -> Result<Vector, Error> {
        let Ema { period, ratio } = options.into();
        self.check_period(period)?;
        let ratio = ratio(period);
        let mut prev = self.slice(..period).sum() / period as f64;
        let mut ema = Vector::with_capacity(self.len() - period + 1);
        ema.push(prev);
        for i in 1..self.len() - period + 1 {
            prev += ratio * (self[i + period - 1] - prev);
            ema.push(prev);
        }
        Ok(ema)
    }
}
