use crate::buffer::Vector;
use crate::error::Error;
use std::iter::FromIterator;

/// A series of `(time, value)` observations, split into two vectors.
///
/// Times are plain numbers (eg. milliseconds since the epoch); nothing
/// here assumes they're sorted.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TimeSeries {
    times: Vector,
    values: Vector,
}

impl TimeSeries {
    pub fn new(times: Vector, values: Vector) -> Result<TimeSeries, Error> {
        if times.len() != values.len() {
            return Err(Error::LengthMismatch {
                expected: times.len(),
                found: values.len(),
            });
        }
        Ok(TimeSeries { times, values })
    }

    pub fn times(&self) -> &Vector {
        &self.times
    }

    pub fn values(&self) -> &Vector {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn start(&self) -> Option<f64> {
        self.times.get(0)
    }

    pub fn end(&self) -> Option<f64> {
        self.times.get(self.len().checked_sub(1)?)
    }

    /// The time between the first and last observations
    pub fn elapsed(&self) -> Option<f64> {
        Some(self.end()? - self.start()?)
    }

    pub fn push(&mut self, time: f64, value: f64) {
        self.times.push(time);
        self.values.push(value);
    }

    pub fn into_parts(self) -> (Vector, Vector) {
        (self.times, self.values)
    }
}

impl FromIterator<(f64, f64)> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> TimeSeries {
        let (times, values): (Vec<f64>, Vec<f64>) = iter.into_iter().unzip();
        TimeSeries {
            times: Vector::from(times),
            values: Vector::from(values),
        }
    }
}

impl From<Vec<(f64, f64)>> for TimeSeries {
    fn from(pairs: Vec<(f64, f64)>) -> TimeSeries {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split() {
        let series = TimeSeries::from(vec![(1315378833000., 2.), (1315789015000., 4.)]);
        assert_eq!(series.times().to_vec(), vec![1315378833000., 1315789015000.]);
        assert_eq!(series.values().to_vec(), vec![2., 4.]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.start(), Some(1315378833000.));
        assert_eq!(series.end(), Some(1315789015000.));
        assert_eq!(series.elapsed(), Some(410182000.));
        assert_eq!(series.values().mean(), Ok(3.));
    }

    #[test]
    fn empty() {
        let series = TimeSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.start(), None);
        assert_eq!(series.end(), None);
        assert_eq!(series.elapsed(), None);
    }

    #[test]
    fn push() {
        let mut series = TimeSeries::default();
        series.push(1., 10.);
        series.push(2., 20.);
        assert_eq!(series.values().sum(), 30.);
        let (times, values) = series.into_parts();
        assert_eq!(times, vector![1, 2]);
        assert_eq!(values, vector![10, 20]);
    }

    #[test]
    fn mismatched_lengths() {
        assert_eq!(
            TimeSeries::new(vector![1, 2], vector![1]),
            Err(Error::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
        assert!(TimeSeries::new(vector![1], vector![5]).is_ok());
    }
}
