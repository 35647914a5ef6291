//! Statistics computed from a sorted copy of the values.
//!
//! None of these touch the vector itself or its cached aggregates.

use crate::buffer::Vector;
use crate::error::Error;
use float_ord::FloatOrd;
use log::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Rounds halves up, towards positive infinity.  `density` relies on this
/// exact convention (`f64::round` rounds halves away from zero).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// The most frequent value(s)
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Single(f64),
    /// Values tied for the highest frequency, ascending
    Multiple(Vec<f64>),
}

impl Mode {
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Mode::Single(x) => std::slice::from_ref(x),
            Mode::Multiple(xs) => xs,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DistributionFormat {
    /// Raw counts
    #[default]
    Absolute,
    /// Counts divided by the number of values
    Relative,
}

impl FromStr for DistributionFormat {
    type Err = String;
    fn from_str(x: &str) -> Result<DistributionFormat, String> {
        match x {
            "absolute" => Ok(DistributionFormat::Absolute),
            "relative" => Ok(DistributionFormat::Relative),
            _ => Err(format!("Unknown distribution format: {}", x)),
        }
    }
}

/// Distinct values, ascending, each paired with its count (or share).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Distribution(pub Vec<(f64, f64)>);

impl Distribution {
    pub fn get(&self, x: f64) -> Option<f64> {
        self.0.iter().find(|(y, _)| *y == x).map(|(_, w)| *w)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.iter().copied()
    }
}

/// Serialized as a map from value to weight.  JSON keys are strings, so
/// values are written in their `Display` form (`17`, not `17.0`).
impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (x, w) in &self.0 {
            map.serialize_entry(&x.to_string(), w)?;
        }
        map.end()
    }
}

impl Vector {
    /// A copy of the values, ascending
    pub fn sorted(&self) -> Vector {
        let mut values = self.to_vec();
        values.sort_unstable_by_key(|&x| FloatOrd(x));
        Vector::from(values)
    }

    /// Groups a sorted vector into runs of equal values, jumping from the
    /// start of each run to its last index.
    fn runs(&self) -> Vec<(f64, usize)> {
        let mut runs = vec![];
        let mut i = 0;
        while i < self.len() {
            let x = self[i];
            // NaN isn't equal to itself, so it forms a run of one
            let last = self.last_index_of(x).unwrap_or(i);
            runs.push((x, last - i + 1));
            i = last + 1;
        }
        runs
    }

    /// The middle value; for an even number of values, the mean of the two
    /// middle values.
    pub fn median(&self) -> Result<f64, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let sorted = self.sorted();
        let n = self.len();
        if n % 2 == 0 {
            Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.)
        } else {
            Ok(sorted[n / 2])
        }
    }

    /// The most frequent value.  If several values share the highest
    /// frequency all of them are returned; when no value repeats that's
    /// every value.
    pub fn mode(&self) -> Result<Mode, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut counts = BTreeMap::<FloatOrd<f64>, usize>::new();
        let mut best = 1;
        let mut modes = vec![];
        for x in self.iter() {
            // Adding zero turns -0 into 0
            let count = counts.entry(FloatOrd(x + 0.)).or_insert(0);
            *count += 1;
            if *count > best {
                best = *count;
                modes.clear();
                modes.push(x);
            } else if *count == best {
                modes.push(x);
            }
        }
        if modes.len() == 1 {
            Ok(Mode::Single(modes[0]))
        } else {
            modes.sort_unstable_by_key(|&x| FloatOrd(x));
            Ok(Mode::Multiple(modes))
        }
    }

    /// The value below which the fraction `p` of the values fall.
    ///
    /// No interpolation: this is the element at `floor(n * p)` of the
    /// sorted values, or the minimum for `p <= 0`.  `p` must be below 1.
    pub fn percentile(&self, p: f64) -> Result<f64, Error> {
        if p.is_nan() || p >= 1. {
            debug!("Rejecting percentile {}", p);
            return Err(Error::InvalidPercentile(p));
        }
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let sorted = self.sorted();
        if p <= 0. {
            Ok(sorted[0])
        } else {
            Ok(sorted[(self.len() as f64 * p).floor() as usize])
        }
    }

    /// The central fraction `p` of the values, sorted.
    ///
    /// `density(0.5)` is (roughly) everything between the 25th and 75th
    /// percentiles.  The bounds are `round(n(1-p)/2 - 1)` and
    /// `round(n(1+p)/2 - 1)`, end exclusive.  When the lower bound rounds
    /// below zero (`n(1-p) < 1`) the result is empty.
    pub fn density(&self, p: f64) -> Result<Vector, Error> {
        if !(0. ..=1.).contains(&p) {
            debug!("Rejecting density {}", p);
            return Err(Error::InvalidPercentile(p));
        }
        let sorted = self.sorted();
        if p == 1. {
            return Ok(sorted);
        }
        let n = self.len() as f64;
        let begin = round_half_up(n * (0.5 - p / 2.) - 1.);
        if begin < 0. {
            return Ok(Vector::new());
        }
        let begin = begin as usize;
        let end = (round_half_up(n * (0.5 + p / 2.) - 1.) as usize).min(self.len());
        if begin >= end {
            Ok(Vector::new())
        } else {
            Ok(sorted.slice(begin..end))
        }
    }

    /// The `quantity - 1` cut points which split the values into
    /// `quantity` groups of (roughly) equal size.
    ///
    /// `quantile(4)` gives the quartiles.  Fewer cut points are returned
    /// when the last one would land on the maximum.
    pub fn quantile(&self, quantity: usize) -> Result<Vector, Error> {
        let len = self.len();
        if quantity == 0 || quantity > len {
            debug!("Can't take {} quantiles of {} values", quantity, len);
            return Err(Error::InvalidQuantile { quantity, len });
        }
        let sorted = self.sorted();
        let increment = 1. / quantity as f64;
        let mut results = Vector::with_capacity(quantity - 1);
        // Accumulating (rather than multiplying) matters: it decides which
        // cut points survive the `idx < len - 1` check.
        let mut i = increment;
        while i < 1. {
            let idx = round_half_up(len as f64 * i) - 1.;
            if idx >= 0. && (idx as usize) < len - 1 {
                results.push(sorted[idx as usize]);
            }
            i += increment;
        }
        Ok(results)
    }

    /// How often each distinct value occurs.
    pub fn distribution(&self, format: DistributionFormat) -> Distribution {
        let n = self.len() as f64;
        Distribution(
            self.sorted()
                .runs()
                .into_iter()
                .map(|(x, count)| match format {
                    DistributionFormat::Absolute => (x, count as f64),
                    DistributionFormat::Relative => (x, count as f64 / n),
                })
                .collect(),
        )
    }

    /// The number of occurrences of `x`
    pub fn frequency(&self, x: f64) -> usize {
        let sorted = self.sorted();
        // Equal values are adjacent once sorted
        match (sorted.index_of(x), sorted.last_index_of(x)) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }

    /// The distinct values, ascending
    pub fn unique(&self) -> Vector {
        self.sorted().runs().into_iter().map(|(x, _)| x).collect()
    }
}
