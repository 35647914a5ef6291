use crate::cache::*;
use crate::error::Error;
use float_ord::FloatOrd;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

/// Builds a `Vector` from a list of numbers.
///
/// ```
/// # use gauss_vector::*;
/// let v = vector![1, 2.5, 3];
/// assert_eq!(v.to_vec(), vec![1., 2.5, 3.]);
/// assert!(vector![].is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from(vec![$($x as f64),+])
    };
}

/// An ordered sequence of `f64`s.
///
/// Sums, products and variances are memoized, so asking for them again
/// (or asking after an `append`) doesn't rescan the values.
#[derive(Clone)]
pub struct Vector {
    values: Vec<f64>,
    /// bumped by every mutation which the cache can't follow
    version: u64,
    cache: AggregateCache,
}

impl Vector {
    pub fn new() -> Vector {
        Vector::from(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Vector {
        Vector::from(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// A new vector with the same values.  The copy gets its own cache.
    pub fn copy(&self) -> Vector {
        Vector::from(self.to_vec())
    }

    /// Appends the values and returns the new length.  Cached aggregates
    /// are updated in place rather than recomputed.
    pub fn append(&mut self, values: impl IntoIterator<Item = f64>) -> usize {
        let start = self.values.len();
        self.values.extend(values);
        let old_version = self.version;
        self.version = self.version.wrapping_add(1);
        self.cache
            .append(old_version, self.version, &self.values[start..]);
        self.values.len()
    }

    pub fn push(&mut self, x: f64) -> usize {
        self.append(std::iter::once(x))
    }

    pub fn pop(&mut self) -> Option<f64> {
        self.invalidate();
        self.values.pop()
    }

    pub fn truncate(&mut self, len: usize) {
        self.invalidate();
        self.values.truncate(len);
    }

    pub fn clear(&mut self) {
        self.invalidate();
        self.values.clear();
    }

    fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// The count, sum, product, mean and sum of squared deviations, from
    /// the cache if it's fresh.
    pub fn aggregates(&self) -> Aggregates {
        self.cache.get(self.version, &self.values)
    }

    #[cfg(test)]
    pub(crate) fn cache_is_fresh(&self) -> bool {
        self.cache.is_fresh(self.version)
    }

    /// Same length and elementwise equal values.
    pub fn equal(&self, other: impl AsRef<[f64]>) -> bool {
        self.values == other.as_ref()
    }

    pub fn index_of(&self, x: f64) -> Option<usize> {
        self.values.iter().position(|&y| y == x)
    }

    pub fn last_index_of(&self, x: f64) -> Option<usize> {
        self.values.iter().rposition(|&y| y == x)
    }

    /// A new vector containing the values in `range`.
    ///
    /// Bounds past the end are clamped to the length, and a range which
    /// ends before it starts gives an empty vector.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Vector {
        let len = self.len();
        let end = match range.end_bound() {
            Bound::Included(&x) => x.saturating_add(1),
            Bound::Excluded(&x) => x,
            Bound::Unbounded => len,
        }
        .min(len);
        let start = match range.start_bound() {
            Bound::Included(&x) => x,
            Bound::Excluded(&x) => x.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(end);
        Vector::from(&self.values[start..end])
    }

    /// A new vector containing these values followed by `other`.
    pub fn concat(&self, other: impl AsRef<[f64]>) -> Vector {
        self.iter().chain(other.as_ref().iter().copied()).collect()
    }

    /// The differences between consecutive values.
    pub fn delta(&self) -> Vector {
        self.values.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Vector {
        self.iter().map(f).collect()
    }

    pub fn pow(&self, exponent: f64) -> Vector {
        self.map(|x| x.powf(exponent))
    }

    pub fn min(&self) -> Result<f64, Error> {
        self.iter()
            .map(FloatOrd)
            .min()
            .map(|FloatOrd(x)| x)
            .ok_or(Error::Empty)
    }

    pub fn max(&self) -> Result<f64, Error> {
        self.iter()
            .map(FloatOrd)
            .max()
            .map(|FloatOrd(x)| x)
            .ok_or(Error::Empty)
    }

    pub fn range(&self) -> Result<f64, Error> {
        Ok(self.max()? - self.min()?)
    }
}

macro_rules! elementwise {
    ($($name:ident => $f:path),* $(,)?) => {
        impl Vector {
            $(
                pub fn $name(&self) -> Vector {
                    self.map($f)
                }
            )*
        }
    };
}

elementwise! {
    abs => f64::abs,
    acos => f64::acos,
    asin => f64::asin,
    atan => f64::atan,
    ceil => f64::ceil,
    cos => f64::cos,
    exp => f64::exp,
    floor => f64::floor,
    ln => f64::ln,
    round => f64::round,
    sin => f64::sin,
    sqrt => f64::sqrt,
    tan => f64::tan,
}

impl Default for Vector {
    fn default() -> Vector {
        Vector::new()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Vector {
        let version = 0;
        let cache = if values.is_empty() {
            AggregateCache::empty(version)
        } else {
            AggregateCache::default()
        };
        Vector {
            values,
            version,
            cache,
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Vector {
        Vector::from(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Vector {
        Vector::from(values.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Vec<f64> {
        v.values
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Vector {
        Vector::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<f64> for Vector {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        self.append(iter);
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, idx: usize) -> &f64 {
        &self.values[idx]
    }
}

/// Writing through an index invalidates the cached aggregates.
impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        self.invalidate();
        &mut self.values[idx]
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.equal(other)
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        self.equal(other)
    }
}

impl PartialEq<Vec<f64>> for Vector {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.equal(other)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", x)?;
        }
        f.write_str("]")
    }
}
