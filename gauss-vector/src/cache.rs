use log::*;
use std::cell::Cell;
use std::iter::FromIterator;

/// Aggregates of a sequence of values, updated one value at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aggregates {
    /// the number of values seen so far
    pub count: usize,
    pub sum: f64,
    pub product: f64,
    /// the mean of the values seen so far
    pub mean: f64,
    /// the squared distance from the mean
    pub m2: f64,
}

impl Default for Aggregates {
    fn default() -> Aggregates {
        Aggregates {
            count: 0,
            sum: 0.,
            product: 1.,
            mean: 0.,
            m2: 0.,
        }
    }
}

impl Aggregates {
    pub fn update(&mut self, x: f64) {
        // Welford's online algorithm
        self.count += 1;
        let delta1 = x - self.mean; // diff from the old mean
        self.mean += delta1 / self.count as f64;
        let delta2 = x - self.mean; // diff from the new mean
        self.m2 += delta1 * delta2;

        self.sum += x;
        self.product *= x;
    }

    /// The population variance.  NaN when no values have been seen.
    pub fn variance(self) -> f64 {
        self.m2 / self.count as f64
    }

    /// The sample variance.  Meaningless for fewer than two values.
    pub fn sample_variance(self) -> f64 {
        self.m2 / (self.count as f64 - 1.)
    }
}

impl Extend<f64> for Aggregates {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for x in iter {
            self.update(x);
        }
    }
}

impl FromIterator<f64> for Aggregates {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Aggregates {
        let mut aggs = Aggregates::default();
        aggs.extend(iter);
        aggs
    }
}

#[derive(Clone, Copy, Debug)]
struct Snapshot {
    /// the version of the vector these aggregates describe
    version: u64,
    aggregates: Aggregates,
}

/// Memoized aggregates of a `Vector`.
///
/// The cache is stamped with the version of the vector it was computed
/// from, and it's fresh only while that version is current.  Any mutation
/// other than an append bumps the version, so the next read rescans.
/// Appends are folded in one value at a time and keep the cache fresh.
///
/// Reads go through a `Cell`, so a vector (and its cache) can't be shared
/// between threads.
#[derive(Clone, Debug, Default)]
pub(crate) struct AggregateCache {
    snapshot: Cell<Option<Snapshot>>,
}

impl AggregateCache {
    /// A cache which is already fresh for the empty vector at `version`.
    pub fn empty(version: u64) -> AggregateCache {
        AggregateCache {
            snapshot: Cell::new(Some(Snapshot {
                version,
                aggregates: Aggregates::default(),
            })),
        }
    }

    pub fn is_fresh(&self, version: u64) -> bool {
        matches!(self.snapshot.get(), Some(s) if s.version == version)
    }

    /// Returns the aggregates of `values`, which must be the contents of
    /// the vector at `version`.  Rescans at most once per version.
    pub fn get(&self, version: u64, values: &[f64]) -> Aggregates {
        match self.snapshot.get() {
            Some(s) if s.version == version => s.aggregates,
            _ => {
                trace!("Cache is stale; rescanning {} values", values.len());
                let aggregates = values.iter().copied().collect::<Aggregates>();
                self.snapshot.set(Some(Snapshot {
                    version,
                    aggregates,
                }));
                aggregates
            }
        }
    }

    /// Folds newly appended values into the cache.  If the cache was fresh
    /// at `old_version` it becomes fresh at `new_version`; otherwise it
    /// stays stale and the next read rescans.
    pub fn append(&self, old_version: u64, new_version: u64, appended: &[f64]) {
        match self.snapshot.get() {
            Some(mut s) if s.version == old_version => {
                trace!("Folding {} appended values into the cache", appended.len());
                s.aggregates.extend(appended.iter().copied());
                s.version = new_version;
                self.snapshot.set(Some(s));
            }
            _ => (),
        }
    }
}
