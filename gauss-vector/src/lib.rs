/*! A vector of `f64`s which knows its own statistics.

Sums, products and variances are memoized: asking twice costs nothing, and
appending values updates them in place (using Welford's algorithm for the
variance) instead of rescanning.  Order statistics and moving averages work
on copies and never disturb the vector.

## Example

```
# use gauss_vector::*;
let mut v = vector![2, 4, 4, 4, 5, 5, 7, 9];
assert_eq!(v.mean(), Ok(5.));
assert_eq!(v.stdev(), Ok(2.));
assert_eq!(v.median(), Ok(4.5));
assert_eq!(v.mode(), Ok(Mode::Single(4.)));

// The cached sum and variance are updated, not recomputed
v.append([3., 5.]);
assert_eq!(v.sum(), 48.);
assert_eq!(v.variance(), Ok(3.56));

assert_eq!(v.sma(4)?.to_vec(), vec![3.5, 4.25, 4.5, 5.25, 6.5, 6., 6.]);
assert_eq!(
    v.add(&[1.; 3]),
    Err(Error::LengthMismatch { expected: 10, found: 3 }),
);
# Ok::<(), Error>(())
```

## Empty vectors

Statistics which aren't defined for an empty vector (means, variances,
order statistics) return `Error::Empty` rather than NaN.  The sum and
product of an empty vector are 0 and 1.
*/

#[macro_use]
mod buffer;
mod cache;
mod error;
mod means;
mod ops;
mod order;
mod pipe;
#[cfg(test)]
mod testdata;
mod timeseries;
mod window;

pub use buffer::*;
pub use cache::Aggregates;
pub use error::*;
pub use means::*;
pub use ops::*;
pub use order::*;
pub use pipe::*;
pub use timeseries::*;
pub use window::*;
