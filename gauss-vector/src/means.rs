use crate::buffer::Vector;
use crate::error::Error;

fn reciprocal_sum(v: &Vector) -> f64 {
    v.iter().map(|x| 1. / x.abs()).sum()
}

fn power_sum(v: &Vector, p: f64) -> f64 {
    v.iter().map(|x| x.powf(p)).sum()
}

/// Population statistics
impl Vector {
    /// The sum of the values (0 for an empty vector).  Memoized.
    pub fn sum(&self) -> f64 {
        self.aggregates().sum
    }

    /// The product of the values (1 for an empty vector).  Memoized.
    pub fn product(&self) -> f64 {
        self.aggregates().product
    }

    fn nonempty(&self) -> Result<f64, Error> {
        if self.is_empty() {
            Err(Error::Empty)
        } else {
            Ok(self.len() as f64)
        }
    }

    /// The arithmetic mean
    pub fn mean(&self) -> Result<f64, Error> {
        let n = self.nonempty()?;
        Ok(self.sum() / n)
    }

    /// The geometric mean, `|Πx|^(1/n)`
    pub fn gmean(&self) -> Result<f64, Error> {
        let n = self.nonempty()?;
        Ok(self.product().abs().powf(1. / n))
    }

    /// The harmonic mean, `n / Σ(1/|x|)`
    pub fn hmean(&self) -> Result<f64, Error> {
        let n = self.nonempty()?;
        Ok(n / reciprocal_sum(self))
    }

    /// The quadratic mean (root mean square)
    pub fn qmean(&self) -> Result<f64, Error> {
        let n = self.nonempty()?;
        Ok((self.pow(2.).sum() / n).sqrt())
    }

    /// The power mean `(Σx^p / n)^(1/p)`.
    ///
    /// `pmean(1.)` is the arithmetic mean, `pmean(2.)` the quadratic mean,
    /// and (for positive values) `pmean(-1.)` the harmonic mean.  `p = 0`
    /// is taken as its limit, the geometric mean.
    pub fn pmean(&self, p: f64) -> Result<f64, Error> {
        let n = self.nonempty()?;
        if p == 0. {
            return self.gmean();
        }
        Ok((power_sum(self, p) / n).powf(1. / p))
    }

    /// The population variance.  Memoized, and maintained incrementally
    /// across appends.
    pub fn variance(&self) -> Result<f64, Error> {
        self.nonempty()?;
        Ok(self.aggregates().variance())
    }

    /// The population standard deviation
    pub fn stdev(&self) -> Result<f64, Error> {
        Ok(self.variance()?.sqrt())
    }

    /// The standard deviation of the central `p` fraction of the values
    /// (see `density`).
    pub fn stdev_within(&self, p: f64) -> Result<f64, Error> {
        self.density(p)?.stdev()
    }

    /// Statistics which treat the values as a sample, using `n - 1` in the
    /// denominator.
    pub fn sample(&self) -> Sample<'_> {
        Sample(self)
    }
}

/// A view of a `Vector` as a sample drawn from a larger population.
#[derive(Clone, Copy, Debug)]
pub struct Sample<'a>(&'a Vector);

impl<'a> Sample<'a> {
    /// The denominator, `n - 1`
    fn dof(self) -> Result<f64, Error> {
        if self.0.len() < 2 {
            Err(Error::NotEnoughData)
        } else {
            Ok((self.0.len() - 1) as f64)
        }
    }

    pub fn mean(self) -> Result<f64, Error> {
        let dof = self.dof()?;
        Ok(self.0.sum() / dof)
    }

    pub fn gmean(self) -> Result<f64, Error> {
        let dof = self.dof()?;
        Ok(self.0.product().abs().powf(1. / dof))
    }

    pub fn hmean(self) -> Result<f64, Error> {
        let dof = self.dof()?;
        Ok(dof / reciprocal_sum(self.0))
    }

    pub fn qmean(self) -> Result<f64, Error> {
        let dof = self.dof()?;
        Ok((self.0.pow(2.).sum() / dof).sqrt())
    }

    pub fn pmean(self, p: f64) -> Result<f64, Error> {
        let dof = self.dof()?;
        if p == 0. {
            return self.gmean();
        }
        Ok((power_sum(self.0, p) / dof).powf(1. / p))
    }

    /// The sample variance.  Memoized alongside the population variance.
    pub fn variance(self) -> Result<f64, Error> {
        self.dof()?;
        Ok(self.0.aggregates().sample_variance())
    }

    pub fn stdev(self) -> Result<f64, Error> {
        Ok(self.variance()?.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::*;
    use approx::*;
    use rand::Rng;

    #[test]
    fn set() {
        let v = Vector::from(SET);
        assert_eq!(v.sum(), 2697.);
        assert_relative_eq!(v.product(), 7.120776302117291e+80, max_relative = 1e-12);
        assert_eq!(v.mean(), Ok(53.94));
        assert_relative_eq!(v.gmean().unwrap(), 41.40478623971778, max_relative = 1e-12);
        assert_relative_eq!(v.hmean().unwrap(), 19.0456068931919, max_relative = 1e-12);
        assert_relative_eq!(v.qmean().unwrap(), 61.26548783777046, max_relative = 1e-12);
        assert_relative_eq!(v.variance().unwrap(), 843.9364, max_relative = 1e-12);
        assert_relative_eq!(v.stdev().unwrap(), 29.050583470904677, max_relative = 1e-12);
        assert_relative_eq!(
            v.stdev_within(0.95).unwrap(),
            28.226483574827384,
            max_relative = 1e-12
        );
    }

    #[test]
    fn sample() {
        let v = Vector::from(SET);
        assert_relative_eq!(
            v.sample().variance().unwrap(),
            861.1595918367346,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            v.sample().stdev().unwrap(),
            861.1595918367346_f64.sqrt(),
            max_relative = 1e-12
        );
        assert_eq!(v.sample().mean(), Ok(2697. / 49.));

        let v = vector![1, 2, 3];
        assert_eq!(v.sample().variance(), Ok(1.));
        assert_eq!(v.sample().qmean(), Ok(7_f64.sqrt()));
        assert_eq!(v.sample().hmean(), Ok(2. / (1. + 0.5 + 1. / 3.)));
        assert_relative_eq!(v.sample().gmean().unwrap(), 6_f64.sqrt());
        assert_relative_eq!(v.sample().pmean(1.).unwrap(), 3.);
    }

    #[test]
    fn not_enough_data() {
        assert_eq!(vector![1].sample().variance(), Err(Error::NotEnoughData));
        assert_eq!(Vector::new().sample().mean(), Err(Error::NotEnoughData));
        assert_eq!(Vector::new().mean(), Err(Error::Empty));
        assert_eq!(Vector::new().variance(), Err(Error::Empty));
        assert_eq!(Vector::new().pmean(3.), Err(Error::Empty));
        assert_eq!(Vector::new().sum(), 0.);
        assert_eq!(Vector::new().product(), 1.);
    }

    #[test]
    fn power_mean_identities() {
        let v = Vector::from(SET);
        assert_relative_eq!(v.pmean(1.).unwrap(), v.mean().unwrap(), max_relative = 1e-12);
        assert_relative_eq!(v.pmean(2.).unwrap(), v.qmean().unwrap(), max_relative = 1e-12);
        assert_relative_eq!(v.pmean(-1.).unwrap(), v.hmean().unwrap(), max_relative = 1e-12);
        assert_eq!(v.pmean(0.), v.gmean());

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let len = rng.gen_range(1..50);
            let v = (0..len).map(|_| rng.gen_range(0.1..100.)).collect::<Vector>();
            assert_relative_eq!(v.pmean(1.).unwrap(), v.mean().unwrap(), max_relative = 1e-9);
            assert_relative_eq!(v.pmean(2.).unwrap(), v.qmean().unwrap(), max_relative = 1e-9);
            assert_relative_eq!(v.pmean(-1.).unwrap(), v.hmean().unwrap(), max_relative = 1e-9);
        }
    }

    #[test]
    fn zero_aggregates_are_cached() {
        let v = vector![1, -1];
        assert_eq!(v.sum(), 0.);
        assert!(v.cache_is_fresh());
        assert_eq!(v.sum(), 0.);

        let v = vector![3, 0, 5];
        assert_eq!(v.product(), 0.);
        assert!(v.cache_is_fresh());

        let v = vector![4, 4, 4];
        assert_eq!(v.variance(), Ok(0.));
        assert!(v.cache_is_fresh());
    }

    #[test]
    fn append_matches_rescan() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let len = rng.gen_range(0..40);
            let mut v = (0..len).map(|_| rng.gen_range(-10.0..10.)).collect::<Vector>();
            v.sum();
            for _ in 0..rng.gen_range(1..5) {
                let k = rng.gen_range(1..10);
                v.append((0..k).map(|_| rng.gen_range(-10.0..10.)).collect::<Vec<_>>());
                assert!(v.cache_is_fresh());

                let rescanned = v.copy();
                assert_relative_eq!(v.sum(), rescanned.sum(), epsilon = 1e-9);
                assert_relative_eq!(v.product(), rescanned.product(), max_relative = 1e-9);
                assert_relative_eq!(
                    v.variance().unwrap(),
                    rescanned.variance().unwrap(),
                    epsilon = 1e-9
                );
                if v.len() > 1 {
                    assert_relative_eq!(
                        v.sample().variance().unwrap(),
                        rescanned.sample().variance().unwrap(),
                        epsilon = 1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn append_to_set() {
        let mut v = Vector::from(&SET[..25]);
        assert_eq!(v.sum(), SET[..25].iter().sum::<f64>());
        for &x in &SET[25..] {
            v.push(x);
        }
        assert_eq!(v.sum(), 2697.);
        assert_relative_eq!(v.variance().unwrap(), 843.9364, max_relative = 1e-12);
        assert_relative_eq!(v.product(), 7.120776302117291e+80, max_relative = 1e-12);
    }
}
