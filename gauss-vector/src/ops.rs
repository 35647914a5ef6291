//! Elementwise arithmetic

use crate::buffer::Vector;
use crate::error::Error;
use log::*;

/// The right-hand side of an elementwise operation.  Scalars are applied
/// to every element; sequences are paired up element by element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Vector(&'a [f64]),
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl<'a> From<&'a [f64]> for Operand<'a> {
    fn from(xs: &'a [f64]) -> Self {
        Operand::Vector(xs)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Operand<'a> {
    fn from(xs: &'a [f64; N]) -> Self {
        Operand::Vector(xs)
    }
}

impl<'a> From<&'a Vec<f64>> for Operand<'a> {
    fn from(xs: &'a Vec<f64>) -> Self {
        Operand::Vector(xs)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(xs: &'a Vector) -> Self {
        Operand::Vector(xs.as_slice())
    }
}

impl Vector {
    fn zip_with<'a>(
        &self,
        operand: impl Into<Operand<'a>>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Vector, Error> {
        match operand.into() {
            Operand::Scalar(y) => Ok(self.map(|x| f(x, y))),
            Operand::Vector(ys) if ys.len() == self.len() => {
                Ok(self.iter().zip(ys.iter()).map(|(x, &y)| f(x, y)).collect())
            }
            Operand::Vector(ys) => {
                debug!("Operand length {} != {}", ys.len(), self.len());
                Err(Error::LengthMismatch {
                    expected: self.len(),
                    found: ys.len(),
                })
            }
        }
    }

    pub fn add<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Vector, Error> {
        self.zip_with(operand, |x, y| x + y)
    }

    pub fn subtract<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Vector, Error> {
        self.zip_with(operand, |x, y| x - y)
    }

    pub fn multiply<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Vector, Error> {
        self.zip_with(operand, |x, y| x * y)
    }

    pub fn divide<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Vector, Error> {
        self.zip_with(operand, |x, y| x / y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        let v = vector![1, 2, 4];
        assert_eq!(v.add(1.).unwrap(), vector![2, 3, 5]);
        assert_eq!(v.subtract(1.).unwrap(), vector![0, 1, 3]);
        assert_eq!(v.multiply(2.).unwrap(), vector![2, 4, 8]);
        assert_eq!(v.divide(4.).unwrap(), vector![0.25, 0.5, 1]);
    }

    #[test]
    fn vectors() {
        let v = vector![1, 2, 4];
        let w = vector![4, 2, 1];
        assert_eq!(v.add(&w).unwrap(), vector![5, 4, 5]);
        assert_eq!(v.subtract(&w).unwrap(), vector![-3, 0, 3]);
        assert_eq!(v.multiply(&[2., 3., 4.]).unwrap(), vector![2, 6, 16]);
        assert_eq!(v.divide(&vec![2., 2., 2.]).unwrap(), vector![0.5, 1, 2]);
    }

    #[test]
    fn operands_are_untouched() {
        let v = vector![1, 2];
        let w = vector![3, 4];
        v.sum();
        v.add(&w).unwrap();
        assert_eq!(v, vector![1, 2]);
        assert_eq!(w, vector![3, 4]);
        assert!(v.cache_is_fresh());
    }

    #[test]
    fn length_mismatch() {
        let v = vector![1, 2];
        let w = vector![1, 2, 3];
        let err = Err(Error::LengthMismatch {
            expected: 2,
            found: 3,
        });
        assert_eq!(v.add(&w), err);
        assert_eq!(v.subtract(&w), err);
        assert_eq!(v.multiply(&w), err);
        assert_eq!(v.divide(&w), err);
        assert!(v.add(&[1.]).is_err());
    }

    #[test]
    fn empty() {
        let v = Vector::new();
        assert_eq!(v.add(1.).unwrap(), Vector::new());
        assert_eq!(v.add(&Vector::new()).unwrap(), Vector::new());
    }
}
