//! Exact probabilities.
//!
//! Every probability in this workspace is a [`BigRational`]: a reduced
//! fraction of two arbitrary-size integers. Products of many small
//! likelihoods never underflow and sums compare with plain `==`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// An exact probability value.
pub type Probability = BigRational;

/// Lift a count into an exact integer.
pub fn count(n: u64) -> BigInt {
    BigInt::from(n)
}

/// Build `numerator / denominator` exactly.
///
/// Returns `None` when the denominator is zero.
///
/// # Example
///
/// ```rust
/// use bayes_core::exact::{count, ratio};
///
/// let half = ratio(count(3), count(6)).unwrap();
/// assert_eq!(half, ratio(count(1), count(2)).unwrap());
/// assert!(ratio(count(1), count(0)).is_none());
/// ```
pub fn ratio(numerator: BigInt, denominator: BigInt) -> Option<Probability> {
    if denominator.is_zero() {
        return None;
    }
    Some(BigRational::new(numerator, denominator))
}

/// Lossy conversion for display and logging.
///
/// Never feed the result back into a computation.
pub fn to_f64(p: &Probability) -> f64 {
    p.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_ratio_reduces() {
        let p = ratio(count(4), count(8)).unwrap();
        assert_eq!(*p.numer(), BigInt::from(1));
        assert_eq!(*p.denom(), BigInt::from(2));
    }

    #[test]
    fn test_ratio_rejects_zero_denominator() {
        assert!(ratio(count(0), count(0)).is_none());
    }

    #[test]
    fn test_sum_is_exact() {
        let third = ratio(count(1), count(3)).unwrap();
        let total = &third + &third + &third;
        assert!(total.is_one());
    }

    #[test]
    fn test_to_f64_is_close() {
        let p = ratio(count(1), count(4)).unwrap();
        assert!((to_f64(&p) - 0.25).abs() < 1e-12);
    }
}
