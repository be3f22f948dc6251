//! Uniform and skewed draws
//!
//! A skew `t` biases a draw toward the top of its range when positive and
//! toward the bottom when negative. For small `|t|` the draw is the max (or
//! min) of `|t| + 1` uniform draws; past [`LINEAR_SKEW_LIMIT`] the same
//! distribution is produced in closed form so huge skews stay O(1).

use super::Numeric;
use rand::Rng;

/// Skews at or above this magnitude use the closed-form draw
pub const LINEAR_SKEW_LIMIT: u32 = 25;

/// Extension methods for any [`Rng`] handle
pub trait WeightedRng: Rng {
    /// Uniform draw from the inclusive range `[min, max]`
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn uniform<T: Numeric>(&mut self, min: T, max: T) -> T {
        self.gen_range(min..=max)
    }

    /// Skewed position in `[0, 1]`
    fn weighted_unit(&mut self, t: i32) -> f64 {
        if t.unsigned_abs() < LINEAR_SKEW_LIMIT {
            let mut result: f64 = self.gen();
            for _ in 0..t.unsigned_abs() {
                let draw: f64 = self.gen();
                result = if t > 0 { result.max(draw) } else { result.min(draw) };
            }
            result
        } else if t > 0 {
            self.gen::<f64>().powf(1.0 / (f64::from(t) + 1.0))
        } else {
            1.0 - self.gen::<f64>().powf(1.0 / (-f64::from(t) + 1.0))
        }
    }

    /// Skewed draw from the inclusive range `[min, max]`
    ///
    /// `t == 0` is uniform.
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn weighted<T: Numeric>(&mut self, min: T, max: T, t: i32) -> T {
        if t.unsigned_abs() >= LINEAR_SKEW_LIMIT {
            assert!(min <= max, "empty range {min:?}..={max:?}");
            return T::from_unit(min, max, self.weighted_unit(t));
        }

        let mut result = self.uniform(min, max);
        for _ in 0..t.unsigned_abs() {
            let draw = self.uniform(min, max);
            if (t > 0 && draw > result) || (t < 0 && draw < result) {
                result = draw;
            }
        }
        result
    }

    /// Skewed index in `[0, n)`
    ///
    /// # Panics
    /// Panics if `n == 0`.
    fn weighted_below(&mut self, n: usize, t: i32) -> usize {
        assert!(n > 0, "cannot draw an index below 0");
        self.weighted(0, n - 1, t)
    }
}

impl<R: Rng + ?Sized> WeightedRng for R {}
