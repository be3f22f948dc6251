//! Capability bound for values a generator may draw

use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;

/// An arithmetic type that can be drawn uniformly from an inclusive range
/// and mapped from a unit-interval position onto such a range.
///
/// Implemented for every primitive integer up to 64 bits and for `f32`/`f64`.
/// Passing anything else to a generator is a compile error.
pub trait Numeric: num_traits::Num + Copy + PartialOrd + SampleUniform + Debug {
    /// Map `p` in `[0, 1]` onto `[min, max]`.
    ///
    /// Integers take the floor of `p * (max - min + 1)` and clamp to `max`,
    /// so every value in the range owns an equal slice of the unit interval.
    fn from_unit(min: Self, max: Self, p: f64) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn from_unit(min: Self, max: Self, p: f64) -> Self {
                    let span = max as i128 - min as i128;
                    let offset = ((span + 1) as f64 * p) as i128;
                    (min as i128 + offset.clamp(0, span)) as $t
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn from_unit(min: Self, max: Self, p: f64) -> Self {
                    (min + (max - min) * p as $t).clamp(min, max)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);
