//! Inclusive range of test indices

use crate::{GenError, Result};
use std::ops::RangeInclusive;

/// Test indices `first..=last`, visited in ascending order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestRange {
    first: u32,
    last: u32,
}

impl TestRange {
    /// Create a range; `first` must not exceed `last`
    pub fn new(first: u32, last: u32) -> Result<Self> {
        if first > last {
            return Err(GenError::InvalidRange { first, last });
        }
        Ok(TestRange { first, last })
    }

    /// First index
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Last index
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of indices
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always false; a range holds at least one index
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl IntoIterator for TestRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.first..=self.last
    }
}
