// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{CheckedAdd, CheckedSub, Zero};
use serde::Serialize;
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct FloorId(usize);

impl FloorId {
    #[inline]
    pub const fn new(v: usize) -> Self {
        FloorId(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for FloorId {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FloorId({})", self.0)
    }
}

impl From<usize> for FloorId {
    #[inline]
    fn from(v: usize) -> Self {
        FloorId(v)
    }
}

/// Position of a spot within its floor, dense in `[0, spots_per_floor)`.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SpotIndex(usize);

impl SpotIndex {
    #[inline]
    pub const fn new(v: usize) -> Self {
        SpotIndex(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        SpotIndex(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub fn checked_add(self, count: SpotCount) -> Option<Self> {
        self.0.checked_add(count.0).map(SpotIndex)
    }

    #[inline]
    pub fn checked_sub(self, count: SpotCount) -> Option<Self> {
        self.0.checked_sub(count.0).map(SpotIndex)
    }

    /// The index directly after this one.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(SpotIndex)
    }
}

impl std::fmt::Display for SpotIndex {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpotIndex({})", self.0)
    }
}

impl From<usize> for SpotIndex {
    #[inline]
    fn from(v: usize) -> Self {
        SpotIndex(v)
    }
}

impl Add<SpotCount> for SpotIndex {
    type Output = SpotIndex;

    #[inline]
    fn add(self, rhs: SpotCount) -> Self::Output {
        SpotIndex(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in SpotIndex + SpotCount"),
        )
    }
}

impl Sub<SpotIndex> for SpotIndex {
    type Output = SpotCount;

    #[inline]
    fn sub(self, rhs: SpotIndex) -> Self::Output {
        SpotCount::new(self.0.abs_diff(rhs.0))
    }
}

impl AddAssign<SpotCount> for SpotIndex {
    #[inline]
    fn add_assign(&mut self, rhs: SpotCount) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in SpotIndex += SpotCount");
    }
}

/// A number of spots: free spots on a floor, the spots a vehicle needs, and so on.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SpotCount(usize);

impl SpotCount {
    #[inline]
    pub const fn new(v: usize) -> Self {
        SpotCount(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        SpotCount(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_mul(self, rhs: usize) -> Option<Self> {
        self.0.checked_mul(rhs).map(SpotCount)
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        SpotCount(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Display for SpotCount {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpotCount({})", self.0)
    }
}

impl From<usize> for SpotCount {
    #[inline]
    fn from(v: usize) -> Self {
        SpotCount(v)
    }
}

impl Zero for SpotCount {
    #[inline]
    fn zero() -> Self {
        SpotCount::new(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for SpotCount {
    type Output = SpotCount;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        SpotCount(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in SpotCount + SpotCount"),
        )
    }
}

impl CheckedAdd for SpotCount {
    #[inline]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(SpotCount)
    }
}

impl Sub for SpotCount {
    type Output = SpotCount;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        SpotCount(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in SpotCount - SpotCount"),
        )
    }
}

impl CheckedSub for SpotCount {
    #[inline]
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(SpotCount)
    }
}

impl AddAssign for SpotCount {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in SpotCount += SpotCount");
    }
}

impl SubAssign for SpotCount {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(rhs.0)
            .expect("underflow in SpotCount -= SpotCount");
    }
}

impl Sum for SpotCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a SpotCount> for SpotCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_id_display() {
        assert_eq!(format!("{}", FloorId::new(3)), "FloorId(3)");
    }

    #[test]
    fn test_spot_index_from() {
        let idx: SpotIndex = 7usize.into();
        assert_eq!(idx.value(), 7);
    }

    #[test]
    fn test_spot_index_add_count() {
        let idx = SpotIndex::new(2) + SpotCount::new(3);
        assert_eq!(idx, SpotIndex::new(5));
    }

    #[test]
    fn test_spot_index_sub_yields_distance() {
        assert_eq!(SpotIndex::new(5) - SpotIndex::new(2), SpotCount::new(3));
        assert_eq!(SpotIndex::new(2) - SpotIndex::new(5), SpotCount::new(3));
    }

    #[test]
    fn test_spot_index_checked_ops() {
        assert_eq!(SpotIndex::new(0).checked_sub(SpotCount::new(1)), None);
        assert_eq!(
            SpotIndex::new(usize::MAX).checked_add(SpotCount::new(1)),
            None
        );
        assert_eq!(SpotIndex::new(usize::MAX).next(), None);
        assert_eq!(SpotIndex::new(4).next(), Some(SpotIndex::new(5)));
    }

    #[test]
    fn test_spot_count_zero() {
        assert!(SpotCount::zero().is_zero());
        assert!(<SpotCount as Zero>::zero().is_zero());
        assert!(!SpotCount::new(1).is_zero());
    }

    #[test]
    fn test_spot_count_arithmetic() {
        let mut c = SpotCount::new(4);
        c += SpotCount::new(2);
        assert_eq!(c, SpotCount::new(6));
        c -= SpotCount::new(5);
        assert_eq!(c, SpotCount::new(1));
        assert_eq!(
            SpotCount::new(1).checked_sub(&SpotCount::new(2)),
            None
        );
        assert_eq!(
            SpotCount::new(1).saturating_sub(SpotCount::new(2)),
            SpotCount::zero()
        );
    }

    #[test]
    fn test_spot_count_sum() {
        let counts = [SpotCount::new(1), SpotCount::new(2), SpotCount::new(3)];
        let owned: SpotCount = counts.iter().copied().sum();
        let borrowed: SpotCount = counts.iter().sum();
        assert_eq!(owned, SpotCount::new(6));
        assert_eq!(borrowed, SpotCount::new(6));
    }

    #[test]
    #[should_panic(expected = "underflow in SpotCount - SpotCount")]
    fn test_spot_count_sub_underflow_panics() {
        let _ = SpotCount::new(0) - SpotCount::new(1);
    }
}
