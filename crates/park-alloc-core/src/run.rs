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

use crate::index::{SpotCount, SpotIndex};
use serde::Serialize;
use std::iter::FusedIterator;

/// A contiguous block of spots on one floor, covering `[start, start + len)`.
///
/// Every placement the engine makes is a `SpotRun`, so the indices a vehicle
/// occupies are always distinct, ascending and consecutive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct SpotRun {
    start: SpotIndex,
    len: SpotCount,
}

impl SpotRun {
    #[inline]
    pub const fn new(start: SpotIndex, len: SpotCount) -> Self {
        Self { start, len }
    }

    #[inline]
    pub const fn single(index: SpotIndex) -> Self {
        Self {
            start: index,
            len: SpotCount::new(1),
        }
    }

    #[inline]
    pub const fn start(&self) -> SpotIndex {
        self.start
    }

    /// Exclusive end of the run.
    #[inline]
    pub fn end(&self) -> SpotIndex {
        self.start + self.len
    }

    /// The last index covered by the run, or `None` for an empty run.
    #[inline]
    pub fn last(&self) -> Option<SpotIndex> {
        if self.len.is_zero() {
            return None;
        }
        Some(SpotIndex::new(self.start.value() + self.len.value() - 1))
    }

    #[inline]
    pub const fn len(&self) -> SpotCount {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len.is_zero()
    }

    #[inline]
    pub fn contains(&self, index: SpotIndex) -> bool {
        self.start <= index && index < self.end()
    }

    #[inline]
    pub fn intersects(&self, other: &SpotRun) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end()
            && other.start < self.end()
    }

    /// Ascending iterator over the covered indices.
    #[inline]
    pub fn indices(&self) -> SpotRunIter {
        SpotRunIter {
            next: self.start.value(),
            end: self.end().value(),
        }
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<SpotIndex> {
        self.indices().collect()
    }
}

impl std::fmt::Display for SpotRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.value(), self.end().value())
    }
}

impl IntoIterator for SpotRun {
    type Item = SpotIndex;
    type IntoIter = SpotRunIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.indices()
    }
}

#[derive(Clone, Debug)]
pub struct SpotRunIter {
    next: usize,
    end: usize,
}

impl Iterator for SpotRunIter {
    type Item = SpotIndex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let idx = SpotIndex::new(self.next);
        self.next += 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SpotRunIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(SpotIndex::new(self.end))
    }
}

impl ExactSizeIterator for SpotRunIter {}
impl FusedIterator for SpotRunIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(start: usize, len: usize) -> SpotRun {
        SpotRun::new(SpotIndex::new(start), SpotCount::new(len))
    }

    #[test]
    fn test_single_run() {
        let r = SpotRun::single(SpotIndex::new(4));
        assert_eq!(r.start(), SpotIndex::new(4));
        assert_eq!(r.end(), SpotIndex::new(5));
        assert_eq!(r.last(), Some(SpotIndex::new(4)));
        assert_eq!(r.len(), SpotCount::new(1));
    }

    #[test]
    fn test_empty_run() {
        let r = run(3, 0);
        assert!(r.is_empty());
        assert_eq!(r.last(), None);
        assert_eq!(r.indices().count(), 0);
        assert!(!r.contains(SpotIndex::new(3)));
    }

    #[test]
    fn test_indices_are_ascending_and_consecutive() {
        let r = run(2, 3);
        assert_eq!(
            r.to_vec(),
            vec![SpotIndex::new(2), SpotIndex::new(3), SpotIndex::new(4)]
        );
        assert_eq!(r.indices().len(), 3);
        assert_eq!(
            r.indices().rev().collect::<Vec<_>>(),
            vec![SpotIndex::new(4), SpotIndex::new(3), SpotIndex::new(2)]
        );
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = run(1, 2);
        assert!(!r.contains(SpotIndex::new(0)));
        assert!(r.contains(SpotIndex::new(1)));
        assert!(r.contains(SpotIndex::new(2)));
        assert!(!r.contains(SpotIndex::new(3)));
    }

    #[test]
    fn test_intersects() {
        assert!(run(0, 2).intersects(&run(1, 2)));
        assert!(!run(0, 2).intersects(&run(2, 2)));
        assert!(!run(0, 0).intersects(&run(0, 2)));
        assert!(run(3, 1).intersects(&run(0, 10)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", run(1, 2)), "[1, 3)");
    }

    #[test]
    fn test_into_iter() {
        let collected: Vec<usize> = run(5, 2).into_iter().map(|i| i.value()).collect();
        assert_eq!(collected, vec![5, 6]);
    }
}
