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

use park_alloc_core::{FloorId, SpotIndex, SpotRun};
use serde::Serialize;
use std::fmt::Display;

/// Where a vehicle is parked: a floor and the contiguous spots it occupies there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    floor: FloorId,
    spots: SpotRun,
}

impl Location {
    #[inline]
    pub fn new(floor: FloorId, spots: SpotRun) -> Self {
        Self { floor, spots }
    }

    #[inline]
    pub fn floor(&self) -> FloorId {
        self.floor
    }

    #[inline]
    pub fn spots(&self) -> SpotRun {
        self.spots
    }

    /// The occupied spot indices in ascending order.
    #[inline]
    pub fn spot_indices(&self) -> Vec<SpotIndex> {
        self.spots.to_vec()
    }

    #[inline]
    pub fn overlaps(&self, other: &Location) -> bool {
        self.floor == other.floor && self.spots.intersects(&other.spots)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "floor {}, spot(s)", self.floor.value())?;
        for idx in self.spots.indices() {
            write!(f, " {}", idx.value())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::SpotCount;

    fn loc(floor: usize, start: usize, len: usize) -> Location {
        Location::new(
            FloorId::new(floor),
            SpotRun::new(SpotIndex::new(start), SpotCount::new(len)),
        )
    }

    #[test]
    fn test_spot_indices_ascending() {
        assert_eq!(
            loc(0, 1, 2).spot_indices(),
            vec![SpotIndex::new(1), SpotIndex::new(2)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(loc(1, 3, 2).to_string(), "floor 1, spot(s) 3 4");
        assert_eq!(loc(0, 0, 1).to_string(), "floor 0, spot(s) 0");
    }

    #[test]
    fn test_overlaps_requires_same_floor() {
        assert!(loc(0, 0, 2).overlaps(&loc(0, 1, 1)));
        assert!(!loc(0, 0, 2).overlaps(&loc(1, 0, 2)));
        assert!(!loc(0, 0, 2).overlaps(&loc(0, 2, 2)));
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(loc(1, 2, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "floor": 1, "spots": { "start": 2, "len": 2 } })
        );
    }
}
