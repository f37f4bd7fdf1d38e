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

use crate::spot::Spot;
use park_alloc_core::{FloorId, SpotCount, SpotIndex, SpotRun};
use park_alloc_model::prelude::*;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FloorCommitError {
    EmptyRun {
        floor: FloorId,
    },
    OutOfBounds {
        floor: FloorId,
        run: SpotRun,
        spots: SpotCount,
    },
    SpotTaken {
        floor: FloorId,
        index: SpotIndex,
    },
}

impl Display for FloorCommitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloorCommitError::EmptyRun { floor } => {
                write!(f, "Empty placement on floor {}", floor.value())
            }
            FloorCommitError::OutOfBounds { floor, run, spots } => write!(
                f,
                "Placement {} exceeds floor {} with {} spots",
                run,
                floor.value(),
                spots.value()
            ),
            FloorCommitError::SpotTaken { floor, index } => write!(
                f,
                "Spot {} on floor {} is no longer free",
                index.value(),
                floor.value()
            ),
        }
    }
}

impl std::error::Error for FloorCommitError {}

/// An ordered row of spots. "Contiguous" always means adjacent indices on one floor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Floor {
    id: FloorId,
    spots: Vec<Spot>,
}

impl Floor {
    pub fn new(id: FloorId, spots_per_floor: usize) -> Self {
        let spots = (0..spots_per_floor)
            .map(|i| Spot::new(id, SpotIndex::new(i)))
            .collect();
        Self { id, spots }
    }

    #[inline]
    pub fn id(&self) -> FloorId {
        self.id
    }

    #[inline]
    pub fn len(&self) -> SpotCount {
        SpotCount::new(self.spots.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    #[inline]
    pub fn spot(&self, index: SpotIndex) -> Option<&Spot> {
        self.spots.get(index.value())
    }

    #[cfg(test)]
    pub(crate) fn spot_mut(&mut self, index: SpotIndex) -> Option<&mut Spot> {
        self.spots.get_mut(index.value())
    }

    /// Maximal runs of free spots at least `min_len` long, in ascending order.
    #[inline]
    pub fn iter_free_runs(&self, min_len: SpotCount) -> FreeRunIter<'_> {
        FreeRunIter {
            spots: &self.spots,
            cur: 0,
            min_len,
        }
    }

    /// Proposes the first fit for `required` contiguous spots: the smallest
    /// starting index `j` such that `j..j + required` are all free.
    ///
    /// Returns `None` when nothing fits, including for `required == 0`.
    /// Never mutates the floor.
    pub fn find_available(&self, required: SpotCount) -> Option<SpotRun> {
        if required.is_zero() || required > self.len() {
            return None;
        }
        self.iter_free_runs(required)
            .next()
            .map(|run| SpotRun::new(run.start(), required))
    }

    /// Re-checks a proposal and assigns every spot in it to `plate`.
    ///
    /// Either all spots are assigned or none is.
    pub fn commit(&mut self, plate: &Plate, run: SpotRun) -> Result<(), FloorCommitError> {
        if run.is_empty() {
            return Err(FloorCommitError::EmptyRun { floor: self.id });
        }
        if run.end() > SpotIndex::zero() + self.len() {
            return Err(FloorCommitError::OutOfBounds {
                floor: self.id,
                run,
                spots: self.len(),
            });
        }
        if let Some(taken) = run.indices().find(|i| !self.spots[i.value()].is_free()) {
            return Err(FloorCommitError::SpotTaken {
                floor: self.id,
                index: taken,
            });
        }
        for idx in run.indices() {
            self.spots[idx.value()]
                .assign(plate.clone())
                .map_err(|_| FloorCommitError::SpotTaken {
                    floor: self.id,
                    index: idx,
                })?;
        }
        Ok(())
    }

    /// Frees every spot held by `plate` and reports how many there were.
    pub fn release_plate(&mut self, plate: &Plate) -> SpotCount {
        let mut released = SpotCount::zero();
        for spot in self.spots.iter_mut().filter(|s| s.is_held_by(plate)) {
            if spot.release().is_ok() {
                released += SpotCount::new(1);
            }
        }
        released
    }

    /// `true` iff `plate` holds exactly the spots of `run` on this floor and no others.
    pub fn occupies_exactly(&self, plate: &Plate, run: SpotRun) -> bool {
        if run.is_empty() || run.end() > SpotIndex::zero() + self.len() {
            return false;
        }
        self.spots
            .iter()
            .all(|spot| spot.is_held_by(plate) == run.contains(spot.index()))
    }

    #[inline]
    pub fn free_count(&self) -> SpotCount {
        SpotCount::new(self.spots.iter().filter(|s| s.is_free()).count())
    }

    #[inline]
    pub fn occupied_count(&self) -> SpotCount {
        self.len() - self.free_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.spots.iter().all(|s| !s.is_free())
    }
}

pub struct FreeRunIter<'a> {
    spots: &'a [Spot],
    cur: usize,
    min_len: SpotCount,
}

impl<'a> Iterator for FreeRunIter<'a> {
    type Item = SpotRun;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.spots.len();
        loop {
            let mut i = self.cur;
            while i < end && !self.spots[i].is_free() {
                i += 1;
            }
            if i >= end {
                self.cur = end;
                return None;
            }

            let run_start = i;
            while i < end && self.spots[i].is_free() {
                i += 1;
            }
            self.cur = i;

            let run_len = SpotCount::new(i - run_start);
            if run_len >= self.min_len {
                return Some(SpotRun::new(SpotIndex::new(run_start), run_len));
            }
        }
    }
}

impl std::iter::FusedIterator for FreeRunIter<'_> {}
