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

use park_alloc_core::SpotCount;
use std::fmt::Display;

/// Dimensions of a parking lot. Fixed for the lifetime of the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LotConfig {
    num_floors: usize,
    spots_per_floor: usize,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            num_floors: 1,
            spots_per_floor: 10,
        }
    }
}

impl LotConfig {
    /// Both dimensions must be at least one; a floor without spots would make
    /// every contiguous search degenerate.
    pub fn new(num_floors: usize, spots_per_floor: usize) -> Result<Self, LotConfigBuildError> {
        if num_floors == 0 {
            return Err(LotConfigBuildError::ZeroFloors);
        }
        if spots_per_floor == 0 {
            return Err(LotConfigBuildError::ZeroSpotsPerFloor);
        }
        num_floors
            .checked_mul(spots_per_floor)
            .ok_or(LotConfigBuildError::CapacityOverflow)?;
        Ok(Self {
            num_floors,
            spots_per_floor,
        })
    }

    #[inline]
    pub fn num_floors(&self) -> usize {
        self.num_floors
    }

    #[inline]
    pub fn spots_per_floor(&self) -> usize {
        self.spots_per_floor
    }

    #[inline]
    pub fn capacity(&self) -> SpotCount {
        SpotCount::new(self.num_floors * self.spots_per_floor)
    }
}

impl Display for LotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LotConfig {{ num_floors: {}, spots_per_floor: {} }}",
            self.num_floors, self.spots_per_floor
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotConfigBuildError {
    MissingNumFloors,
    MissingSpotsPerFloor,
    ZeroFloors,
    ZeroSpotsPerFloor,
    CapacityOverflow,
}

impl Display for LotConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LotConfigBuildError::*;
        match self {
            MissingNumFloors => write!(f, "Missing num_floors"),
            MissingSpotsPerFloor => write!(f, "Missing spots_per_floor"),
            ZeroFloors => write!(f, "num_floors must be at least 1"),
            ZeroSpotsPerFloor => write!(f, "spots_per_floor must be at least 1"),
            CapacityOverflow => write!(f, "num_floors * spots_per_floor overflows"),
        }
    }
}

impl std::error::Error for LotConfigBuildError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LotConfigBuilder {
    num_floors: Option<usize>,
    spots_per_floor: Option<usize>,
}

impl LotConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn num_floors(mut self, v: usize) -> Self {
        self.num_floors = Some(v);
        self
    }

    #[inline]
    pub fn spots_per_floor(mut self, v: usize) -> Self {
        self.spots_per_floor = Some(v);
        self
    }

    pub fn build(self) -> Result<LotConfig, LotConfigBuildError> {
        let num_floors = self
            .num_floors
            .ok_or(LotConfigBuildError::MissingNumFloors)?;
        let spots_per_floor = self
            .spots_per_floor
            .ok_or(LotConfigBuildError::MissingSpotsPerFloor)?;
        LotConfig::new(num_floors, spots_per_floor)
    }
}
