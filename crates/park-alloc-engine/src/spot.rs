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

use park_alloc_core::{FloorId, SpotIndex};
use park_alloc_model::prelude::*;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SpotState {
    #[default]
    Free,
    Occupied(Plate),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpotError {
    AlreadyOccupied {
        floor: FloorId,
        index: SpotIndex,
        occupant: Plate,
    },
    AlreadyFree {
        floor: FloorId,
        index: SpotIndex,
    },
}

impl Display for SpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotError::AlreadyOccupied {
                floor,
                index,
                occupant,
            } => write!(
                f,
                "Spot {} on floor {} is already occupied by {}",
                index.value(),
                floor.value(),
                occupant
            ),
            SpotError::AlreadyFree { floor, index } => write!(
                f,
                "Spot {} on floor {} is already free",
                index.value(),
                floor.value()
            ),
        }
    }
}

impl std::error::Error for SpotError {}

/// The smallest unit of capacity. Its address never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spot {
    floor: FloorId,
    index: SpotIndex,
    state: SpotState,
}

impl Spot {
    #[inline]
    pub fn new(floor: FloorId, index: SpotIndex) -> Self {
        Self {
            floor,
            index,
            state: SpotState::Free,
        }
    }

    #[inline]
    pub fn floor(&self) -> FloorId {
        self.floor
    }

    #[inline]
    pub fn index(&self) -> SpotIndex {
        self.index
    }

    #[inline]
    pub fn state(&self) -> &SpotState {
        &self.state
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.state, SpotState::Free)
    }

    #[inline]
    pub fn occupant(&self) -> Option<&Plate> {
        match &self.state {
            SpotState::Free => None,
            SpotState::Occupied(plate) => Some(plate),
        }
    }

    #[inline]
    pub fn is_held_by(&self, plate: &Plate) -> bool {
        self.occupant() == Some(plate)
    }

    #[inline]
    pub fn assign(&mut self, plate: Plate) -> Result<(), SpotError> {
        if let SpotState::Occupied(occupant) = &self.state {
            return Err(SpotError::AlreadyOccupied {
                floor: self.floor,
                index: self.index,
                occupant: occupant.clone(),
            });
        }
        self.state = SpotState::Occupied(plate);
        Ok(())
    }

    /// Frees the spot and hands back the plate that held it.
    #[inline]
    pub fn release(&mut self) -> Result<Plate, SpotError> {
        match std::mem::take(&mut self.state) {
            SpotState::Occupied(plate) => Ok(plate),
            SpotState::Free => Err(SpotError::AlreadyFree {
                floor: self.floor,
                index: self.index,
            }),
        }
    }
}
