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

use crate::{id::Plate, location::Location, vehicle::VehicleClass};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicatePlateError {
    plate: Plate,
}

impl DuplicatePlateError {
    #[inline]
    pub fn new(plate: Plate) -> Self {
        Self { plate }
    }

    #[inline]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }
}

impl Display for DuplicatePlateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vehicle {} is already parked", self.plate)
    }
}

impl std::error::Error for DuplicatePlateError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LotFullError {
    plate: Plate,
    class: VehicleClass,
}

impl LotFullError {
    #[inline]
    pub fn new(plate: Plate, class: VehicleClass) -> Self {
        Self { plate, class }
    }

    #[inline]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    #[inline]
    pub fn class(&self) -> VehicleClass {
        self.class
    }
}

impl Display for LotFullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No floor has {} contiguous free spot(s) for {} {}",
            self.class.required_spots().value(),
            self.class,
            self.plate
        )
    }
}

impl std::error::Error for LotFullError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleNotFoundError {
    plate: Plate,
}

impl VehicleNotFoundError {
    #[inline]
    pub fn new(plate: Plate) -> Self {
        Self { plate }
    }

    #[inline]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }
}

impl Display for VehicleNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vehicle {} not found", self.plate)
    }
}

impl std::error::Error for VehicleNotFoundError {}

/// The recorded location of a plate disagrees with the spots on its floor.
///
/// Only a bug inside the engine can produce this; correct callers never see it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorruptedStateError {
    plate: Plate,
    location: Location,
    detail: String,
}

impl CorruptedStateError {
    #[inline]
    pub fn new(plate: Plate, location: Location, detail: impl Into<String>) -> Self {
        Self {
            plate,
            location,
            detail: detail.into(),
        }
    }

    #[inline]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl Display for CorruptedStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Corrupted state for vehicle {} recorded at {}: {}",
            self.plate, self.location, self.detail
        )
    }
}

impl std::error::Error for CorruptedStateError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParkError {
    DuplicatePlate(DuplicatePlateError),
    Full(LotFullError),
}

impl ParkError {
    #[inline]
    pub fn plate(&self) -> &Plate {
        match self {
            ParkError::DuplicatePlate(e) => e.plate(),
            ParkError::Full(e) => e.plate(),
        }
    }
}

impl Display for ParkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkError::DuplicatePlate(e) => write!(f, "{e}"),
            ParkError::Full(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParkError {}

impl From<DuplicatePlateError> for ParkError {
    fn from(err: DuplicatePlateError) -> Self {
        Self::DuplicatePlate(err)
    }
}

impl From<LotFullError> for ParkError {
    fn from(err: LotFullError) -> Self {
        Self::Full(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RemoveError {
    NotFound(VehicleNotFoundError),
    Corrupted(CorruptedStateError),
}

impl RemoveError {
    #[inline]
    pub fn plate(&self) -> &Plate {
        match self {
            RemoveError::NotFound(e) => e.plate(),
            RemoveError::Corrupted(e) => e.plate(),
        }
    }
}

impl Display for RemoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveError::NotFound(e) => write!(f, "{e}"),
            RemoveError::Corrupted(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RemoveError {}

impl From<VehicleNotFoundError> for RemoveError {
    fn from(err: VehicleNotFoundError) -> Self {
        Self::NotFound(err)
    }
}

impl From<CorruptedStateError> for RemoveError {
    fn from(err: CorruptedStateError) -> Self {
        Self::Corrupted(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::{FloorId, SpotCount, SpotIndex, SpotRun};

    fn plate(s: &str) -> Plate {
        Plate::new(s).unwrap()
    }

    #[test]
    fn test_park_error_display_delegates() {
        let dup: ParkError = DuplicatePlateError::new(plate("X")).into();
        assert_eq!(dup.to_string(), "Vehicle X is already parked");
        assert_eq!(dup.plate().as_str(), "X");

        let full: ParkError = LotFullError::new(plate("T"), VehicleClass::Truck).into();
        assert_eq!(
            full.to_string(),
            "No floor has 2 contiguous free spot(s) for Truck T"
        );
    }

    #[test]
    fn test_remove_error_display_delegates() {
        let nf: RemoveError = VehicleNotFoundError::new(plate("Z")).into();
        assert_eq!(nf.to_string(), "Vehicle Z not found");

        let loc = Location::new(
            FloorId::new(0),
            SpotRun::new(SpotIndex::new(1), SpotCount::new(2)),
        );
        let corrupted: RemoveError =
            CorruptedStateError::new(plate("C"), loc, "spot 1 is free").into();
        assert_eq!(corrupted.plate().as_str(), "C");
        assert_eq!(
            corrupted.to_string(),
            "Corrupted state for vehicle C recorded at floor 0, spot(s) 1 2: spot 1 is free"
        );
    }
}
