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

use crate::id::Plate;
use park_alloc_core::SpotCount;
use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// Size class of a vehicle.
///
/// The class alone decides how many contiguous spots a vehicle needs; adding a
/// class means adding a variant here and its arm in [`VehicleClass::required_spots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VehicleClass {
    Bike,
    Car,
    Truck,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Bike, VehicleClass::Car, VehicleClass::Truck];

    #[inline]
    pub const fn required_spots(self) -> SpotCount {
        match self {
            VehicleClass::Bike | VehicleClass::Car => SpotCount::new(1),
            VehicleClass::Truck => SpotCount::new(2),
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            VehicleClass::Bike => "Bike",
            VehicleClass::Car => "Car",
            VehicleClass::Truck => "Truck",
        }
    }
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleClass {
    type Err = UnknownClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| UnknownClassError::new(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownClassError {
    given: String,
}

impl UnknownClassError {
    #[inline]
    pub fn new(given: impl Into<String>) -> Self {
        Self {
            given: given.into(),
        }
    }

    #[inline]
    pub fn given(&self) -> &str {
        &self.given
    }
}

impl Display for UnknownClassError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown vehicle type '{}' (expected one of Bike, Car, Truck)",
            self.given
        )
    }
}

impl std::error::Error for UnknownClassError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Vehicle {
    plate: Plate,
    class: VehicleClass,
}

impl Vehicle {
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

    #[inline]
    pub fn required_spots(&self) -> SpotCount {
        self.class.required_spots()
    }
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.class, self.plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_spots_per_class() {
        assert_eq!(VehicleClass::Bike.required_spots(), SpotCount::new(1));
        assert_eq!(VehicleClass::Car.required_spots(), SpotCount::new(1));
        assert_eq!(VehicleClass::Truck.required_spots(), SpotCount::new(2));
    }

    #[test]
    fn test_parse_known_classes() {
        assert_eq!("Bike".parse::<VehicleClass>(), Ok(VehicleClass::Bike));
        assert_eq!("Car".parse::<VehicleClass>(), Ok(VehicleClass::Car));
        assert_eq!("Truck".parse::<VehicleClass>(), Ok(VehicleClass::Truck));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "truck".parse::<VehicleClass>().unwrap_err();
        assert_eq!(err.given(), "truck");
        assert!("CAR".parse::<VehicleClass>().is_err());
        assert!("Bus".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for class in VehicleClass::ALL {
            assert_eq!(class.to_string().parse::<VehicleClass>(), Ok(class));
        }
    }

    #[test]
    fn test_vehicle_delegates_to_class() {
        let v = Vehicle::new(Plate::new("T1").unwrap(), VehicleClass::Truck);
        assert_eq!(v.required_spots(), SpotCount::new(2));
        assert_eq!(v.plate().as_str(), "T1");
        assert_eq!(v.to_string(), "Truck T1");
    }
}
