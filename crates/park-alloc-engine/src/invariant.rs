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

use crate::{floor::Floor, ledger::ParkingLedger};
use park_alloc_core::{FloorId, SpotCount, SpotIndex};
use park_alloc_model::prelude::*;
use std::fmt::Display;

/// A broken consistency rule between the floors and the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// A plate appears in only one of the ledger's indices.
    UnpairedPlate { plate: Plate },
    /// A spot's stored address differs from its position.
    MisplacedSpot {
        floor: FloorId,
        position: SpotIndex,
        spot_floor: FloorId,
        spot_index: SpotIndex,
    },
    /// A recorded location names a floor the lot does not have.
    UnknownFloor { plate: Plate, floor: FloorId },
    /// A recorded location covers a different number of spots than the class needs.
    WrongSpotCount {
        plate: Plate,
        expected: SpotCount,
        actual: SpotCount,
    },
    /// The spots on the floor disagree with the recorded location.
    LocationMismatch { plate: Plate, location: Location },
    /// A spot is held by a plate the ledger does not know.
    StrayOccupant {
        floor: FloorId,
        index: SpotIndex,
        plate: Plate,
    },
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InvariantViolation::*;
        match self {
            UnpairedPlate { plate } => {
                write!(f, "Plate {} is missing from one ledger index", plate)
            }
            MisplacedSpot {
                floor,
                position,
                spot_floor,
                spot_index,
            } => write!(
                f,
                "Spot at floor {} position {} claims to be floor {} spot {}",
                floor.value(),
                position.value(),
                spot_floor.value(),
                spot_index.value()
            ),
            UnknownFloor { plate, floor } => write!(
                f,
                "Plate {} is recorded on non-existent floor {}",
                plate,
                floor.value()
            ),
            WrongSpotCount {
                plate,
                expected,
                actual,
            } => write!(
                f,
                "Plate {} holds {} spot(s) but needs {}",
                plate,
                actual.value(),
                expected.value()
            ),
            LocationMismatch { plate, location } => write!(
                f,
                "Spots on the floor do not match the recorded {} of plate {}",
                location, plate
            ),
            StrayOccupant {
                floor,
                index,
                plate,
            } => write!(
                f,
                "Spot {} on floor {} is held by unrecorded plate {}",
                index.value(),
                floor.value(),
                plate
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Checks that every spot agrees with the ledger and vice versa.
///
/// Each recorded location must name an existing floor, cover exactly the
/// class's required spot count, and be held by its plate on exactly those
/// spots. Every occupied spot must belong to a recorded plate. Together these
/// rule out two plates sharing a spot.
pub fn check(floors: &[Floor], ledger: &ParkingLedger) -> Result<(), InvariantViolation> {
    if let Some(plate) = ledger.unpaired_plates().next() {
        return Err(InvariantViolation::UnpairedPlate {
            plate: plate.clone(),
        });
    }

    for (pos, floor) in floors.iter().enumerate() {
        let expected = FloorId::new(pos);
        for (i, spot) in floor.spots().iter().enumerate() {
            if spot.floor() != expected || spot.index() != SpotIndex::new(i) {
                return Err(InvariantViolation::MisplacedSpot {
                    floor: expected,
                    position: SpotIndex::new(i),
                    spot_floor: spot.floor(),
                    spot_index: spot.index(),
                });
            }
            if let Some(plate) = spot.occupant()
                && !ledger.contains(plate.as_str())
            {
                return Err(InvariantViolation::StrayOccupant {
                    floor: expected,
                    index: spot.index(),
                    plate: plate.clone(),
                });
            }
        }
    }

    for (vehicle, location) in ledger.iter() {
        let plate = vehicle.plate();
        let Some(floor) = floors.get(location.floor().value()) else {
            return Err(InvariantViolation::UnknownFloor {
                plate: plate.clone(),
                floor: location.floor(),
            });
        };
        if location.spots().len() != vehicle.required_spots() {
            return Err(InvariantViolation::WrongSpotCount {
                plate: plate.clone(),
                expected: vehicle.required_spots(),
                actual: location.spots().len(),
            });
        }
        if !floor.occupies_exactly(plate, location.spots()) {
            return Err(InvariantViolation::LocationMismatch {
                plate: plate.clone(),
                location,
            });
        }
        let held_elsewhere = floors
            .iter()
            .filter(|f| f.id() != floor.id())
            .any(|f| f.spots().iter().any(|s| s.is_held_by(plate)));
        if held_elsewhere {
            return Err(InvariantViolation::LocationMismatch {
                plate: plate.clone(),
                location,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::SpotRun;

    fn plate(s: &str) -> Plate {
        Plate::new(s).unwrap()
    }

    fn run(start: usize, len: usize) -> SpotRun {
        SpotRun::new(SpotIndex::new(start), SpotCount::new(len))
    }

    fn setup() -> (Vec<Floor>, ParkingLedger) {
        let floors = vec![Floor::new(FloorId::new(0), 4), Floor::new(FloorId::new(1), 4)];
        (floors, ParkingLedger::new())
    }

    fn park(
        floors: &mut [Floor],
        ledger: &mut ParkingLedger,
        p: &str,
        class: VehicleClass,
        floor: usize,
        start: usize,
    ) {
        let r = run(start, class.required_spots().value());
        floors[floor].commit(&plate(p), r).unwrap();
        ledger
            .commit(
                Vehicle::new(plate(p), class),
                Location::new(FloorId::new(floor), r),
            )
            .unwrap();
    }

    #[test]
    fn test_consistent_state_passes() {
        let (mut floors, mut ledger) = setup();
        assert_eq!(check(&floors, &ledger), Ok(()));
        park(&mut floors, &mut ledger, "T", VehicleClass::Truck, 0, 1);
        park(&mut floors, &mut ledger, "C", VehicleClass::Car, 1, 3);
        assert_eq!(check(&floors, &ledger), Ok(()));
    }

    #[test]
    fn test_stray_occupant_detected() {
        let (mut floors, ledger) = setup();
        floors[1].commit(&plate("ghost"), run(2, 1)).unwrap();
        assert_eq!(
            check(&floors, &ledger),
            Err(InvariantViolation::StrayOccupant {
                floor: FloorId::new(1),
                index: SpotIndex::new(2),
                plate: plate("ghost"),
            })
        );
    }

    #[test]
    fn test_location_mismatch_detected() {
        let (mut floors, mut ledger) = setup();
        park(&mut floors, &mut ledger, "T", VehicleClass::Truck, 0, 0);
        floors[0].spot_mut(SpotIndex::new(1)).unwrap().release().unwrap();
        assert!(matches!(
            check(&floors, &ledger),
            Err(InvariantViolation::LocationMismatch { .. })
        ));
    }

    #[test]
    fn test_plate_on_two_floors_detected() {
        let (mut floors, mut ledger) = setup();
        park(&mut floors, &mut ledger, "B", VehicleClass::Bike, 0, 0);
        floors[1].commit(&plate("B"), run(0, 1)).unwrap();
        assert!(matches!(
            check(&floors, &ledger),
            Err(InvariantViolation::LocationMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_spot_count_detected() {
        let (mut floors, mut ledger) = setup();
        floors[0].commit(&plate("T"), run(0, 1)).unwrap();
        ledger
            .commit(
                Vehicle::new(plate("T"), VehicleClass::Truck),
                Location::new(FloorId::new(0), run(0, 1)),
            )
            .unwrap();
        assert_eq!(
            check(&floors, &ledger),
            Err(InvariantViolation::WrongSpotCount {
                plate: plate("T"),
                expected: SpotCount::new(2),
                actual: SpotCount::new(1),
            })
        );
    }

    #[test]
    fn test_unknown_floor_detected() {
        let (floors, mut ledger) = setup();
        ledger
            .commit(
                Vehicle::new(plate("C"), VehicleClass::Car),
                Location::new(FloorId::new(7), run(0, 1)),
            )
            .unwrap();
        assert_eq!(
            check(&floors, &ledger),
            Err(InvariantViolation::UnknownFloor {
                plate: plate("C"),
                floor: FloorId::new(7),
            })
        );
    }
}
