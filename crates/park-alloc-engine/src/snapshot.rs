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
use park_alloc_core::{FloorId, SpotCount};
use park_alloc_model::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorSnapshot {
    pub floor: FloorId,
    pub free: SpotCount,
    pub occupied: SpotCount,
    /// Occupant of each spot by index; `None` for free spots.
    pub spots: Vec<Option<Plate>>,
}

impl From<&Floor> for FloorSnapshot {
    fn from(floor: &Floor) -> Self {
        Self {
            floor: floor.id(),
            free: floor.free_count(),
            occupied: floor.occupied_count(),
            spots: floor.spots().iter().map(|s| s.occupant().cloned()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkedVehicle {
    pub plate: Plate,
    pub class: VehicleClass,
    pub location: Location,
}

/// A point-in-time copy of the lot's occupancy, taken under the lot's lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotSnapshot {
    pub num_floors: usize,
    pub spots_per_floor: usize,
    pub capacity: SpotCount,
    pub free: SpotCount,
    pub floors: Vec<FloorSnapshot>,
    /// Sorted by plate.
    pub parked: Vec<ParkedVehicle>,
}

impl LotSnapshot {
    pub(crate) fn capture(config: &LotConfig, floors: &[Floor], ledger: &ParkingLedger) -> Self {
        let floors: Vec<FloorSnapshot> = floors.iter().map(FloorSnapshot::from).collect();
        let free = floors.iter().map(|f| f.free).sum();
        let mut parked: Vec<ParkedVehicle> = ledger
            .iter()
            .map(|(vehicle, location)| ParkedVehicle {
                plate: vehicle.plate().clone(),
                class: vehicle.class(),
                location,
            })
            .collect();
        parked.sort_by(|a, b| a.plate.cmp(&b.plate));
        Self {
            num_floors: config.num_floors(),
            spots_per_floor: config.spots_per_floor(),
            capacity: config.capacity(),
            free,
            floors,
            parked,
        }
    }

    #[inline]
    pub fn occupied(&self) -> SpotCount {
        self.capacity - self.free
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::{SpotIndex, SpotRun};

    fn plate(s: &str) -> Plate {
        Plate::new(s).unwrap()
    }

    #[test]
    fn test_capture_reflects_floors_and_ledger() {
        let config = LotConfig::new(2, 3).unwrap();
        let mut floors = vec![Floor::new(FloorId::new(0), 3), Floor::new(FloorId::new(1), 3)];
        let mut ledger = ParkingLedger::new();
        let run = SpotRun::new(SpotIndex::new(1), SpotCount::new(2));
        floors[1].commit(&plate("T"), run).unwrap();
        ledger
            .commit(
                Vehicle::new(plate("T"), VehicleClass::Truck),
                Location::new(FloorId::new(1), run),
            )
            .unwrap();

        let snap = LotSnapshot::capture(&config, &floors, &ledger);
        assert_eq!(snap.capacity, SpotCount::new(6));
        assert_eq!(snap.free, SpotCount::new(4));
        assert_eq!(snap.occupied(), SpotCount::new(2));
        assert!(!snap.is_full());
        assert_eq!(snap.floors[0].free, SpotCount::new(3));
        assert_eq!(snap.floors[1].spots, vec![None, Some(plate("T")), Some(plate("T"))]);
        assert_eq!(snap.parked.len(), 1);
        assert_eq!(snap.parked[0].class, VehicleClass::Truck);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let config = LotConfig::new(1, 2).unwrap();
        let mut floors = vec![Floor::new(FloorId::new(0), 2)];
        let mut ledger = ParkingLedger::new();
        let run = SpotRun::single(SpotIndex::new(0));
        floors[0].commit(&plate("B1"), run).unwrap();
        ledger
            .commit(
                Vehicle::new(plate("B1"), VehicleClass::Bike),
                Location::new(FloorId::new(0), run),
            )
            .unwrap();

        let json = serde_json::to_value(LotSnapshot::capture(&config, &floors, &ledger)).unwrap();
        assert_eq!(json["free"], 1);
        assert_eq!(json["floors"][0]["spots"], serde_json::json!(["B1", null]));
        assert_eq!(json["parked"][0]["plate"], "B1");
        assert_eq!(json["parked"][0]["class"], "Bike");
        assert_eq!(json["parked"][0]["location"]["floor"], 0);
    }
}
