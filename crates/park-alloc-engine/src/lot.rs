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

use crate::{
    floor::Floor,
    invariant::{self, InvariantViolation},
    ledger::ParkingLedger,
    snapshot::LotSnapshot,
};
use park_alloc_core::{FloorId, SpotCount};
use park_alloc_model::prelude::*;
use parking_lot::Mutex;
use tracing::{debug, instrument, trace};

/// Everything the lot's lock guards.
///
/// Field order is drop order: vehicle records go first, then floors and
/// their spots.
#[derive(Debug)]
struct LotState {
    ledger: ParkingLedger,
    floors: Vec<Floor>,
}

/// A multi-floor parking lot that may be shared between threads.
///
/// Every operation takes one lot-wide lock for its whole duration, so
/// operations are linearizable and a failed `park` never leaves a spot or an
/// index entry behind. The work done under the lock is bounded by the number
/// of spots in the lot.
///
/// Placement is first fit: the lowest floor, then the lowest starting index
/// on that floor, that has enough contiguous free spots for the vehicle.
#[derive(Debug)]
pub struct Lot {
    config: LotConfig,
    state: Mutex<LotState>,
}

impl Lot {
    pub fn new(config: LotConfig) -> Self {
        let floors = (0..config.num_floors())
            .map(|i| Floor::new(FloorId::new(i), config.spots_per_floor()))
            .collect();
        Self {
            config,
            state: Mutex::new(LotState {
                ledger: ParkingLedger::new(),
                floors,
            }),
        }
    }

    #[inline]
    pub fn with_dimensions(
        num_floors: usize,
        spots_per_floor: usize,
    ) -> Result<Self, LotConfigBuildError> {
        LotConfig::new(num_floors, spots_per_floor).map(Self::new)
    }

    #[inline]
    pub fn config(&self) -> LotConfig {
        self.config
    }

    #[inline]
    pub fn num_floors(&self) -> usize {
        self.config.num_floors()
    }

    #[inline]
    pub fn spots_per_floor(&self) -> usize {
        self.config.spots_per_floor()
    }

    #[inline]
    pub fn capacity(&self) -> SpotCount {
        self.config.capacity()
    }

    /// Parks `vehicle` at the first fit and takes ownership of it.
    ///
    /// Fails with [`ParkError::DuplicatePlate`] if the plate is already parked
    /// and with [`ParkError::Full`] if no floor has enough contiguous free
    /// spots. On failure nothing changes and the vehicle is dropped.
    #[instrument(level = "debug", skip_all, fields(plate = %vehicle.plate(), class = %vehicle.class()))]
    pub fn park(&self, vehicle: Vehicle) -> Result<Location, ParkError> {
        let mut state = self.state.lock();
        let LotState { ledger, floors } = &mut *state;

        let plate = vehicle.plate().clone();
        if ledger.contains(plate.as_str()) {
            return Err(DuplicatePlateError::new(plate).into());
        }

        let required = vehicle.required_spots();
        for floor in floors.iter_mut() {
            let Some(proposal) = floor.find_available(required) else {
                continue;
            };
            trace!(floor = floor.id().value(), run = %proposal, "floor proposed placement");

            if let Err(e) = floor.commit(&plate, proposal) {
                trace!(floor = floor.id().value(), error = %e, "proposal rejected on commit");
                continue;
            }

            let location = Location::new(floor.id(), proposal);
            return match ledger.commit(vehicle, location) {
                Ok(()) => {
                    debug!(%location, "vehicle parked");
                    Ok(location)
                }
                Err(_) => {
                    floor.release_plate(&plate);
                    Err(DuplicatePlateError::new(plate).into())
                }
            };
        }

        Err(LotFullError::new(plate, vehicle.class()).into())
    }

    /// Releases the spots held by `plate` and drops its vehicle record.
    ///
    /// Returns where the vehicle was parked. A recorded location that does
    /// not match the spots on its floor yields [`RemoveError::Corrupted`]
    /// and leaves the lot untouched.
    #[instrument(level = "debug", skip_all, fields(plate = %plate))]
    pub fn remove(&self, plate: &Plate) -> Result<Location, RemoveError> {
        let mut state = self.state.lock();
        let LotState { ledger, floors } = &mut *state;

        let Some(location) = ledger.location(plate.as_str()) else {
            return Err(VehicleNotFoundError::new(plate.clone()).into());
        };

        let Some(floor) = floors.get_mut(location.floor().value()) else {
            return Err(
                CorruptedStateError::new(plate.clone(), location, "floor does not exist").into(),
            );
        };

        if !floor.occupies_exactly(plate, location.spots()) {
            return Err(CorruptedStateError::new(
                plate.clone(),
                location,
                "recorded spots are not held by this plate",
            )
            .into());
        }

        let released = floor.release_plate(plate);
        if released.is_zero() {
            return Err(
                CorruptedStateError::new(plate.clone(), location, "no spot was released").into(),
            );
        }

        let (vehicle, location) = ledger.uncommit(plate.as_str()).map_err(|e| {
            CorruptedStateError::new(plate.clone(), location, e.to_string())
        })?;
        debug!(%location, class = %vehicle.class(), "vehicle removed");
        Ok(location)
    }

    /// Free spots per floor, in floor order.
    pub fn available_per_floor(&self) -> Vec<SpotCount> {
        let state = self.state.lock();
        state.floors.iter().map(Floor::free_count).collect()
    }

    /// `true` iff no floor has a single free spot left.
    pub fn is_full(&self) -> bool {
        let state = self.state.lock();
        state.floors.iter().all(Floor::is_full)
    }

    #[instrument(level = "trace", skip_all, fields(plate = %plate))]
    pub fn find(&self, plate: &Plate) -> Result<Location, VehicleNotFoundError> {
        let state = self.state.lock();
        state
            .ledger
            .location(plate.as_str())
            .ok_or_else(|| VehicleNotFoundError::new(plate.clone()))
    }

    pub fn parked_count(&self) -> usize {
        self.state.lock().ledger.len()
    }

    pub fn snapshot(&self) -> LotSnapshot {
        let state = self.state.lock();
        LotSnapshot::capture(&self.config, &state.floors, &state.ledger)
    }

    /// Checks the consistency rules between floors and the ledger.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let state = self.state.lock();
        invariant::check(&state.floors, &state.ledger)
    }

    #[cfg(test)]
    fn with_state<R>(&self, f: impl FnOnce(&mut Vec<Floor>, &mut ParkingLedger) -> R) -> R {
        let mut state = self.state.lock();
        let LotState { ledger, floors } = &mut *state;
        f(floors, ledger)
    }
}
