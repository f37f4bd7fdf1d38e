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

use park_alloc_model::prelude::*;
use std::collections::HashMap;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerError {
    /// Attempted to record a plate that is already recorded.
    AlreadyCommitted,
    /// Attempted to drop a plate that is not recorded.
    NotCommitted,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::AlreadyCommitted => write!(f, "Vehicle already committed"),
            LedgerError::NotCommitted => write!(f, "Vehicle not committed"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Bookkeeping for the vehicles currently parked.
///
/// Owns the `Vehicle` records and maps each plate to its `Location`. The two
/// maps always share the same key set: a plate enters both on `commit` and
/// leaves both on `uncommit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkingLedger {
    vehicles: HashMap<Plate, Vehicle>,
    locations: HashMap<Plate, Location>,
}

impl ParkingLedger {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn contains(&self, plate: &str) -> bool {
        self.locations.contains_key(plate)
    }

    #[inline]
    pub fn location(&self, plate: &str) -> Option<Location> {
        self.locations.get(plate).copied()
    }

    #[inline]
    pub fn vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    /// Takes ownership of `vehicle` and records where it is parked.
    pub fn commit(&mut self, vehicle: Vehicle, location: Location) -> Result<(), LedgerError> {
        if self.locations.contains_key(vehicle.plate()) {
            return Err(LedgerError::AlreadyCommitted);
        }
        let plate = vehicle.plate().clone();
        self.locations.insert(plate.clone(), location);
        self.vehicles.insert(plate, vehicle);
        Ok(())
    }

    /// Forgets `plate` and hands back its vehicle record and last location.
    pub fn uncommit(&mut self, plate: &str) -> Result<(Vehicle, Location), LedgerError> {
        let location = self
            .locations
            .remove(plate)
            .ok_or(LedgerError::NotCommitted)?;
        let vehicle = self
            .vehicles
            .remove(plate)
            .ok_or(LedgerError::NotCommitted)?;
        Ok((vehicle, location))
    }

    /// Parked vehicles with their locations, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Vehicle, Location)> + '_ {
        self.locations
            .iter()
            .filter_map(|(plate, loc)| self.vehicles.get(plate).map(|v| (v, *loc)))
    }

    /// Plates present in exactly one of the two maps.
    pub fn unpaired_plates(&self) -> impl Iterator<Item = &Plate> + '_ {
        let missing_vehicle = self
            .locations
            .keys()
            .filter(|p| !self.vehicles.contains_key(*p));
        let missing_location = self
            .vehicles
            .keys()
            .filter(|p| !self.locations.contains_key(*p));
        missing_vehicle.chain(missing_location)
    }
}
