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


//! # Parking Allocation Engine (`park-alloc-engine`)
//!
//! The thread-safe lot that places vehicles on floors.
//!
//! ## Layout
//!
//! - **`Spot`**: one parking spot and the plate that holds it, if any.
//! - **`Floor`**: an ordered row of spots. It proposes the first contiguous run
//!   of free spots that is long enough (`find_available`) and applies it
//!   all-or-nothing (`commit`).
//! - **`ParkingLedger`**: the plate index. It owns every parked `Vehicle` and
//!   remembers its `Location`.
//! - **`Lot`**: floors plus ledger behind a single lock. All public operations
//!   (`park`, `remove`, `available_per_floor`, `is_full`, `find`) go through it.
//!
//! `invariant::check` cross-validates floors and ledger and `LotSnapshot` is a
//! serializable, point-in-time view of the whole lot.

pub mod floor;
pub mod invariant;
pub mod ledger;
pub mod lot;
pub mod snapshot;
pub mod spot;

pub mod prelude {
    pub use crate::floor::{Floor, FloorCommitError};
    pub use crate::invariant::InvariantViolation;
    pub use crate::ledger::{LedgerError, ParkingLedger};
    pub use crate::lot::Lot;
    pub use crate::snapshot::{FloorSnapshot, LotSnapshot, ParkedVehicle};
    pub use crate::spot::{Spot, SpotError, SpotState};
}
