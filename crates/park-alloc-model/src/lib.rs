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

//! # Parking Allocation Model (`park-alloc-model`)
//!
//! Domain records for the parking allocation engine, built on the typed
//! primitives of `park-alloc-core`.
//!
//! ## Key Data Structures
//!
//! - **`Plate`**: the non-empty license plate identifying a vehicle while it is parked.
//! - **`VehicleClass`**: `Bike`, `Car` or `Truck`. The class decides how many
//!   contiguous spots a vehicle needs (`1`, `1` and `2` respectively).
//! - **`Vehicle`**: a plate together with its class. The engine takes ownership of
//!   the record when a vehicle parks and drops it when the vehicle leaves.
//! - **`Location`**: the floor and the contiguous run of spots a vehicle occupies.
//! - **`LotConfig`**: the fixed dimensions of a lot (floors and spots per floor).
//!
//! The error types returned by the engine's operations live in [`err`].

pub mod config;
pub mod err;
pub mod id;
pub mod location;
pub mod vehicle;

pub mod prelude {
    pub use crate::config::{LotConfig, LotConfigBuildError, LotConfigBuilder};
    pub use crate::err::{
        CorruptedStateError, DuplicatePlateError, LotFullError, ParkError, RemoveError,
        VehicleNotFoundError,
    };
    pub use crate::id::{EmptyPlateError, Plate};
    pub use crate::location::Location;
    pub use crate::vehicle::{UnknownClassError, Vehicle, VehicleClass};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Plate: Send, Sync, Clone);
    assert_impl_all!(Vehicle: Send, Sync);
    assert_impl_all!(Location: Send, Sync, Copy);
    assert_impl_all!(ParkError: std::error::Error, Send, Sync);
    assert_impl_all!(RemoveError: std::error::Error, Send, Sync);
}
