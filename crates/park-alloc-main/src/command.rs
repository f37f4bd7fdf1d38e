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


use park_alloc_engine::lot::Lot;
use park_alloc_model::prelude::*;
use std::{fmt::Display, str::FromStr};

pub const HELP: &str = "\
Commands:
  park_vehicle <plate> <Bike|Car|Truck>
  remove_vehicle <plate>
  available_spots
  is_full
  find_vehicle <plate>
  status
  help
  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Park(Vehicle),
    Remove(Plate),
    AvailableSpots,
    IsFull,
    Find(Plate),
    Status,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingArgument { usage: &'static str },
    UnknownClass(UnknownClassError),
    InvalidPlate(EmptyPlateError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "No command given"),
            CommandError::UnknownCommand(c) => {
                write!(f, "Unknown command '{c}'. Type 'help' for a list of commands.")
            }
            CommandError::MissingArgument { usage } => write!(f, "Usage: {usage}"),
            CommandError::UnknownClass(e) => write!(f, "{e}"),
            CommandError::InvalidPlate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<UnknownClassError> for CommandError {
    fn from(e: UnknownClassError) -> Self {
        CommandError::UnknownClass(e)
    }
}

impl From<EmptyPlateError> for CommandError {
    fn from(e: EmptyPlateError) -> Self {
        CommandError::InvalidPlate(e)
    }
}

fn arg<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> Result<&'a str, CommandError> {
    words.next().ok_or(CommandError::MissingArgument { usage })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head {
            "park_vehicle" => {
                const USAGE: &str = "park_vehicle <plate> <Bike|Car|Truck>";
                let plate = Plate::new(arg(&mut words, USAGE)?)?;
                let class: VehicleClass = arg(&mut words, USAGE)?.parse()?;
                Ok(Command::Park(Vehicle::new(plate, class)))
            }
            "remove_vehicle" => {
                let plate = Plate::new(arg(&mut words, "remove_vehicle <plate>")?)?;
                Ok(Command::Remove(plate))
            }
            "find_vehicle" => {
                let plate = Plate::new(arg(&mut words, "find_vehicle <plate>")?)?;
                Ok(Command::Find(plate))
            }
            "available_spots" => Ok(Command::AvailableSpots),
            "is_full" => Ok(Command::IsFull),
            "status" => Ok(Command::Status),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn spot_list(location: &Location) -> String {
    location
        .spots()
        .indices()
        .map(|i| i.value().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `command` against `lot` and renders the reply shown to the user.
///
/// `Exit` is handled by the caller and renders nothing.
pub fn execute(lot: &Lot, command: Command) -> String {
    match command {
        Command::Park(vehicle) => {
            let plate = vehicle.plate().clone();
            match lot.park(vehicle) {
                Ok(location) => format!(
                    "Parked {} on floor {} at spot(s): {}",
                    plate,
                    location.floor().value(),
                    spot_list(&location)
                ),
                Err(ParkError::DuplicatePlate(_)) => {
                    format!("Vehicle {plate} is already parked.")
                }
                Err(ParkError::Full(_)) => {
                    format!("Parking Lot Full or no suitable spot available for {plate}")
                }
            }
        }
        Command::Remove(plate) => match lot.remove(&plate) {
            Ok(location) => format!(
                "Vehicle {} removed from floor {}",
                plate,
                location.floor().value()
            ),
            Err(RemoveError::NotFound(_)) => format!("Vehicle {plate} not found."),
            Err(e @ RemoveError::Corrupted(_)) => format!("Error: {e}"),
        },
        Command::AvailableSpots => lot
            .available_per_floor()
            .iter()
            .enumerate()
            .map(|(floor, free)| format!("Floor {}: {} spots available.", floor, free.value()))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::IsFull => {
            if lot.is_full() {
                "Parking lot is full.".to_string()
            } else {
                "Parking lot has available spots.".to_string()
            }
        }
        Command::Find(plate) => match lot.find(&plate) {
            Ok(location) => format!(
                "Vehicle {} is parked on floor {} at spot(s): {}",
                plate,
                location.floor().value(),
                spot_list(&location)
            ),
            Err(_) => format!("Vehicle {plate} not found."),
        },
        Command::Status => serde_json::to_string_pretty(&lot.snapshot())
            .unwrap_or_else(|e| format!("Error: failed to render status: {e}")),
        Command::Help => HELP.to_string(),
        Command::Exit => String::new(),
    }
}
