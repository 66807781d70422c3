//! A parking-lot allocation simulator driven by a line-oriented command protocol.
//!
//! A lot is a set of floors, each with the same number of slots. Every slot is
//! laid out for one vehicle type (see [`SlotLayout`]); vehicles are parked
//! first-fit and released by the ticket id they were given.
//!
//! The library core is [`ParkingLot`] with its allocation ([`ParkingLot::park`],
//! [`ParkingLot::unpark`]) and reporting operations. [`Interpreter`] wraps a lot
//! behind the text protocol:
//!
//! ```text
//! create_parking_lot <lot id> <floors> <slots per floor>
//! park_vehicle <vehicle type> <registration> <colour>
//! unpark_vehicle <ticket id>
//! display free_count|free_slots|occupied_slots <vehicle type>
//! exit
//! ```

mod allocation;
mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
mod interpreter;
pub mod logger;
mod lot;
mod report;
mod vehicle;

pub use allocation::{ParkOutcome, UnparkOutcome};
pub use builtin::ReportMode;
pub use config::Settings;
pub use error::{LotError, Result};
/// Just a convenient re-export of the command interpreter.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
pub use lot::{Floor, ParkingLot, Slot, SlotLayout, StandardLayout};
pub use report::{FloorCount, FloorSlots};
pub use vehicle::{Ticket, Vehicle, VehicleType};
