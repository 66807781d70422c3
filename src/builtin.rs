use crate::allocation::{ParkOutcome, UnparkOutcome};
use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::env::Environment;
use crate::error::LotError;
use crate::interpreter::Factory;
use crate::lot::ParkingLot;
use crate::vehicle::{Vehicle, VehicleType};
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Commands of the parking protocol, known at compile time.
///
/// Each command implements [`argh`]'s `FromArgs` as a plain arity check: protocol
/// arguments are values, never flags, so words like `help` or `-4` are taken
/// verbatim. The commands run in-process against the interpreter's [`Environment`].
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Protocol verb of the command, e.g. "park_vehicle".
    fn name() -> &'static str;

    /// Executes the command using the provided output and environment.
    ///
    /// Errors are written to the output as a single line and turned into exit code 1.
    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode> {
        match T::execute(*self, stdout, env) {
            Ok(x) => Ok(x),
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                Ok(1)
            }
        }
    }
}

/// Stand-in for a command whose arguments did not parse. It does nothing.
struct Ignored {
    command: &'static str,
    reason: String,
}

impl ExecutableCommand for Ignored {
    fn execute(self: Box<Self>, _stdout: &mut dyn Write, _env: &mut Environment) -> Result<ExitCode> {
        debug!(
            command = self.command,
            reason = self.reason.trim_end(),
            "ignoring malformed command"
        );
        Ok(0)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, .. }) => Box::new(Ignored {
                    command: T::name(),
                    reason: output,
                }),
            })
        } else {
            None
        }
    }
}

/// Parses a lot dimension.
///
/// Unless `strict`, a malformed value is logged and read as 0, which yields a
/// lot without floors or without slots.
fn parse_count(field: &'static str, raw: &str, strict: bool) -> crate::Result<usize> {
    match raw.parse::<usize>() {
        Ok(count) => Ok(count),
        Err(err) if !strict => {
            warn!(field, value = raw, error = %err, "malformed count, using 0");
            Ok(0)
        }
        Err(_) => Err(LotError::InvalidCount {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Takes exactly `N` words verbatim.
fn exact_args<const N: usize>(
    command_name: &[&str],
    args: &[&str],
) -> std::result::Result<[String; N], EarlyExit> {
    let words: [&str; N] = args.try_into().map_err(|_| {
        EarlyExit::from(format!(
            "{}: expected {} arguments, got {}",
            command_name.join(" "),
            N,
            args.len()
        ))
    })?;
    Ok(words.map(str::to_string))
}

/// Renders slot numbers as `[a b c]`.
fn slot_list(slots: &[usize]) -> String {
    let numbers: Vec<String> = slots.iter().map(usize::to_string).collect();
    format!("[{}]", numbers.join(" "))
}

/// Create a parking lot, replacing the current one and everything parked in it.
///
/// The counts stay raw until execution, where [`parse_count`] decides what a
/// malformed one means.
pub struct CreateParkingLot {
    /// Prefix of every ticket id.
    pub lot_id: String,
    pub floors: String,
    pub slots_per_floor: String,
}

impl FromArgs for CreateParkingLot {
    fn from_args(command_name: &[&str], args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        let [lot_id, floors, slots_per_floor] = exact_args::<3>(command_name, args)?;
        Ok(Self {
            lot_id,
            floors,
            slots_per_floor,
        })
    }
}

impl BuiltinCommand for CreateParkingLot {
    fn name() -> &'static str {
        "create_parking_lot"
    }

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode> {
        let strict = env.settings.strict_sizes;
        let floors = parse_count("number of floors", &self.floors, strict)?;
        let slots_per_floor = parse_count("slots per floor", &self.slots_per_floor, strict)?;

        info!(lot = %self.lot_id, floors, slots_per_floor, "creating parking lot");
        env.replace_lot(ParkingLot::new(self.lot_id, floors, slots_per_floor));
        writeln!(
            stdout,
            "Created parking lot with {} floors and {} slots per floor",
            floors, slots_per_floor
        )?;
        Ok(0)
    }
}

/// Park a vehicle in the first free slot of its type.
pub struct ParkVehicle {
    pub vehicle_type: VehicleType,
    pub registration: String,
    pub colour: String,
}

impl FromArgs for ParkVehicle {
    fn from_args(command_name: &[&str], args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        let [vehicle_type, registration, colour] = exact_args::<3>(command_name, args)?;
        Ok(Self {
            vehicle_type: VehicleType::from(vehicle_type.as_str()),
            registration,
            colour,
        })
    }
}

impl BuiltinCommand for ParkVehicle {
    fn name() -> &'static str {
        "park_vehicle"
    }

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode> {
        let vehicle = Vehicle::new(self.vehicle_type, self.registration, self.colour);
        match env.lot_mut()?.park(vehicle) {
            ParkOutcome::Parked(ticket_id) => {
                writeln!(stdout, "Parked vehicle. Ticket ID: {}", ticket_id)?
            }
            ParkOutcome::Full => writeln!(stdout, "Parking Lot is Full")?,
        }
        Ok(0)
    }
}

/// Release the slot held by a ticket.
pub struct UnparkVehicle {
    pub ticket_id: String,
}

impl FromArgs for UnparkVehicle {
    fn from_args(command_name: &[&str], args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        let [ticket_id] = exact_args::<1>(command_name, args)?;
        Ok(Self { ticket_id })
    }
}

impl BuiltinCommand for UnparkVehicle {
    fn name() -> &'static str {
        "unpark_vehicle"
    }

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode> {
        match env.lot_mut()?.unpark(&self.ticket_id) {
            UnparkOutcome::Unparked(ticket) => {
                let vehicle = ticket.into_vehicle();
                writeln!(
                    stdout,
                    "Unparked vehicle with Registration Number: {} and Color: {}",
                    vehicle.registration(),
                    vehicle.colour()
                )?
            }
            UnparkOutcome::InvalidTicket => writeln!(stdout, "Invalid Ticket")?,
        }
        Ok(0)
    }
}

/// What `display` reports for each floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    FreeCount,
    FreeSlots,
    OccupiedSlots,
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "free_count" => Ok(ReportMode::FreeCount),
            "free_slots" => Ok(ReportMode::FreeSlots),
            "occupied_slots" => Ok(ReportMode::OccupiedSlots),
            other => Err(format!("unknown display mode: {}", other)),
        }
    }
}

/// Report free or occupied slots of a vehicle type on every floor.
///
/// Takes any number of words: without a lot it reports that, whatever follows.
pub struct DisplayReport {
    pub args: Vec<String>,
}

impl FromArgs for DisplayReport {
    fn from_args(_command_name: &[&str], args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        Ok(Self {
            args: args.iter().map(|arg| arg.to_string()).collect(),
        })
    }
}

impl BuiltinCommand for DisplayReport {
    fn name() -> &'static str {
        "display"
    }

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode> {
        // The lot check comes before argument validation.
        let lot = env.lot()?;
        let [mode, vehicle_type] = self.args.as_slice() else {
            debug!(args = ?self.args, "ignoring display with wrong arguments");
            return Ok(0);
        };
        let mode = match mode.parse::<ReportMode>() {
            Ok(mode) => mode,
            Err(reason) => {
                debug!(%reason, "ignoring display");
                return Ok(0);
            }
        };
        let vehicle_type = VehicleType::from(vehicle_type.as_str());

        match mode {
            ReportMode::FreeCount => {
                for floor in lot.free_count(&vehicle_type) {
                    writeln!(
                        stdout,
                        "No. of free slots for {} on Floor {}: {}",
                        vehicle_type, floor.floor, floor.count
                    )?;
                }
            }
            ReportMode::FreeSlots => {
                for floor in lot.free_slots(&vehicle_type) {
                    writeln!(
                        stdout,
                        "Free slots for {} on Floor {}: {}",
                        vehicle_type,
                        floor.floor,
                        slot_list(&floor.slots)
                    )?;
                }
            }
            ReportMode::OccupiedSlots => {
                for floor in lot.occupied_slots(&vehicle_type) {
                    writeln!(
                        stdout,
                        "Occupied slots for {} on Floor {}: {}",
                        vehicle_type,
                        floor.floor,
                        slot_list(&floor.slots)
                    )?;
                }
            }
        }
        Ok(0)
    }
}

/// Stop reading commands.
pub struct Exit {}

impl FromArgs for Exit {
    fn from_args(command_name: &[&str], args: &[&str]) -> std::result::Result<Self, EarlyExit> {
        exact_args::<0>(command_name, args)?;
        Ok(Exit {})
    }
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write, env: &mut Environment) -> Result<ExitCode> {
        env.should_exit = true;
        Ok(0)
    }
}
