use parking_commands::{Interpreter, Settings, VehicleType};
use std::io::Cursor;

fn session(interp: &mut Interpreter, lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        interp.execute_line(line, &mut out).unwrap();
    }
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_small_lot_bike_scenario() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &[
            "create_parking_lot L1 1 3",
            "park_vehicle BIKE AB123 RED",
            "park_vehicle BIKE CD456 BLUE",
            "park_vehicle BIKE EF789 BLACK",
            "unpark_vehicle L1_0_2",
            "display free_slots BIKE",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Created parking lot with 1 floors and 3 slots per floor",
            "Parked vehicle. Ticket ID: L1_0_2",
            "Parked vehicle. Ticket ID: L1_0_3",
            "Parking Lot is Full",
            "Unparked vehicle with Registration Number: AB123 and Color: RED",
            "Free slots for BIKE on Floor 0: [1]",
        ]
    );
}

#[test]
fn test_two_floor_session() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &[
            "create_parking_lot PR1234 2 6",
            "display free_count CAR",
            "display free_count BIKE",
            "display free_count TRUCK",
            "park_vehicle CAR KA-01-DB-1234 black",
            "park_vehicle CAR KA-02-CB-1334 red",
            "park_vehicle CAR KA-01-DB-1133 black",
            "park_vehicle CAR KA-05-HJ-8432 white",
            "park_vehicle CAR WB-45-HO-9032 white",
            "park_vehicle CAR KA-01-DF-8230 black",
            "park_vehicle CAR KA-21-HS-2347 red",
            "park_vehicle TRUCK KA-32-SJ-5389 orange",
            "park_vehicle BIKE KA-01-HH-1234 red",
            "display occupied_slots CAR",
            "unpark_vehicle PR1234_0_5",
            "unpark_vehicle PR1234_0_5",
            "unpark_vehicle PR1234_2_5",
            "display free_slots CAR",
            "display occupied_slots TRUCK",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Created parking lot with 2 floors and 6 slots per floor",
            "No. of free slots for CAR on Floor 0: 3",
            "No. of free slots for CAR on Floor 1: 3",
            "No. of free slots for BIKE on Floor 0: 2",
            "No. of free slots for BIKE on Floor 1: 2",
            "No. of free slots for TRUCK on Floor 0: 1",
            "No. of free slots for TRUCK on Floor 1: 1",
            "Parked vehicle. Ticket ID: PR1234_0_4",
            "Parked vehicle. Ticket ID: PR1234_0_5",
            "Parked vehicle. Ticket ID: PR1234_0_6",
            "Parked vehicle. Ticket ID: PR1234_1_4",
            "Parked vehicle. Ticket ID: PR1234_1_5",
            "Parked vehicle. Ticket ID: PR1234_1_6",
            "Parking Lot is Full",
            "Parked vehicle. Ticket ID: PR1234_0_1",
            "Parked vehicle. Ticket ID: PR1234_0_2",
            "Occupied slots for CAR on Floor 0: [3 4 5]",
            "Occupied slots for CAR on Floor 1: [3 4 5]",
            "Unparked vehicle with Registration Number: KA-02-CB-1334 and Color: red",
            "Invalid Ticket",
            "Invalid Ticket",
            "Free slots for CAR on Floor 0: [4]",
            "Free slots for CAR on Floor 1: []",
            "Occupied slots for TRUCK on Floor 0: [0]",
            "Occupied slots for TRUCK on Floor 1: []",
        ]
    );
}

#[test]
fn test_commands_before_create() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &[
            "display free_count CAR",
            "display",
            "park_vehicle CAR C1 RED",
            "unpark_vehicle X_0_1",
        ],
    );

    assert_eq!(output, vec!["Parking lot has not been created yet."; 4]);
}

#[test]
fn test_wrong_arity_is_silent() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &[
            "create_parking_lot L1 1",
            "create_parking_lot L1 1 3 4",
            "create_parking_lot L1 1 3",
            "park_vehicle BIKE AB123",
            "park_vehicle BIKE AB123 RED extra",
            "unpark_vehicle",
            "unpark_vehicle L1_0_2 L1_0_3",
            "display free_slots",
            "display all_slots BIKE",
            "display free_count BIKE",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Created parking lot with 1 floors and 3 slots per floor",
            "No. of free slots for BIKE on Floor 0: 2",
        ]
    );
}

#[test]
fn test_malformed_sizes_default_to_zero() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &[
            "create_parking_lot L1 many 3",
            "park_vehicle TRUCK T1 RED",
            "display free_count TRUCK",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Created parking lot with 0 floors and 3 slots per floor",
            "Parking Lot is Full",
        ]
    );
}

#[test]
fn test_malformed_sizes_rejected_when_strict() {
    let settings = Settings {
        strict_sizes: true,
        ..Settings::default()
    };
    let mut interp = Interpreter::with_settings(settings);
    let output = session(
        &mut interp,
        &["create_parking_lot L1 2 lots", "display free_count CAR"],
    );

    assert_eq!(
        output,
        vec![
            "Invalid slots per floor: \"lots\" is not a non-negative integer",
            "Parking lot has not been created yet.",
        ]
    );
}

#[test]
fn test_free_and_occupied_always_cover_capacity() {
    let mut interp = Interpreter::default();
    session(&mut interp, &["create_parking_lot P 3 7"]);

    let steps = [
        "park_vehicle CAR A RED",
        "park_vehicle BIKE B RED",
        "park_vehicle CAR C RED",
        "unpark_vehicle P_0_4",
        "park_vehicle TRUCK D RED",
        "park_vehicle CAR E RED",
        "unpark_vehicle P_0_2",
        "park_vehicle BIKE F RED",
    ];
    for step in steps {
        session(&mut interp, &[step]);
        let lot = interp.env().lot().unwrap();
        for vehicle_type in ["TRUCK", "BIKE", "CAR"] {
            let vehicle_type = VehicleType::from(vehicle_type);
            let free = lot.free_count(&vehicle_type);
            let occupied = lot.occupied_slots(&vehicle_type);
            for (floor, (free, occupied)) in lot.floors().iter().zip(free.iter().zip(&occupied)) {
                let total = floor
                    .slots()
                    .iter()
                    .filter(|slot| slot.slot_type() == &vehicle_type)
                    .count();
                assert_eq!(free.count + occupied.slots.len(), total, "after {}", step);
            }
        }
    }
}

#[test]
fn test_script_session() -> anyhow::Result<()> {
    let script = "\
create_parking_lot L1 1 4
park_vehicle CAR C1 GREEN
display occupied_slots CAR
exit
display free_count CAR
";
    let mut interp = Interpreter::default();
    let mut out = Vec::new();
    interp.run_script(Cursor::new(script), &mut out)?;

    assert_eq!(
        String::from_utf8(out)?,
        "Created parking lot with 1 floors and 4 slots per floor\n\
         Parked vehicle. Ticket ID: L1_0_4\n\
         Occupied slots for CAR on Floor 0: [3]\n"
    );
    Ok(())
}

#[test]
fn test_negative_size_defaults_to_zero() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &["create_parking_lot L1 1 -4", "display free_count CAR"],
    );

    assert_eq!(
        output,
        vec![
            "Created parking lot with 1 floors and 0 slots per floor",
            "No. of free slots for CAR on Floor 0: 0",
        ]
    );
}

#[test]
fn test_negative_size_rejected_when_strict() {
    let settings = Settings {
        strict_sizes: true,
        ..Settings::default()
    };
    let mut interp = Interpreter::with_settings(settings);
    let output = session(&mut interp, &["create_parking_lot L1 1 -4"]);

    assert_eq!(
        output,
        vec!["Invalid slots per floor: \"-4\" is not a non-negative integer"]
    );
    assert!(interp.env().lot.is_none());
}

#[test]
fn test_flag_like_words_are_plain_values() {
    let mut interp = Interpreter::default();
    let output = session(
        &mut interp,
        &[
            "display help",
            "create_parking_lot help 1 3",
            "create_parking_lot L1 1 3",
            "park_vehicle BIKE help RED",
            "park_vehicle BIKE -X1 help",
            "park_vehicle help X RED",
            "display free_count help",
            "unpark_vehicle help",
            "unpark_vehicle --help",
            "unpark_vehicle L1_0_3",
            "display occupied_slots BIKE",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Parking lot has not been created yet.",
            "Created parking lot with 1 floors and 3 slots per floor",
            "Created parking lot with 1 floors and 3 slots per floor",
            "Parked vehicle. Ticket ID: L1_0_2",
            "Parked vehicle. Ticket ID: L1_0_3",
            "Parking Lot is Full",
            "No. of free slots for help on Floor 0: 0",
            "Invalid Ticket",
            "Invalid Ticket",
            "Unparked vehicle with Registration Number: -X1 and Color: help",
            "Occupied slots for BIKE on Floor 0: [1]",
        ]
    );
}
