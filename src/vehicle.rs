use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Category of a vehicle. A slot is laid out for exactly one category and only
/// accepts vehicles of that category.
///
/// Tags are case-sensitive: `"TRUCK"` is [`VehicleType::Truck`], while `"truck"`
/// is kept verbatim as [`VehicleType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Truck,
    Bike,
    Car,
    /// A tag no slot is laid out for. Parking it always reports a full lot.
    Other(String),
}

impl VehicleType {
    /// The protocol tag of this category.
    pub fn as_str(&self) -> &str {
        match self {
            VehicleType::Truck => "TRUCK",
            VehicleType::Bike => "BIKE",
            VehicleType::Car => "CAR",
            VehicleType::Other(tag) => tag,
        }
    }
}

impl From<&str> for VehicleType {
    fn from(tag: &str) -> Self {
        match tag {
            "TRUCK" => VehicleType::Truck,
            "BIKE" => VehicleType::Bike,
            "CAR" => VehicleType::Car,
            other => VehicleType::Other(other.to_string()),
        }
    }
}

impl FromStr for VehicleType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VehicleType::from(s))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle as described by the `park_vehicle` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    vehicle_type: VehicleType,
    registration: String,
    colour: String,
}

impl Vehicle {
    pub fn new(
        vehicle_type: VehicleType,
        registration: impl Into<String>,
        colour: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_type,
            registration: registration.into(),
            colour: colour.into(),
        }
    }

    pub fn vehicle_type(&self) -> &VehicleType {
        &self.vehicle_type
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }
}

/// Receipt binding a vehicle to the slot it was parked in.
///
/// The id is `<lot id>_<floor number>_<slot number>` where the slot number is
/// 1-based, so parking into the same slot again yields the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: String,
    floor_number: usize,
    slot_number: usize,
    vehicle: Vehicle,
}

impl Ticket {
    /// Issues a ticket for the slot at 0-based `slot_index` on `floor_number`.
    pub(crate) fn issue(
        lot_id: &str,
        floor_number: usize,
        slot_index: usize,
        vehicle: Vehicle,
    ) -> Self {
        let slot_number = slot_index + 1;
        Self {
            id: format!("{}_{}_{}", lot_id, floor_number, slot_number),
            floor_number,
            slot_number,
            vehicle,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn floor_number(&self) -> usize {
        self.floor_number
    }

    /// 1-based slot number, as shown in the ticket id.
    pub fn slot_number(&self) -> usize {
        self.slot_number
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn into_vehicle(self) -> Vehicle {
        self.vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_parse_to_categories() {
        assert_eq!("TRUCK".parse::<VehicleType>(), Ok(VehicleType::Truck));
        assert_eq!("BIKE".parse::<VehicleType>(), Ok(VehicleType::Bike));
        assert_eq!("CAR".parse::<VehicleType>(), Ok(VehicleType::Car));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let parsed: VehicleType = "car".parse().unwrap();
        assert_eq!(parsed, VehicleType::Other("car".to_string()));
        assert_eq!(parsed.to_string(), "car");
    }

    #[test]
    fn test_ticket_id_uses_one_based_slot() {
        let vehicle = Vehicle::new(VehicleType::Bike, "AB123", "RED");
        let ticket = Ticket::issue("L1", 0, 1, vehicle.clone());

        assert_eq!(ticket.id(), "L1_0_2");
        assert_eq!(ticket.floor_number(), 0);
        assert_eq!(ticket.slot_number(), 2);
        assert_eq!(ticket.vehicle(), &vehicle);
    }
}
