use crate::vehicle::{Ticket, VehicleType};

/// Decides which vehicle category each slot of a floor is laid out for.
///
/// The layout is applied once, when the lot is built; it never changes for the
/// lifetime of the lot.
pub trait SlotLayout {
    /// Category of the slot at 0-based `index` within a floor.
    fn slot_type(&self, index: usize) -> VehicleType;
}

/// Slot 0 takes a truck, slots 1 and 2 take bikes, every other slot takes a car.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardLayout;

impl SlotLayout for StandardLayout {
    fn slot_type(&self, index: usize) -> VehicleType {
        match index {
            0 => VehicleType::Truck,
            1 | 2 => VehicleType::Bike,
            _ => VehicleType::Car,
        }
    }
}

/// A single parking space. It is occupied exactly when it holds a ticket.
#[derive(Debug, Clone)]
pub struct Slot {
    pub(crate) number: usize,
    pub(crate) slot_type: VehicleType,
    pub(crate) ticket: Option<Ticket>,
}

impl Slot {
    fn new(number: usize, slot_type: VehicleType) -> Self {
        Self {
            number,
            slot_type,
            ticket: None,
        }
    }

    /// 0-based position within the floor.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn slot_type(&self) -> &VehicleType {
        &self.slot_type
    }

    pub fn is_occupied(&self) -> bool {
        self.ticket.is_some()
    }

    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// Whether a vehicle of `vehicle_type` could be parked here right now.
    pub fn accepts(&self, vehicle_type: &VehicleType) -> bool {
        !self.is_occupied() && &self.slot_type == vehicle_type
    }
}

#[derive(Debug, Clone)]
pub struct Floor {
    pub(crate) number: usize,
    pub(crate) slots: Vec<Slot>,
}

impl Floor {
    fn new(number: usize, slots_per_floor: usize, layout: &dyn SlotLayout) -> Self {
        let slots = (0..slots_per_floor)
            .map(|index| Slot::new(index, layout.slot_type(index)))
            .collect();
        Self { number, slots }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Slots ordered by slot number.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots laid out for `vehicle_type`, in slot order.
    pub fn slots_for<'a>(
        &'a self,
        vehicle_type: &'a VehicleType,
    ) -> impl Iterator<Item = &'a Slot> + 'a {
        self.slots
            .iter()
            .filter(move |slot| &slot.slot_type == vehicle_type)
    }
}

/// The parking facility: an ordered set of floors, each with the same number
/// of slots.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    pub(crate) id: String,
    pub(crate) floors: Vec<Floor>,
}

impl ParkingLot {
    /// Builds an empty lot using the [`StandardLayout`].
    pub fn new(id: impl Into<String>, floor_count: usize, slots_per_floor: usize) -> Self {
        Self::with_layout(id, floor_count, slots_per_floor, &StandardLayout)
    }

    pub fn with_layout(
        id: impl Into<String>,
        floor_count: usize,
        slots_per_floor: usize,
        layout: &dyn SlotLayout,
    ) -> Self {
        let floors = (0..floor_count)
            .map(|number| Floor::new(number, slots_per_floor, layout))
            .collect();
        Self {
            id: id.into(),
            floors,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Floors ordered by floor number.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Total number of slots laid out for `vehicle_type` across all floors.
    pub fn capacity(&self, vehicle_type: &VehicleType) -> usize {
        self.floors
            .iter()
            .map(|floor| floor.slots_for(vehicle_type).count())
            .sum()
    }

    /// Tickets of all currently parked vehicles, in scan order.
    pub fn active_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.floors
            .iter()
            .flat_map(|floor| floor.slots.iter())
            .filter_map(Slot::ticket)
    }

    pub fn find_ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.active_tickets().find(|ticket| ticket.id() == ticket_id)
    }
}
