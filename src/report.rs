use crate::lot::{Floor, ParkingLot};
use crate::vehicle::VehicleType;

/// Number of free slots of one category on one floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorCount {
    pub floor: usize,
    pub count: usize,
}

/// 0-based slot numbers of one category on one floor, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorSlots {
    pub floor: usize,
    pub slots: Vec<usize>,
}

impl ParkingLot {
    /// Free slots of `vehicle_type`, counted per floor.
    pub fn free_count(&self, vehicle_type: &VehicleType) -> Vec<FloorCount> {
        self.floors
            .iter()
            .map(|floor| FloorCount {
                floor: floor.number(),
                count: floor
                    .slots_for(vehicle_type)
                    .filter(|slot| !slot.is_occupied())
                    .count(),
            })
            .collect()
    }

    /// Free slots of `vehicle_type`, listed per floor.
    pub fn free_slots(&self, vehicle_type: &VehicleType) -> Vec<FloorSlots> {
        self.floors
            .iter()
            .map(|floor| slots_where(floor, vehicle_type, false))
            .collect()
    }

    /// Occupied slots of `vehicle_type`, listed per floor.
    pub fn occupied_slots(&self, vehicle_type: &VehicleType) -> Vec<FloorSlots> {
        self.floors
            .iter()
            .map(|floor| slots_where(floor, vehicle_type, true))
            .collect()
    }
}

fn slots_where(floor: &Floor, vehicle_type: &VehicleType, occupied: bool) -> FloorSlots {
    FloorSlots {
        floor: floor.number(),
        slots: floor
            .slots_for(vehicle_type)
            .filter(|slot| slot.is_occupied() == occupied)
            .map(|slot| slot.number())
            .collect(),
    }
}
