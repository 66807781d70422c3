use crate::lot::ParkingLot;
use crate::vehicle::{Ticket, Vehicle};
use tracing::debug;

/// Result of trying to park a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkOutcome {
    /// The vehicle took a slot; carries the id of the issued ticket.
    Parked(String),
    /// No free slot of the vehicle's category exists on any floor.
    Full,
}

/// Result of trying to release a slot by ticket id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnparkOutcome {
    /// The slot was released; carries the ticket it held.
    Unparked(Ticket),
    /// No parked vehicle holds a ticket with this id.
    InvalidTicket,
}

impl ParkingLot {
    /// Parks `vehicle` in the first free slot of its category.
    ///
    /// Floors are scanned in ascending order, and slots within a floor in
    /// ascending order. The first match wins.
    pub fn park(&mut self, vehicle: Vehicle) -> ParkOutcome {
        for floor in &mut self.floors {
            let floor_number = floor.number;
            let Some(slot) = floor
                .slots
                .iter_mut()
                .find(|slot| slot.accepts(vehicle.vehicle_type()))
            else {
                continue;
            };

            let ticket = Ticket::issue(&self.id, floor_number, slot.number, vehicle);
            let ticket_id = ticket.id().to_string();
            debug!(ticket = %ticket_id, floor = floor_number, slot = slot.number, "parked");
            slot.ticket = Some(ticket);
            return ParkOutcome::Parked(ticket_id);
        }

        debug!(
            lot = %self.id,
            vehicle_type = %vehicle.vehicle_type(),
            registration = vehicle.registration(),
            "no free slot"
        );
        ParkOutcome::Full
    }

    /// Releases the slot holding the ticket `ticket_id`.
    pub fn unpark(&mut self, ticket_id: &str) -> UnparkOutcome {
        let released = self
            .floors
            .iter_mut()
            .flat_map(|floor| floor.slots.iter_mut())
            .find(|slot| slot.ticket().is_some_and(|ticket| ticket.id() == ticket_id))
            .and_then(|slot| slot.ticket.take());

        match released {
            Some(ticket) => {
                debug!(ticket = ticket_id, "unparked");
                UnparkOutcome::Unparked(ticket)
            }
            None => {
                debug!(ticket = ticket_id, "no vehicle holds this ticket");
                UnparkOutcome::InvalidTicket
            }
        }
    }
}
