use crate::config::Settings;
use crate::error::{LotError, Result};
use crate::lot::ParkingLot;

/// State shared by every command run through one interpreter.
///
/// The environment contains:
/// - `lot`: the live parking lot, if `create_parking_lot` has run.
/// - `settings`: interpreter settings, read by commands that depend on them.
/// - `should_exit`: a flag that a read loop checks to know when to terminate.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// The single live lot. Creating a lot replaces it wholesale.
    pub lot: Option<ParkingLot>,
    pub settings: Settings,
    /// When set to true, indicates that the read loop should stop.
    pub should_exit: bool,
}

impl Environment {
    pub fn new(settings: Settings) -> Self {
        Self {
            lot: None,
            settings,
            should_exit: false,
        }
    }

    pub fn lot(&self) -> Result<&ParkingLot> {
        self.lot.as_ref().ok_or(LotError::NotCreated)
    }

    pub fn lot_mut(&mut self) -> Result<&mut ParkingLot> {
        self.lot.as_mut().ok_or(LotError::NotCreated)
    }

    /// Installs `lot` as the live lot, dropping any previous one with its occupancy.
    pub fn replace_lot(&mut self, lot: ParkingLot) {
        self.lot = Some(lot);
    }
}
