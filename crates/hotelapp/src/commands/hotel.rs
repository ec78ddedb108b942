//! Hotel records in `hotels.json`, keyed by name, and the session
//! operations on a live [`Hotel`].
//!
//! An absent `hotels.json` is never an error. `delete` checks for it up
//! front and reports [`Outcome::NoRecords`]; `load_all` returns an empty list.
//!
//! The session operations (`display_info`, `modify_info`, `reserve_room`,
//! `cancel_reservation`) touch only the value they are called on. Nothing
//! they do reaches `hotels.json` or `reservations.json`.

use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::{Hotel, HotelChanges, HotelRecord, Reservation};
use crate::store::backend::StorageBackend;
use crate::store::records::{load_records, save_records};
use crate::store::Collection;

/// Store a new hotel record and return its live instance.
pub fn create<B: StorageBackend>(
    backend: &B,
    name: &str,
    location: &str,
    rooms: i64,
) -> Result<(Hotel, CmdResult)> {
    let hotel = Hotel::new(name, location, rooms);
    let mut hotels: Vec<HotelRecord> =
        load_records(backend, Collection::Hotels)?.unwrap_or_default();
    hotels.push(hotel.record());
    save_records(backend, Collection::Hotels, &hotels)?;

    let result = CmdResult::new(Outcome::Created).with_hotels(vec![hotel.record()]);
    Ok((hotel, result))
}

/// Remove every hotel called `name`.
pub fn delete<B: StorageBackend>(backend: &B, name: &str) -> Result<CmdResult> {
    if !backend.exists(Collection::Hotels) {
        return Ok(CmdResult::new(Outcome::NoRecords)
            .with_message(CmdMessage::info("No hotels found.")));
    }

    let hotels = load_all(backend)?;
    let before = hotels.len();
    let kept: Vec<HotelRecord> = hotels.into_iter().filter(|h| h.name != name).collect();

    if kept.len() < before {
        save_records(backend, Collection::Hotels, &kept)?;
        Ok(CmdResult::new(Outcome::Removed(before - kept.len())).with_message(
            CmdMessage::success(format!("Hotel {} deleted successfully.", name)),
        ))
    } else {
        Ok(CmdResult::new(Outcome::NotFound).with_message(CmdMessage::info(format!(
            "Hotel {} not found for deletion.",
            name
        ))))
    }
}

pub fn load_all<B: StorageBackend>(backend: &B) -> Result<Vec<HotelRecord>> {
    Ok(load_records(backend, Collection::Hotels)?.unwrap_or_default())
}

/// A fresh live instance of the first stored hotel called `name`.
pub fn find<B: StorageBackend>(backend: &B, name: &str) -> Result<Option<Hotel>> {
    Ok(load_all(backend)?
        .into_iter()
        .find(|h| h.name == name)
        .map(Hotel::from))
}

impl Hotel {
    pub fn display_info(&self) -> CmdResult {
        let mut result = CmdResult::new(Outcome::Found)
            .with_hotels(vec![self.record()])
            .with_reservations(self.reservations.clone());
        result.add_message(CmdMessage::info(format!("Hotel Name: {}", self.name)));
        result.add_message(CmdMessage::info(format!("Location: {}", self.location)));
        result.add_message(CmdMessage::info(format!("Number of Rooms: {}", self.rooms)));
        result.add_message(CmdMessage::info("Reservations:"));
        for reservation in &self.reservations {
            result.add_message(CmdMessage::info(reservation.to_string()));
        }
        result
    }

    /// Overwrite fields in place. Never persisted.
    pub fn modify_info(&mut self, changes: HotelChanges) {
        if let Some(name) = changes.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(location) = changes.location.filter(|l| !l.is_empty()) {
            self.location = location;
        }
        if let Some(rooms) = changes.rooms.filter(|r| *r != 0) {
            self.rooms = rooms;
        }
    }

    /// Hold a reservation on this instance. No availability or room range
    /// check.
    pub fn reserve_room(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Drop the first held reservation equal to `reservation`.
    pub fn cancel_reservation(&mut self, reservation: &Reservation) -> CmdResult {
        match self.reservations.iter().position(|r| r == reservation) {
            Some(pos) => {
                self.reservations.remove(pos);
                CmdResult::new(Outcome::Removed(1))
            }
            None => CmdResult::new(Outcome::NotFound)
                .with_message(CmdMessage::info("Reservation not found.").for_user()),
        }
    }
}
