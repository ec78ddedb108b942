//! Reservation records in `reservations.json`.
//!
//! An absent file reads as an empty collection everywhere in this module.
//! Cancellation is physical removal keyed on [`ReservationKey`]; there is no
//! status field.

use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::error::Result;
use crate::model::{Reservation, ReservationKey};
use crate::store::backend::StorageBackend;
use crate::store::records::{load_records, save_records};
use crate::store::Collection;

pub fn create<B: StorageBackend>(backend: &B, reservation: Reservation) -> Result<CmdResult> {
    let mut reservations = load_all(backend)?;
    reservations.push(reservation.clone());
    save_records(backend, Collection::Reservations, &reservations)?;

    Ok(CmdResult::new(Outcome::Created).with_reservations(vec![reservation]))
}

/// Remove the first reservation matching all four key fields.
pub fn cancel<B: StorageBackend>(backend: &B, key: &ReservationKey) -> Result<CmdResult> {
    let mut reservations = load_all(backend)?;
    let Some(pos) = reservations.iter().position(|r| r.matches(key)) else {
        return Ok(CmdResult::new(Outcome::NotFound)
            .with_message(CmdMessage::warning("Reservation not found.")));
    };

    let cancelled = reservations.remove(pos);
    save_records(backend, Collection::Reservations, &reservations)?;

    Ok(CmdResult::new(Outcome::Removed(1))
        .with_reservations(vec![cancelled])
        .with_message(CmdMessage::success("Reservation cancelled successfully.")))
}

pub fn load_all<B: StorageBackend>(backend: &B) -> Result<Vec<Reservation>> {
    Ok(load_records(backend, Collection::Reservations)?.unwrap_or_default())
}
