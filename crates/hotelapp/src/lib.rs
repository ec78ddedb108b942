//! # hotelapp
//!
//! Record keeping for a small hotel domain: customers, hotels and
//! reservations, each kept as one flat JSON array in its own file.
//!
//! ## Layering
//!
//! ```text
//! api.rs        HotelApi<B>: single entry point, dispatches to commands
//! commands/     customer, hotel and reservation logic, returns CmdResult
//! store/        StorageBackend (filesystem or memory) + record helpers
//! model.rs      Customer, HotelRecord, Hotel, Reservation
//! ```
//!
//! Every mutation is a whole-file read-modify-write. There is no locking and
//! no atomic replace: two writers against the same data directory race, and
//! the last one to write wins.
//!
//! ## Two reservation lists
//!
//! Reservations persisted through the reservation commands live in
//! `reservations.json`. A live [`model::Hotel`] also holds its own in-memory
//! list fed by [`model::Hotel::reserve_room`]. The two are never reconciled:
//! one is invisible to the other.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
