//! # Domain Model
//!
//! Flat record types stored in the three JSON collections, plus the live
//! [`Hotel`] instance that carries an in-memory reservation list.
//!
//! ## Identity
//!
//! | Type | Key |
//! |------|-----|
//! | [`Customer`] | `name` |
//! | [`HotelRecord`] | `name` |
//! | [`Reservation`] | [`ReservationKey`]: customer, hotel, room, check-in |
//!
//! Keys are matched by exact string (and integer) equality. Nothing enforces
//! uniqueness, so duplicates are legal and delete removes all of them.
//!
//! ## Stored vs. Live Hotels
//!
//! [`HotelRecord`] is what `hotels.json` holds. [`Hotel`] is a session object
//! built from a record; its `reservations` list and any field edits made
//! through `modify_info` exist only as long as the value does.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// A hotel as persisted in `hotels.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub name: String,
    pub location: String,
    pub rooms: i64,
}

impl HotelRecord {
    pub fn new(name: impl Into<String>, location: impl Into<String>, rooms: i64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms,
        }
    }
}

/// A live hotel instance. Never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub rooms: i64,
    pub reservations: Vec<Reservation>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>, rooms: i64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms,
            reservations: Vec::new(),
        }
    }

    /// The stored shape of this hotel. Held reservations are dropped.
    pub fn record(&self) -> HotelRecord {
        HotelRecord::new(self.name.clone(), self.location.clone(), self.rooms)
    }
}

impl From<HotelRecord> for Hotel {
    fn from(record: HotelRecord) -> Self {
        Hotel::new(record.name, record.location, record.rooms)
    }
}

/// Field overrides for `Hotel::modify_info`.
///
/// Empty strings and a room count of zero count as "not supplied".
#[derive(Debug, Clone, Default)]
pub struct HotelChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer_name: String,
    pub hotel_name: String,
    pub room_number: i64,
    pub check_in_date: String,
    pub check_out_date: Option<String>,
}

impl Reservation {
    pub fn new(
        customer_name: impl Into<String>,
        hotel_name: impl Into<String>,
        room_number: i64,
        check_in_date: impl Into<String>,
        check_out_date: Option<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            hotel_name: hotel_name.into(),
            room_number,
            check_in_date: check_in_date.into(),
            check_out_date,
        }
    }

    pub fn key(&self) -> ReservationKey {
        ReservationKey {
            customer_name: self.customer_name.clone(),
            hotel_name: self.hotel_name.clone(),
            room_number: self.room_number,
            check_in_date: self.check_in_date.clone(),
        }
    }

    pub fn matches(&self, key: &ReservationKey) -> bool {
        self.customer_name == key.customer_name
            && self.hotel_name == key.hotel_name
            && self.room_number == key.room_number
            && self.check_in_date == key.check_in_date
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} room {} from {}",
            self.customer_name, self.hotel_name, self.room_number, self.check_in_date
        )?;
        if let Some(out) = &self.check_out_date {
            write!(f, " to {}", out)?;
        }
        Ok(())
    }
}

/// Composite key used to cancel a stored reservation.
///
/// `check_out_date` is not part of the key: reservations that differ only in
/// check-out are indistinguishable to cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationKey {
    pub customer_name: String,
    pub hotel_name: String,
    pub room_number: i64,
    pub check_in_date: String,
}

impl ReservationKey {
    pub fn new(
        customer_name: impl Into<String>,
        hotel_name: impl Into<String>,
        room_number: i64,
        check_in_date: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            hotel_name: hotel_name.into(),
            room_number,
            check_in_date: check_in_date.into(),
        }
    }
}
