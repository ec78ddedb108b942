//! # Storage Layer
//!
//! Each record type owns one backing collection: a single JSON array
//! rewritten in full on every mutation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── customers.json      # [{"name","email","phone"}, ...]
//! ├── hotels.json         # [{"name","location","rooms"}, ...]
//! └── reservations.json   # [{"customer_name",...,"check_out_date"|null}, ...]
//! ```
//!
//! Files are compact JSON (no pretty printing). The data dir defaults to the
//! process working directory.
//!
//! ## Absent Files
//!
//! The backend reports an absent file as `Ok(None)`; it never decides what
//! absence means. Each command module applies its own policy:
//!
//! - customers: absent is an error ([`HotelError::FileNotFound`](crate::error::HotelError::FileNotFound))
//! - hotels: absent is empty, and delete says so
//! - reservations: absent is silently empty
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: files under a data directory.
//! - [`mem_backend::MemBackend`]: in-memory, for tests.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod records;

/// One of the three backing collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Customers,
    Hotels,
    Reservations,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Customers,
        Collection::Hotels,
        Collection::Reservations,
    ];

    pub fn default_file_name(self) -> &'static str {
        match self {
            Collection::Customers => "customers.json",
            Collection::Hotels => "hotels.json",
            Collection::Reservations => "reservations.json",
        }
    }
}
