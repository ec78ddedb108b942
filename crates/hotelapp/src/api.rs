//! # API Facade
//!
//! [`HotelApi`] is the single entry point for callers. It dispatches to the
//! command modules and returns their structured results; it holds no
//! business logic, does no printing, and decides nothing about presentation.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `HotelApi<FsBackend>`
//! - Testing: `HotelApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::config::HotelConfig;
use crate::error::Result;
use crate::model::{Customer, Hotel, HotelRecord, Reservation, ReservationKey};
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;

pub struct HotelApi<B: StorageBackend> {
    backend: B,
}

impl HotelApi<FsBackend> {
    pub fn from_config(config: &HotelConfig) -> Self {
        Self::new(FsBackend::from_config(config))
    }
}

impl<B: StorageBackend> HotelApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    // --- Customers ---

    pub fn create_customer(&self, name: &str, email: &str, phone: &str) -> Result<CmdResult> {
        commands::customer::create(&self.backend, name, email, phone)
    }

    pub fn delete_customer(&self, name: &str) -> Result<CmdResult> {
        commands::customer::delete(&self.backend, name)
    }

    pub fn display_customer(&self, name: &str) -> Result<CmdResult> {
        commands::customer::display_info(&self.backend, name)
    }

    pub fn modify_customer(
        &self,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<CmdResult> {
        commands::customer::modify_info(&self.backend, name, email, phone)
    }

    pub fn customers(&self) -> Result<Vec<Customer>> {
        commands::customer::load_all(&self.backend)
    }

    // --- Hotels ---

    pub fn create_hotel(&self, name: &str, location: &str, rooms: i64) -> Result<(Hotel, CmdResult)> {
        commands::hotel::create(&self.backend, name, location, rooms)
    }

    pub fn delete_hotel(&self, name: &str) -> Result<CmdResult> {
        commands::hotel::delete(&self.backend, name)
    }

    pub fn hotels(&self) -> Result<Vec<HotelRecord>> {
        commands::hotel::load_all(&self.backend)
    }

    pub fn find_hotel(&self, name: &str) -> Result<Option<Hotel>> {
        commands::hotel::find(&self.backend, name)
    }

    // --- Reservations ---

    pub fn create_reservation(&self, reservation: Reservation) -> Result<CmdResult> {
        commands::reservation::create(&self.backend, reservation)
    }

    pub fn cancel_reservation(&self, key: &ReservationKey) -> Result<CmdResult> {
        commands::reservation::cancel(&self.backend, key)
    }

    pub fn reservations(&self) -> Result<Vec<Reservation>> {
        commands::reservation::load_all(&self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Outcome;
    use crate::error::HotelError;
    use crate::store::mem_backend::MemBackend;

    fn api() -> HotelApi<MemBackend> {
        HotelApi::new(MemBackend::new())
    }

    #[test]
    fn test_absent_file_policies_differ_per_collection() {
        let api = api();
        assert!(matches!(api.customers(), Err(HotelError::FileNotFound(_))));
        assert!(api.hotels().unwrap().is_empty());
        assert!(api.reservations().unwrap().is_empty());
        assert_eq!(api.delete_hotel("X").unwrap().outcome, Outcome::NoRecords);
    }

    #[test]
    fn test_bob_modify_phone_end_to_end() {
        let api = api();
        api.create_customer("Bob", "bob@example.com", "999").unwrap();
        api.modify_customer("Bob", None, Some("111")).unwrap();

        let bob = &api.customers().unwrap()[0];
        assert_eq!(bob.email, "bob@example.com");
        assert_eq!(bob.phone, "111");
    }

    #[test]
    fn test_alice_cancel_end_to_end() {
        let api = api();
        api.create_reservation(Reservation::new(
            "Alice",
            "Hotel X",
            102,
            "2024-03-01",
            Some("2024-03-10".into()),
        ))
        .unwrap();

        let key = ReservationKey::new("Alice", "Hotel X", 102, "2024-03-01");
        assert_eq!(api.cancel_reservation(&key).unwrap().outcome, Outcome::Removed(1));
        assert!(api.reservations().unwrap().is_empty());
        assert_eq!(api.cancel_reservation(&key).unwrap().outcome, Outcome::NotFound);
    }

    #[test]
    fn test_find_hotel_after_create() {
        let api = api();
        let (created, _) = api.create_hotel("H", "L", 2).unwrap();
        assert_eq!(api.find_hotel("H").unwrap(), Some(created));
    }

    #[test]
    fn test_filesystem_round_trip_in_temp_dir() {
        let env = crate::test_utils::TestEnv::new();
        env.api.create_customer("Ann", "ann@example.com", "1").unwrap();
        env.api.delete_customer("Ann").unwrap();

        assert!(env.root.join("customers.json").is_file());
        assert!(env.api.customers().unwrap().is_empty());
    }
}
