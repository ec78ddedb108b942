use hotelapp::api::HotelApi;
use hotelapp::commands::Outcome;
use hotelapp::config::HotelConfig;
use hotelapp::error::HotelError;
use hotelapp::model::{Reservation, ReservationKey};
use hotelapp::store::backend::StorageBackend;
use hotelapp::store::fs_backend::FsBackend;
use hotelapp::store::Collection;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (dir, backend) = setup();

    assert!(!backend.exists(Collection::Hotels));
    assert_eq!(backend.read(Collection::Hotels).unwrap(), None);

    backend.write(Collection::Hotels, "[]").unwrap();
    assert!(backend.exists(Collection::Hotels));
    assert_eq!(backend.read(Collection::Hotels).unwrap(), Some("[]".to_string()));
    assert_eq!(
        backend.path(Collection::Hotels),
        dir.path().join("hotels.json")
    );
}

#[test]
fn test_fs_backend_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("records");
    let backend = FsBackend::new(&nested);

    backend.write(Collection::Customers, "[]").unwrap();
    assert!(nested.join("customers.json").is_file());
}

#[test]
fn test_files_on_disk_are_compact_json() {
    let (dir, backend) = setup();
    let api = HotelApi::new(backend);
    api.create_customer("Bob", "bob@example.com", "999").unwrap();
    api.create_hotel("Hotel X", "Downtown", 12).unwrap();
    api.create_reservation(Reservation::new("Bob", "Hotel X", 3, "2024-03-01", None))
        .unwrap();

    let customers = fs::read_to_string(dir.path().join("customers.json")).unwrap();
    assert_eq!(
        customers,
        r#"[{"name":"Bob","email":"bob@example.com","phone":"999"}]"#
    );

    let hotels = fs::read_to_string(dir.path().join("hotels.json")).unwrap();
    assert_eq!(hotels, r#"[{"name":"Hotel X","location":"Downtown","rooms":12}]"#);

    let reservations = fs::read_to_string(dir.path().join("reservations.json")).unwrap();
    assert_eq!(
        reservations,
        r#"[{"customer_name":"Bob","hotel_name":"Hotel X","room_number":3,"check_in_date":"2024-03-01","check_out_date":null}]"#
    );
}

#[test]
fn test_reads_hand_written_files() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("customers.json"),
        "[\n  {\"name\": \"Ann\", \"email\": \"ann@example.com\", \"phone\": \"1\"}\n]\n",
    )
    .unwrap();

    let api = HotelApi::new(backend);
    let customers = api.customers().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Ann");
}

#[test]
fn test_customer_loader_reports_missing_path() {
    let (dir, backend) = setup();
    let api = HotelApi::new(backend);

    match api.customers() {
        Err(HotelError::FileNotFound(path)) => {
            assert_eq!(path, dir.path().join("customers.json"));
        }
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_fatal() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("reservations.json"), "not json").unwrap();
    let api = HotelApi::new(backend);

    let key = ReservationKey::new("A", "B", 1, "d");
    assert!(matches!(
        api.cancel_reservation(&key),
        Err(HotelError::Serialization(_))
    ));
}

#[test]
fn test_from_config_honours_file_names() {
    let dir = TempDir::new().unwrap();
    let config = HotelConfig {
        data_dir: dir.path().to_path_buf(),
        hotels_file: "inns.json".to_string(),
        ..Default::default()
    };
    let api = HotelApi::from_config(&config);
    api.create_hotel("Inn", "Hill", 4).unwrap();

    assert!(dir.path().join("inns.json").is_file());
    assert!(!dir.path().join("hotels.json").exists());
}

#[test]
fn test_out_of_range_integers_still_load() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("reservations.json"),
        r#"[{"customer_name":"A","hotel_name":"H","room_number":-1,"check_in_date":"d","check_out_date":null}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("hotels.json"),
        r#"[{"name":"Big","location":"L","rooms":5000000000}]"#,
    )
    .unwrap();
    let api = HotelApi::new(backend);

    let reservations = api.reservations().unwrap();
    assert_eq!(reservations[0].room_number, -1);

    let result = api.delete_hotel("Other").unwrap();
    assert_eq!(result.outcome, Outcome::NotFound);
    assert_eq!(api.hotels().unwrap()[0].rooms, 5_000_000_000);
}
