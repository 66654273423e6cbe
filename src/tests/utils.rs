use chrono::{DateTime, TimeZone, Utc};

use crate::api::{parse_inventory, parse_sensor_reading};
use crate::view::ViewState;

/// Inventory as the backend serialises it, one item per status band
/// relative to `reference_now()`.
pub const INVENTORY_JSON: &str = r#"[
    {"id": 1, "name": "Milk", "quantity": 2, "unit": "liters",
     "added_date": "2024-01-05T09:30:00.123456", "expiry_date": null,
     "category": "dairy", "notes": "", "is_spoiled": false},
    {"id": 2, "name": "Eggs", "quantity": 12, "unit": "pieces",
     "added_date": "2024-01-01T08:00:00", "expiry_date": "2024-01-08T00:00:00",
     "category": "other", "notes": null, "is_spoiled": false},
    {"id": 3, "name": "salmon", "quantity": 1, "unit": "kg",
     "added_date": "2024-01-09T18:00:00", "expiry_date": "2024-01-12T00:00:00",
     "category": "seafood", "notes": "wild", "is_spoiled": false},
    {"id": 4, "name": "Chicken", "quantity": 3, "unit": "pieces",
     "added_date": "2024-01-02T12:00:00", "expiry_date": "2024-01-30T00:00:00",
     "category": "meat", "notes": null, "is_spoiled": true},
    {"id": 5, "name": "Yogurt", "quantity": 4, "unit": "cups",
     "added_date": "2024-01-03T12:00:00", "expiry_date": "2024-01-09T00:00:00",
     "category": "dairy", "notes": null, "is_spoiled": false},
    {"id": 6, "name": "Peas", "quantity": 1, "unit": "bags",
     "added_date": "2024-01-03T12:00:00", "expiry_date": "someday",
     "category": "frozen", "notes": null, "is_spoiled": false}
]"#;

pub const SENSORS_JSON: &str = r#"{
    "id": 42, "timestamp": "2024-01-10T07:59:30",
    "co2_ppm": 640.0, "ammonia_ppm": 3.2, "h2s_ppm": 0.4,
    "door_open": false, "air_quality": "good"
}"#;

pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
}

/// A view state after one successful poll of both endpoints.
pub fn loaded_state() -> ViewState {
    let mut state = ViewState::new();
    state.apply_inventory(parse_inventory(INVENTORY_JSON));
    state.apply_sensors(parse_sensor_reading(SENSORS_JSON));
    state
}
