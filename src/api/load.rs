use std::fs;
use std::path::Path;

use crate::api::models::{ApiItem, ApiSensorReading};
use crate::errors::Result;

/// Parse the body of `GET /api/inventory`.
pub fn parse_inventory(json: &str) -> Result<Vec<ApiItem>> {
    let items: Vec<ApiItem> = serde_json::from_str(json)?;
    tracing::debug!(count = items.len(), "parsed inventory payload");
    Ok(items)
}

/// Parse the body of `GET /api/sensors`. An empty object means the backend
/// has no reading yet and yields a reading with every channel absent.
pub fn parse_sensor_reading(json: &str) -> Result<ApiSensorReading> {
    Ok(serde_json::from_str(json)?)
}

/// Read a saved inventory payload from disk.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Vec<ApiItem>> {
    let body = fs::read_to_string(path.as_ref())?;
    parse_inventory(&body)
}

/// Read a saved sensor payload from disk.
pub fn load_sensor_reading(path: impl AsRef<Path>) -> Result<ApiSensorReading> {
    let body = fs::read_to_string(path.as_ref())?;
    parse_sensor_reading(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FridgeError;

    #[test]
    fn parses_backend_inventory_payload() {
        let json = r#"[
            {"id": 1, "name": "Milk", "quantity": 2, "unit": "liters",
             "added_date": "2024-01-01T09:30:00.123456", "expiry_date": null,
             "category": "dairy", "notes": "", "is_spoiled": false},
            {"id": 2, "name": "Steak", "quantity": 1, "unit": "pieces",
             "added_date": "2024-01-02T10:00:00", "expiry_date": "2024-01-12T00:00:00",
             "category": null, "notes": null, "is_spoiled": true}
        ]"#;

        let items = parse_inventory(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].expiry_date, None);
        assert_eq!(items[1].expiry_date.as_deref(), Some("2024-01-12T00:00:00"));
        assert!(items[1].is_spoiled);
    }

    #[test]
    fn missing_spoiled_flag_defaults_to_false() {
        let json = r#"[{"id": 3, "name": "Peas", "quantity": 1, "unit": "bags"}]"#;
        let items = parse_inventory(json).unwrap();
        assert!(!items[0].is_spoiled);
    }

    #[test]
    fn empty_sensor_object_has_no_channels() {
        let reading = parse_sensor_reading("{}").unwrap();
        assert!(reading.co2_ppm.is_none());
        assert!(reading.door_open.is_none());
        assert!(reading.timestamp.is_none());
    }

    #[test]
    fn malformed_payload_is_a_json_error() {
        let err = parse_inventory("not json").unwrap_err();
        assert!(matches!(err, FridgeError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("fridge_status_does_not_exist.json");
        let err = load_inventory(&path).unwrap_err();
        assert!(matches!(err, FridgeError::Io(_)));
    }
}
