use serde::{Deserialize, Serialize};

// Shapes returned by the backend API. Everything is kept loose here
// (raw strings, options) and validated in `domain::item` / `domain::sensor`.
//
// GET /api/inventory  -> [ApiItem]
//  ├── id, name, quantity, unit
//  ├── added_date      (isoformat, naive UTC)
//  ├── expiry_date     (isoformat | null)
//  ├── category        ("meat" | "dairy" | ... | "" | null)
//  ├── notes
//  └── is_spoiled
//
// GET /api/sensors    -> ApiSensorReading ({} when no reading exists)

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit: String,

    pub added_date: Option<String>,
    pub expiry_date: Option<String>,

    pub category: Option<String>,
    pub notes: Option<String>,

    #[serde(default)]
    pub is_spoiled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiSensorReading {
    pub id: Option<i64>,
    pub timestamp: Option<String>,

    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub co2_ppm: Option<f64>,
    pub ammonia_ppm: Option<f64>,
    pub h2s_ppm: Option<f64>,

    pub door_open: Option<bool>,
    // "good" | "moderate" | "poor" | "unknown"
    pub air_quality: Option<String>,
}
