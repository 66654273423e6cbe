// src/domain/sensor.rs

use crate::api::ApiSensorReading;
use crate::domain::time::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQuality {
    Good,
    Moderate,
    Poor,
}

impl AirQuality {
    /// "unknown" and anything unrecognized mean the sensor has no verdict.
    pub fn from_raw(raw: Option<&str>) -> Option<AirQuality> {
        match raw?.trim().to_lowercase().as_str() {
            "good" => Some(AirQuality::Good),
            "moderate" => Some(AirQuality::Moderate),
            "poor" => Some(AirQuality::Poor),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AirQuality::Good => "good",
            AirQuality::Moderate => "moderate",
            AirQuality::Poor => "poor",
        }
    }
}

/// Latest reading from the fridge sensors. Every channel is optional:
/// `None` means the sensor is not installed or did not report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SensorSnapshot {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub co2_ppm: Option<f64>,
    pub ammonia_ppm: Option<f64>,
    pub h2s_ppm: Option<f64>,
    pub air_quality: Option<AirQuality>,
    pub door_open: Option<bool>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl SensorSnapshot {
    pub fn from_api_reading(raw: &ApiSensorReading) -> Self {
        // NaN readings come from sensors that failed mid-read.
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());

        let timestamp = raw.timestamp.as_deref().and_then(|s| {
            let parsed = parse_timestamp(s);
            if parsed.is_none() {
                tracing::warn!(value = s, "unparseable sensor timestamp, ignoring");
            }
            parsed
        });

        SensorSnapshot {
            temperature: finite(raw.temperature),
            humidity: finite(raw.humidity),
            co2_ppm: finite(raw.co2_ppm),
            ammonia_ppm: finite(raw.ammonia_ppm),
            h2s_ppm: finite(raw.h2s_ppm),
            air_quality: AirQuality::from_raw(raw.air_quality.as_deref()),
            door_open: raw.door_open,
            timestamp,
        }
    }
}
