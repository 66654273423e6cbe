//! Sensor thresholds and per-channel severity classification.
//!
//! Every channel is classified on its own. A missing reading is always
//! `Severity::Unknown`, never assumed healthy.

use crate::domain::sensor::{AirQuality, SensorSnapshot};
use serde::Serialize;

/// Fridge temperature (°C) above which items start to warm up.
pub const TEMPERATURE_WARNING_C: f64 = 2.0;
/// Fridge temperature (°C) above which food is no longer kept safely.
pub const TEMPERATURE_DANGER_C: f64 = 4.0;

pub const CO2_WARNING_PPM: f64 = 500.0;
/// Also the level at which the spoilage check raises a ventilation warning.
pub const CO2_DANGER_PPM: f64 = 1000.0;

pub const AMMONIA_WARNING_PPM: f64 = 10.0;
/// Ammonia level treated as evidence of spoiled protein.
pub const AMMONIA_DANGER_PPM: f64 = 25.0;

pub const H2S_WARNING_PPM: f64 = 5.0;
/// Hydrogen sulfide level treated as evidence of spoiled protein.
pub const H2S_DANGER_PPM: f64 = 10.0;

/// Relative humidity (%) band considered normal.
pub const HUMIDITY_LOW_PCT: f64 = 30.0;
pub const HUMIDITY_HIGH_PCT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Unknown,
    Ok,
    Warning,
    Danger,
}

impl Severity {
    /// Card class used by the sensor panels.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Unknown => "",
            Severity::Ok => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

fn banded(reading: Option<f64>, warning: f64, danger: f64) -> Severity {
    match reading {
        None => Severity::Unknown,
        Some(v) if v > danger => Severity::Danger,
        Some(v) if v > warning => Severity::Warning,
        Some(_) => Severity::Ok,
    }
}

pub fn temperature_severity(celsius: Option<f64>) -> Severity {
    banded(celsius, TEMPERATURE_WARNING_C, TEMPERATURE_DANGER_C)
}

pub fn co2_severity(ppm: Option<f64>) -> Severity {
    banded(ppm, CO2_WARNING_PPM, CO2_DANGER_PPM)
}

pub fn ammonia_severity(ppm: Option<f64>) -> Severity {
    banded(ppm, AMMONIA_WARNING_PPM, AMMONIA_DANGER_PPM)
}

pub fn h2s_severity(ppm: Option<f64>) -> Severity {
    banded(ppm, H2S_WARNING_PPM, H2S_DANGER_PPM)
}

/// Humidity only ever warns; there is no danger band.
pub fn humidity_severity(percent: Option<f64>) -> Severity {
    match percent {
        None => Severity::Unknown,
        Some(v) if !(HUMIDITY_LOW_PCT..=HUMIDITY_HIGH_PCT).contains(&v) => Severity::Warning,
        Some(_) => Severity::Ok,
    }
}

pub fn air_quality_severity(quality: Option<AirQuality>) -> Severity {
    match quality {
        None => Severity::Unknown,
        Some(AirQuality::Good) => Severity::Ok,
        Some(AirQuality::Moderate) => Severity::Warning,
        Some(AirQuality::Poor) => Severity::Danger,
    }
}

pub fn door_severity(door_open: Option<bool>) -> Severity {
    match door_open {
        None => Severity::Unknown,
        Some(true) => Severity::Danger,
        Some(false) => Severity::Ok,
    }
}

/// Severity of every channel in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorAssessment {
    pub temperature: Severity,
    pub humidity: Severity,
    pub co2: Severity,
    pub ammonia: Severity,
    pub h2s: Severity,
    pub air_quality: Severity,
    pub door: Severity,
}

impl SensorAssessment {
    fn channels(&self) -> [Severity; 7] {
        [
            self.temperature,
            self.humidity,
            self.co2,
            self.ammonia,
            self.h2s,
            self.air_quality,
            self.door,
        ]
    }

    /// Worst reported severity, or `Unknown` if nothing reported.
    pub fn worst(&self) -> Severity {
        self.channels()
            .into_iter()
            .max()
            .unwrap_or(Severity::Unknown)
    }
}

pub fn assess_snapshot(snapshot: &SensorSnapshot) -> SensorAssessment {
    SensorAssessment {
        temperature: temperature_severity(snapshot.temperature),
        humidity: humidity_severity(snapshot.humidity),
        co2: co2_severity(snapshot.co2_ppm),
        ammonia: ammonia_severity(snapshot.ammonia_ppm),
        h2s: h2s_severity(snapshot.h2s_ppm),
        air_quality: air_quality_severity(snapshot.air_quality),
        door: door_severity(snapshot.door_open),
    }
}
