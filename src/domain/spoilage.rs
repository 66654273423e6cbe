// src/domain/spoilage.rs

use std::fmt;

use crate::domain::item::InventoryItem;
use crate::domain::logic::{classify, ClassifyOptions, StatusCategory};
use crate::domain::sensor::{AirQuality, SensorSnapshot};
use crate::domain::thresholds::{
    AMMONIA_DANGER_PPM, CO2_DANGER_PPM, H2S_DANGER_PPM, HUMIDITY_HIGH_PCT, TEMPERATURE_DANGER_C,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SpoilageWarning {
    HighAmmonia(f64),
    HighH2s(f64),
    PoorAirQuality,
    HighCo2(f64),
    /// °C
    HighTemperature(f64),
    /// Relative humidity, %
    HighHumidity(f64),
    DoorOpen,
}

impl fmt::Display for SpoilageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpoilageWarning::HighAmmonia(ppm) => write!(f, "High ammonia detected: {ppm:.2} PPM"),
            SpoilageWarning::HighH2s(ppm) => write!(f, "High H2S detected: {ppm:.2} PPM"),
            SpoilageWarning::PoorAirQuality => {
                write!(f, "Poor air quality detected - possible spoiled food")
            }
            SpoilageWarning::HighCo2(ppm) => {
                write!(f, "High CO2 detected: {ppm} PPM - check ventilation")
            }
            SpoilageWarning::HighTemperature(c) => write!(f, "Temperature too high: {c:.1}°C"),
            SpoilageWarning::HighHumidity(pct) => write!(f, "Humidity too high: {pct:.1}%"),
            SpoilageWarning::DoorOpen => write!(f, "Door is open"),
        }
    }
}

/// Outcome of one spoilage check. Nothing is mutated here; the caller
/// pushes `is_spoiled = true` for `flagged_ids` back through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpoilageReport {
    /// Ids of items that should now be marked spoiled, first flag first.
    pub flagged_ids: Vec<i64>,
    pub warnings: Vec<SpoilageWarning>,
}

impl SpoilageReport {
    fn flag(&mut self, id: i64) {
        if !self.flagged_ids.contains(&id) {
            self.flagged_ids.push(id);
        }
    }

    pub fn is_clear(&self) -> bool {
        self.flagged_ids.is_empty() && self.warnings.is_empty()
    }
}

/// Evaluates the latest sensor snapshot and the clock against the inventory.
///
/// Gas readings above the danger line flag every perishable item (meat,
/// dairy, seafood). Items already marked spoiled are never re-flagged.
pub fn check_spoilage(
    items: &[InventoryItem],
    snapshot: Option<&SensorSnapshot>,
    now: DateTime<Utc>,
    options: ClassifyOptions,
) -> SpoilageReport {
    let mut report = SpoilageReport::default();
    let candidates: Vec<&InventoryItem> = items.iter().filter(|i| !i.is_spoiled).collect();

    let flag_perishables = |report: &mut SpoilageReport| {
        candidates
            .iter()
            .filter(|i| i.category.is_some_and(|c| c.is_perishable()))
            .for_each(|i| report.flag(i.id));
    };

    if let Some(s) = snapshot {
        if let Some(ppm) = s.ammonia_ppm.filter(|v| *v > AMMONIA_DANGER_PPM) {
            flag_perishables(&mut report);
            report.warnings.push(SpoilageWarning::HighAmmonia(ppm));
        }

        if let Some(ppm) = s.h2s_ppm.filter(|v| *v > H2S_DANGER_PPM) {
            flag_perishables(&mut report);
            report.warnings.push(SpoilageWarning::HighH2s(ppm));
        }

        if s.air_quality == Some(AirQuality::Poor) {
            report.warnings.push(SpoilageWarning::PoorAirQuality);
        }

        if let Some(ppm) = s.co2_ppm.filter(|v| *v > CO2_DANGER_PPM) {
            report.warnings.push(SpoilageWarning::HighCo2(ppm));
        }

        if let Some(c) = s.temperature.filter(|v| *v > TEMPERATURE_DANGER_C) {
            report.warnings.push(SpoilageWarning::HighTemperature(c));
        }

        if let Some(pct) = s.humidity.filter(|v| *v > HUMIDITY_HIGH_PCT) {
            report.warnings.push(SpoilageWarning::HighHumidity(pct));
        }

        if s.door_open == Some(true) {
            report.warnings.push(SpoilageWarning::DoorOpen);
        }
    }

    for item in &candidates {
        if classify(item, now, options).status_category == StatusCategory::Expired {
            report.flag(item.id);
        }
    }

    if !report.is_clear() {
        tracing::info!(
            flagged = report.flagged_ids.len(),
            warnings = report.warnings.len(),
            "spoilage check raised alerts"
        );
    }

    report
}
