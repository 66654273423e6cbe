// src/view/render.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::domain::item::{category_tag, CategoryTag};
use crate::domain::logic::StatusCategory;
use crate::domain::ordering::{sort_inventory, ClassifiedItem};
use crate::domain::sensor::SensorSnapshot;
use crate::domain::thresholds::{assess_snapshot, Severity};
use crate::view::state::ViewState;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MISSING: &str = "--";

/// A ViewModel for one inventory row, shared by every screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub id: i64,
    pub name: String,
    /// e.g. "2 liters"
    pub quantity_label: String,
    pub category: CategoryTag,
    pub notes: Option<String>,

    pub status: StatusCategory,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub status_icon: &'static str,
    pub days_until_expiry: Option<i64>,

    pub added_label: Option<String>,
    pub expiry_label: Option<String>,
}

impl From<&ClassifiedItem> for InventoryRow {
    fn from(classified: &ClassifiedItem) -> Self {
        let item = &classified.item;
        let status = classified.classification.status_category;

        InventoryRow {
            id: item.id,
            name: item.name.clone(),
            quantity_label: format!("{} {}", item.quantity, item.unit),
            category: category_tag(item.category),
            notes: item.notes.clone(),
            status,
            status_label: status.label(),
            status_class: status.css_class(),
            status_icon: status.icon(),
            days_until_expiry: classified.classification.days_until_expiry,
            added_label: item.added_date.map(|d| d.format(DATE_FORMAT).to_string()),
            expiry_label: item.expiry_date.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Counts shown in the header cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub spoiled: usize,
    pub expired: usize,
    /// Expires today plus expiring soon.
    pub expiring: usize,
    pub fresh: usize,
}

impl DashboardSummary {
    fn count(rows: &[InventoryRow]) -> Self {
        rows.iter().fold(
            DashboardSummary {
                total: rows.len(),
                ..Default::default()
            },
            |mut acc, row| {
                match row.status {
                    StatusCategory::Spoiled => acc.spoiled += 1,
                    StatusCategory::Expired => acc.expired += 1,
                    StatusCategory::ExpiresToday | StatusCategory::ExpiringSoon => {
                        acc.expiring += 1
                    }
                    StatusCategory::Fresh => acc.fresh += 1,
                }
                acc
            },
        )
    }

    /// Spoiled or expired: anything that should come out of the fridge.
    pub fn needs_attention(&self) -> usize {
        self.spoiled + self.expired
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InventoryView {
    /// "No items in fridge"
    Empty,
    Listed {
        rows: Vec<InventoryRow>,
        summary: DashboardSummary,
    },
}

/// One classification pass over the view state. Called on load, on every
/// poll tick and after every add/edit/delete; it keeps nothing between calls.
pub fn render_inventory(
    state: &ViewState,
    now: DateTime<Utc>,
    config: &ClassifierConfig,
) -> InventoryView {
    if state.inventory().is_empty() {
        return InventoryView::Empty;
    }

    let rows: Vec<InventoryRow> = sort_inventory(state.inventory(), now, config.classify_options())
        .iter()
        .map(InventoryRow::from)
        .collect();
    let summary = DashboardSummary::count(&rows);

    InventoryView::Listed { rows, summary }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReadout {
    pub label: &'static str,
    pub value: String,
    pub severity: Severity,
    /// Style hook for the reading, empty when there is nothing to judge.
    pub css_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorPanel {
    pub readouts: Vec<SensorReadout>,
    pub overall: Severity,
    pub last_updated: String,
}

fn readout(label: &'static str, value: Option<String>, severity: Severity) -> SensorReadout {
    SensorReadout {
        label,
        value: value.unwrap_or_else(|| MISSING.to_string()),
        severity,
        css_class: severity.css_class(),
    }
}

/// Builds the sensor cards. Missing channels read "--" with unknown severity.
pub fn render_sensors(snapshot: &SensorSnapshot) -> SensorPanel {
    let assessment = assess_snapshot(snapshot);
    let ppm = |v: Option<f64>, precise: bool| {
        v.map(|x| if precise { format!("{x:.2} PPM") } else { format!("{x} PPM") })
    };

    let readouts = vec![
        readout(
            "Temperature",
            snapshot.temperature.map(|t| format!("{t:.1}°C")),
            assessment.temperature,
        ),
        readout(
            "Humidity",
            snapshot.humidity.map(|h| format!("{h:.1}%")),
            assessment.humidity,
        ),
        readout("CO2", ppm(snapshot.co2_ppm, false), assessment.co2),
        readout("Ammonia", ppm(snapshot.ammonia_ppm, true), assessment.ammonia),
        readout("H2S", ppm(snapshot.h2s_ppm, true), assessment.h2s),
        readout(
            "Air Quality",
            snapshot.air_quality.map(|q| q.as_str().to_uppercase()),
            assessment.air_quality,
        ),
        readout(
            "Door",
            snapshot
                .door_open
                .map(|open| (if open { "OPEN" } else { "CLOSED" }).to_string()),
            assessment.door,
        ),
    ];

    let last_updated = match snapshot.timestamp {
        Some(ts) => format!("Last updated: {}", ts.format("%Y-%m-%d %H:%M:%S")),
        None => format!("Last updated: {MISSING}"),
    };

    SensorPanel {
        readouts,
        overall: assessment.worst(),
        last_updated,
    }
}
