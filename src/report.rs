// report.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::domain::spoilage::{check_spoilage, SpoilageReport};
use crate::domain::thresholds::Severity;
use crate::view::{render_inventory, render_sensors, InventoryView, SensorPanel, ViewState};

/// Everything one screen shows after a refresh, in renderer-neutral form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub generated_at: DateTime<Utc>,
    pub revision: u64,
    pub inventory: InventoryView,
    pub sensors: Option<SensorPanel>,
    pub spoilage: SpoilageReport,
}

impl StatusReport {
    pub fn build(state: &ViewState, now: DateTime<Utc>, config: &ClassifierConfig) -> Self {
        StatusReport {
            generated_at: now,
            revision: state.revision(),
            inventory: render_inventory(state, now, config),
            sensors: state.sensors().map(render_sensors),
            spoilage: check_spoilage(
                state.inventory(),
                state.sensors(),
                now,
                config.classify_options(),
            ),
        }
    }
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Unknown => " ",
        Severity::Ok => "✓",
        Severity::Warning => "!",
        Severity::Danger => "✗",
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fridge status at {}", self.generated_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(f)?;

        match &self.inventory {
            InventoryView::Empty => writeln!(f, "No items in fridge")?,
            InventoryView::Listed { rows, summary } => {
                writeln!(
                    f,
                    "{} items: {} spoiled, {} expired, {} expiring, {} fresh",
                    summary.total, summary.spoiled, summary.expired, summary.expiring, summary.fresh
                )?;
                for row in rows {
                    write!(
                        f,
                        "  [{:<13}] {} {} ({})",
                        row.status_label, row.category.emoji, row.name, row.quantity_label
                    )?;
                    if let Some(expiry) = &row.expiry_label {
                        write!(f, " | Expires: {expiry}")?;
                    }
                    writeln!(f)?;
                }
            }
        }

        if let Some(panel) = &self.sensors {
            writeln!(f)?;
            writeln!(f, "Sensors ({})", panel.last_updated)?;
            for readout in &panel.readouts {
                writeln!(
                    f,
                    "  {} {:<12} {}",
                    marker(readout.severity),
                    readout.label,
                    readout.value
                )?;
            }
        }

        if !self.spoilage.is_clear() {
            writeln!(f)?;
            if !self.spoilage.flagged_ids.is_empty() {
                writeln!(
                    f,
                    "Warning: {} items may be spoiled!",
                    self.spoilage.flagged_ids.len()
                )?;
            }
            for warning in &self.spoilage.warnings {
                writeln!(f, "  - {warning}")?;
            }
        }

        Ok(())
    }
}
