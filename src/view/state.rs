// src/view/state.rs

use std::fmt::Display;
use std::path::Path;

use crate::api::{load_inventory, load_sensor_reading, ApiItem, ApiSensorReading};
use crate::domain::item::{items_from_api, InventoryItem};
use crate::domain::sensor::SensorSnapshot;

/// What a refresh did to the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot was replaced; carries the new revision.
    Replaced { revision: u64 },
    /// The fetch failed. The previous snapshot is untouched and `notice`
    /// is the transient message the notification layer should show.
    Retained { notice: String },
}

/// Data one screen renders from. Owned by the screen and refreshed by its
/// poll loop; nothing reads it implicitly.
///
/// Every successful refresh replaces the whole snapshot (last write wins)
/// and bumps `revision`.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    inventory: Vec<InventoryItem>,
    sensors: Option<SensorSnapshot>,
    revision: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from saved payloads in one pass. Unlike a poll there
    /// is no previous snapshot to fall back on, so a read failure is an error.
    pub fn load(inventory: &Path, sensors: Option<&Path>) -> crate::errors::Result<Self> {
        let mut state = Self::new();
        state.inventory = items_from_api(&load_inventory(inventory)?);
        state.bump();

        if let Some(path) = sensors {
            state.sensors = Some(SensorSnapshot::from_api_reading(&load_sensor_reading(path)?));
            state.bump();
        }
        Ok(state)
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn sensors(&self) -> Option<&SensorSnapshot> {
        self.sensors.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies the result of `GET /api/inventory`.
    pub fn apply_inventory<E: Display>(
        &mut self,
        fetched: Result<Vec<ApiItem>, E>,
    ) -> RefreshOutcome {
        match fetched {
            Ok(raw) => {
                self.inventory = items_from_api(&raw);
                self.bump()
            }
            Err(e) => {
                tracing::warn!("Error loading inventory: {e}");
                RefreshOutcome::Retained {
                    notice: "Error loading inventory data".to_string(),
                }
            }
        }
    }

    /// Applies the result of `GET /api/sensors`.
    pub fn apply_sensors<E: Display>(
        &mut self,
        fetched: Result<ApiSensorReading, E>,
    ) -> RefreshOutcome {
        match fetched {
            Ok(raw) => {
                self.sensors = Some(SensorSnapshot::from_api_reading(&raw));
                self.bump()
            }
            Err(e) => {
                tracing::warn!("Error loading sensor data: {e}");
                RefreshOutcome::Retained {
                    notice: "Error loading sensor data".to_string(),
                }
            }
        }
    }

    fn bump(&mut self) -> RefreshOutcome {
        self.revision += 1;
        RefreshOutcome::Replaced {
            revision: self.revision,
        }
    }
}
