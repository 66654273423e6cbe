//! Freshness classification and view models for the fridge inventory
//! dashboards (desktop, Pi display and touch kiosk).

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod keyboard;
pub mod report;
pub mod view;

pub use config::ClassifierConfig;
pub use errors::{FridgeError, Result};
pub use report::StatusReport;

#[cfg(test)]
mod tests;
