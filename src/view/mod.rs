pub mod poll;
pub mod render;
pub mod state;

pub use poll::{PollSchedule, MIN_POLL_INTERVAL};
pub use render::{
    render_inventory, render_sensors, DashboardSummary, InventoryRow, InventoryView, SensorPanel,
    SensorReadout,
};
pub use state::{RefreshOutcome, ViewState};
