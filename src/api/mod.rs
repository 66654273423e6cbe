mod load;
mod models;

pub use load::{load_inventory, load_sensor_reading, parse_inventory, parse_sensor_reading};
pub use models::{ApiItem, ApiSensorReading};
