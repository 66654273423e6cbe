pub mod item;
pub mod logic;
pub mod ordering;
pub mod sensor;
pub mod spoilage;
pub mod thresholds;
pub mod time;

pub use item::{category_tag, Category, CategoryTag, InventoryItem};
pub use logic::{
    classify, classify_item, days_until_expiry, ClassificationResult, ClassifyOptions,
    ExpiryPolicy, StatusCategory,
};
pub use ordering::{compare_classified, sort_inventory, ClassifiedItem};
pub use sensor::{AirQuality, SensorSnapshot};
pub use spoilage::{check_spoilage, SpoilageReport, SpoilageWarning};
pub use thresholds::{assess_snapshot, SensorAssessment, Severity};
