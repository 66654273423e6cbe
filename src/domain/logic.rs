// src/domain/logic.rs

use crate::domain::item::InventoryItem;
use chrono::{DateTime, Utc};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Default width of the "expiring soon" band, in days.
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Freshness status of an inventory item, in severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusCategory {
    Spoiled,
    Expired,
    ExpiresToday,
    ExpiringSoon,
    Fresh,
}

impl StatusCategory {
    /// Severity rank used as the primary sort key. Lower sorts first.
    pub fn sort_rank(self) -> u8 {
        match self {
            StatusCategory::Spoiled => 0,
            StatusCategory::Expired => 1,
            StatusCategory::ExpiresToday => 2,
            StatusCategory::ExpiringSoon => 3,
            StatusCategory::Fresh => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Spoiled => "Spoiled",
            StatusCategory::Expired => "Expired",
            StatusCategory::ExpiresToday => "Expires Today",
            StatusCategory::ExpiringSoon => "Expires Soon",
            StatusCategory::Fresh => "Fresh",
        }
    }

    /// Item css class shared by every view stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusCategory::Spoiled | StatusCategory::Expired => "spoiled",
            StatusCategory::ExpiresToday | StatusCategory::ExpiringSoon => "expiring",
            StatusCategory::Fresh => "",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatusCategory::Spoiled => "fas fa-exclamation-triangle status-spoiled",
            StatusCategory::Expired => "fas fa-times-circle status-spoiled",
            StatusCategory::ExpiresToday | StatusCategory::ExpiringSoon => {
                "fas fa-clock status-expiring"
            }
            StatusCategory::Fresh => "fas fa-check-circle status-fresh",
        }
    }
}

/// How overdue items are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// One day overdue still reads "Expires Today"; two or more is `Expired`.
    #[default]
    Buffered,
    /// Any overdue item is `Expired` immediately.
    Immediate,
}

/// Tunables for [`classify`]. `Default` matches what every kiosk ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifyOptions {
    pub policy: ExpiryPolicy,
    pub expiring_soon_days: i64,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            policy: ExpiryPolicy::Buffered,
            expiring_soon_days: EXPIRING_SOON_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub status_category: StatusCategory,
    pub sort_rank: u8,
    /// Whole days until expiry, when an expiry date was consulted.
    pub days_until_expiry: Option<i64>,
}

impl ClassificationResult {
    fn new(status_category: StatusCategory, days_until_expiry: Option<i64>) -> Self {
        Self {
            status_category,
            sort_rank: status_category.sort_rank(),
            days_until_expiry,
        }
    }
}

/// Days left until `expiry`, with fractional days rounded up toward the
/// future: 2.1 days left is 3, half a day overdue is 0.
pub fn days_until_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        whole
    } else {
        whole + 1
    }
}

/// Determines the freshness status of an item at `now`.
/// The order of checks determines precedence: a spoiled flag beats any date.
pub fn classify(
    item: &InventoryItem,
    now: DateTime<Utc>,
    options: ClassifyOptions,
) -> ClassificationResult {
    if item.is_spoiled {
        return ClassificationResult::new(StatusCategory::Spoiled, None);
    }

    let Some(expiry) = item.expiry_date else {
        return ClassificationResult::new(StatusCategory::Fresh, None);
    };

    let days = days_until_expiry(expiry, now);
    let status = match options.policy {
        ExpiryPolicy::Buffered if days <= -2 => StatusCategory::Expired,
        ExpiryPolicy::Immediate if days < 0 => StatusCategory::Expired,
        _ if days <= 0 => StatusCategory::ExpiresToday,
        _ if days <= options.expiring_soon_days => StatusCategory::ExpiringSoon,
        _ => StatusCategory::Fresh,
    };

    ClassificationResult::new(status, Some(days))
}

/// [`classify`] with the default options.
pub fn classify_item(item: &InventoryItem, now: DateTime<Utc>) -> ClassificationResult {
    classify(item, now, ClassifyOptions::default())
}
