// src/domain/item.rs

use crate::api::ApiItem;
use crate::domain::time::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Storage categories the add-item forms offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meat,
    Dairy,
    Vegetables,
    Fruits,
    Seafood,
    Frozen,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Meat,
        Category::Dairy,
        Category::Vegetables,
        Category::Fruits,
        Category::Seafood,
        Category::Frozen,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Meat => "meat",
            Category::Dairy => "dairy",
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Seafood => "seafood",
            Category::Frozen => "frozen",
            Category::Other => "other",
        }
    }

    /// Maps a raw category string from the API. Empty means "no category";
    /// anything unrecognized lands in `Other`.
    pub fn from_raw(raw: Option<&str>) -> Option<Category> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        let normalized = raw.to_lowercase();

        let found = Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized);

        if found.is_none() {
            tracing::debug!(category = raw, "unknown category, using other");
        }
        Some(found.unwrap_or(Category::Other))
    }

    /// Categories whose contents the gas sensors can detect going off.
    pub fn is_perishable(self) -> bool {
        matches!(self, Category::Meat | Category::Dairy | Category::Seafood)
    }
}

/// Display tag for a category: emoji, label and the css class the
/// stylesheets key their colors on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTag {
    pub emoji: &'static str,
    pub label: &'static str,
    pub css_class: &'static str,
}

/// Static lookup; an absent category gets the `other` tag.
pub fn category_tag(category: Option<Category>) -> CategoryTag {
    let (emoji, label, css_class) = match category.unwrap_or(Category::Other) {
        Category::Meat => ("🥩", "Meat", "category-meat"),
        Category::Dairy => ("🥛", "Dairy", "category-dairy"),
        Category::Vegetables => ("🥬", "Vegetables", "category-vegetables"),
        Category::Fruits => ("🍎", "Fruits", "category-fruits"),
        Category::Seafood => ("🐟", "Seafood", "category-seafood"),
        Category::Frozen => ("❄️", "Frozen", "category-frozen"),
        Category::Other => ("📦", "Other", "category-other"),
    };

    CategoryTag {
        emoji,
        label,
        css_class,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("item {0} has an empty name")]
    EmptyName(i64),
    #[error("item {id} has non-positive quantity {quantity}")]
    NonPositiveQuantity { id: i64, quantity: i64 },
}

/// An inventory item after validation, ready for classification.
/// This is the boundary between the raw API payload and the classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub category: Option<Category>,
    pub notes: Option<String>,

    /// `None` only when the backend sent something unparseable.
    pub added_date: Option<DateTime<Utc>>,
    /// `None` means the item does not expire.
    pub expiry_date: Option<DateTime<Utc>>,

    pub is_spoiled: bool,
}

impl InventoryItem {
    /// Creates a validated `InventoryItem` from the raw API model.
    ///
    /// Name and quantity are required. Timestamps degrade instead of failing:
    /// an expiry date that cannot be read is treated as "does not expire".
    pub fn from_api_item(raw: &ApiItem) -> Result<Self, ItemError> {
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(ItemError::EmptyName(raw.id));
        }

        let quantity = u32::try_from(raw.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(ItemError::NonPositiveQuantity {
                id: raw.id,
                quantity: raw.quantity,
            })?;

        let parse_date = |field: &str, value: Option<&str>| {
            let value = value.filter(|s| !s.trim().is_empty())?;
            let parsed = parse_timestamp(value);
            if parsed.is_none() {
                tracing::warn!(item_id = raw.id, field, value, "unparseable timestamp, ignoring");
            }
            parsed
        };

        Ok(InventoryItem {
            id: raw.id,
            name: name.to_string(),
            quantity,
            unit: raw.unit.trim().to_string(),
            category: Category::from_raw(raw.category.as_deref()),
            notes: raw.notes.clone().filter(|n| !n.trim().is_empty()),
            added_date: parse_date("added_date", raw.added_date.as_deref()),
            expiry_date: parse_date("expiry_date", raw.expiry_date.as_deref()),
            is_spoiled: raw.is_spoiled,
        })
    }
}

/// Converts a whole payload, skipping items that fail validation.
pub fn items_from_api(raw: &[ApiItem]) -> Vec<InventoryItem> {
    raw.iter()
        .filter_map(|item| match InventoryItem::from_api_item(item) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping inventory item: {e}");
                None
            }
        })
        .collect()
}
