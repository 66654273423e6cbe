// src/domain/ordering.rs

use std::cmp::Ordering;

use crate::domain::item::InventoryItem;
use crate::domain::logic::{classify, ClassificationResult, ClassifyOptions};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An item paired with its classification for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedItem {
    pub item: InventoryItem,
    pub classification: ClassificationResult,
}

/// Severity first, then case-insensitive name, then id.
///
/// Items with distinct ids never compare equal, so repeated sorts of the
/// same list always produce the same order.
pub fn compare_classified(a: &ClassifiedItem, b: &ClassifiedItem) -> Ordering {
    a.classification
        .sort_rank
        .cmp(&b.classification.sort_rank)
        .then_with(|| compare_names(&a.item.name, &b.item.name))
        .then_with(|| a.item.id.cmp(&b.item.id))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b))
}

/// Classifies every item at `now` and returns them in display order.
/// The input slice is left untouched.
pub fn sort_inventory(
    items: &[InventoryItem],
    now: DateTime<Utc>,
    options: ClassifyOptions,
) -> Vec<ClassifiedItem> {
    let mut classified: Vec<ClassifiedItem> = items
        .iter()
        .map(|item| ClassifiedItem {
            item: item.clone(),
            classification: classify(item, now, options),
        })
        .collect();

    classified.sort_by(compare_classified);
    classified
}
