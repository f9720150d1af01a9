use std::collections::HashMap;

use serde::Serialize;

use super::{Amount, ExpenseRecord};

/// Overall and per-category totals.
///
/// `by_category` has one entry per category that appears in at least one
/// record. Its iteration order is unspecified; use [`Summary::sorted_categories`]
/// when a stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: Amount,
    #[serde(rename = "categories")]
    pub by_category: HashMap<String, Amount>,
}

impl Summary {
    /// Sum amounts overall and per category in a single pass.
    pub fn compute(records: &[ExpenseRecord]) -> Self {
        let mut summary = Summary::default();

        for record in records {
            summary.total += record.amount();
            *summary
                .by_category
                .entry(record.category().to_string())
                .or_insert(0.0) += record.amount();
        }

        summary
    }

    /// Category totals ordered by category name.
    pub fn sorted_categories(&self) -> Vec<(&str, Amount)> {
        let mut categories: Vec<(&str, Amount)> = self
            .by_category
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        categories
    }

    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Percentage of the overall total spent in `category`.
    /// Zero when the category is absent or the overall total is zero.
    pub fn share_of(&self, category: &str) -> f64 {
        if self.total == 0.0 {
            return 0.0;
        }
        self.by_category
            .get(category)
            .map(|total| total / self.total * 100.0)
            .unwrap_or(0.0)
    }
}
