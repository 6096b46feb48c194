//! Emission totals by category for dashboard queries.
//!
//! Only positive emissions count toward the totals. Credits (records with
//! `kg <= 0`, e.g. recycling) are tallied separately and never reduce the
//! footprint.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{ActivityRecord, Category};

/// Positive emissions for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryTotal {
    pub category: Category,
    pub kg: f64,
}

/// Aggregated emissions over a set of activity records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EmissionsSummary {
    // ─── Positive Emissions ──────────────────────────────────────
    /// Totals per category, in order of first appearance
    #[serde(default)]
    pub per_category: Vec<CategoryTotal>,
    /// Sum of all positive kg values
    #[serde(default)]
    pub grand_total: f64,

    // ─── Credits ─────────────────────────────────────────────────
    /// Sum of non-positive kg values (not part of `grand_total`)
    #[serde(default)]
    pub credits: f64,

    /// Records seen, including credits
    #[serde(default)]
    pub record_count: u32,
}

impl EmissionsSummary {
    /// Aggregate a sequence of records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ActivityRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            summary.add_record(record);
        }
        summary
    }

    /// Fold one record into the totals.
    pub fn add_record(&mut self, record: &ActivityRecord) {
        self.record_count += 1;

        // NaN falls through to neither branch
        if record.kg > 0.0 {
            match self
                .per_category
                .iter_mut()
                .find(|t| t.category == record.category)
            {
                Some(total) => total.kg += record.kg,
                None => self.per_category.push(CategoryTotal {
                    category: record.category,
                    kg: record.kg,
                }),
            }
            self.grand_total += record.kg;
        } else if record.kg <= 0.0 {
            self.credits += record.kg;
        }
    }

    /// Positive total for a category, if any record contributed to it.
    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.per_category
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.kg)
    }

    pub fn is_empty(&self) -> bool {
        self.per_category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(id: u32, category: Category, kg: f64) -> ActivityRecord {
        ActivityRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category,
            detail: String::new(),
            amount: 1.0,
            kg,
        }
    }

    #[test]
    fn test_excludes_non_positive() {
        let records = vec![
            make_record(1, Category::Transport, 10.0),
            make_record(2, Category::Recycling, -5.0),
            make_record(3, Category::Transport, 5.0),
        ];

        let summary = EmissionsSummary::from_records(&records);

        assert_eq!(summary.per_category.len(), 1);
        assert_eq!(summary.category_total(Category::Transport), Some(15.0));
        assert_eq!(summary.category_total(Category::Recycling), None);
        assert_eq!(summary.grand_total, 15.0);
        assert_eq!(summary.credits, -5.0);
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<ActivityRecord> = Vec::new();
        let summary = EmissionsSummary::from_records(&records);

        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, 0.0);
        assert_eq!(summary.record_count, 0);
    }

    #[test]
    fn test_zero_kg_is_not_an_emission() {
        let records = vec![
            make_record(1, Category::Transport, 0.0),
            make_record(2, Category::Water, 0.25),
        ];

        let summary = EmissionsSummary::from_records(&records);

        assert_eq!(summary.category_total(Category::Transport), None);
        assert_eq!(summary.grand_total, 0.25);
    }

    #[test]
    fn test_first_encounter_order() {
        let records = vec![
            make_record(1, Category::Food, 8.0),
            make_record(2, Category::Electricity, 4.75),
            make_record(3, Category::Food, 2.0),
        ];

        let summary = EmissionsSummary::from_records(&records);
        let order: Vec<Category> = summary.per_category.iter().map(|t| t.category).collect();

        assert_eq!(order, vec![Category::Food, Category::Electricity]);
        assert_eq!(summary.category_total(Category::Food), Some(10.0));
    }

    #[test]
    fn test_grand_total_matches_category_sum() {
        let records = vec![
            make_record(1, Category::Food, 0.1),
            make_record(2, Category::Water, 0.2),
            make_record(3, Category::Other, 0.3),
            make_record(4, Category::Recycling, -0.4),
        ];

        let summary = EmissionsSummary::from_records(&records);
        let by_category: f64 = summary.per_category.iter().map(|t| t.kg).sum();

        assert!((summary.grand_total - by_category).abs() < 1e-9);
    }

    #[test]
    fn test_full_window_of_largest_records_stays_finite() {
        // 1e14 is the largest kg the service stores
        let records: Vec<ActivityRecord> = (0..100)
            .map(|i| make_record(i, Category::Food, 1e14))
            .collect();

        let summary = EmissionsSummary::from_records(&records);

        assert!(summary.grand_total.is_finite());
        assert_eq!(summary.category_total(Category::Food), Some(1e16));
    }
}
