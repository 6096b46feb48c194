// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Kind of resource consumption an activity describes.
///
/// The unit of `amount` is implied by the category: km for transport,
/// kWh for electricity, liters for water, kg for recycling and food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    #[serde(alias = "transport")]
    Transport,
    #[serde(alias = "electricity")]
    Electricity,
    #[serde(alias = "water")]
    Water,
    #[serde(alias = "recycling")]
    Recycling,
    #[serde(alias = "food")]
    Food,
    #[serde(alias = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Transport,
        Category::Electricity,
        Category::Water,
        Category::Recycling,
        Category::Food,
        Category::Other,
    ];

    /// Wire name, as stored in the `category` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transport => "TRANSPORT",
            Category::Electricity => "ELECTRICITY",
            Category::Water => "WATER",
            Category::Recycling => "RECYCLING",
            Category::Food => "FOOD",
            Category::Other => "OTHER",
        }
    }

    /// Input unit for `amount`.
    pub fn unit(self) -> &'static str {
        match self {
            Category::Transport => "km",
            Category::Electricity => "kWh",
            Category::Water => "liter",
            Category::Recycling | Category::Food => "kg",
            Category::Other => "unit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored activity record.
///
/// `kg` is computed once when the record is created and is never
/// recalculated afterwards, even if emission factors change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    /// Store-assigned identifier (also used as document ID)
    pub id: String,
    /// Calendar day of the activity (`YYYY-MM-DD`)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub category: Category,
    /// Free-text detail, e.g. "Company car"
    #[serde(default)]
    pub detail: String,
    /// Quantity in the category's unit
    pub amount: f64,
    /// Estimated kg CO2e (negative for credits)
    pub kg: f64,
}

/// An activity that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    /// Defaults to the insertion day when absent
    pub date: Option<NaiveDate>,
    pub category: Category,
    pub detail: String,
    pub amount: f64,
    pub kg: f64,
}

impl NewActivity {
    /// Attach the store-assigned id, filling in `today` for a missing date.
    pub fn into_record(self, id: String, today: NaiveDate) -> ActivityRecord {
        ActivityRecord {
            id,
            date: self.date.unwrap_or(today),
            category: self.category,
            detail: self.detail,
            amount: self.amount,
            kg: self.kg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }

        let parsed: Category = serde_json::from_str("\"food\"").unwrap();
        assert_eq!(parsed, Category::Food);
        assert!(serde_json::from_str::<Category>("\"PLANE\"").is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let record = ActivityRecord {
            id: "abc".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            category: Category::Transport,
            detail: "Car".to_string(),
            amount: 12.5,
            kg: 2.625,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["date"], "2024-03-09");
        assert_eq!(value["category"], "TRANSPORT");
        assert_eq!(value["amount"], 12.5);
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let activity = NewActivity {
            date: None,
            category: Category::Water,
            detail: String::new(),
            amount: 100.0,
            kg: 0.1,
        };

        let record = activity.into_record("1".to_string(), today);
        assert_eq!(record.date, today);
        assert_eq!(record.id, "1");
    }
}
