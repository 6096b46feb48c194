// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emission factor table.
//!
//! Each category maps to a [`FactorRule`]. Keyword rules are checked in
//! order against the lower-cased detail text and the first match wins;
//! the category default applies when nothing matches. All rates are in
//! kg CO2e per unit of `amount`.

use crate::models::Category;

/// One keyword-selected rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordRule {
    /// Any of these substrings selects the rule
    pub keywords: &'static [&'static str],
    pub rate: f64,
}

impl KeywordRule {
    /// `detail` must already be lower-cased.
    pub fn matches(&self, detail: &str) -> bool {
        self.keywords.iter().any(|k| detail.contains(k))
    }
}

/// How a category's rate is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactorRule {
    /// Ordered keyword rules with a fallback rate
    Keywords {
        rules: &'static [KeywordRule],
        default: f64,
    },
    /// Rate comes from the caller (electricity grid intensity)
    CallerSupplied,
    /// Same rate regardless of detail
    Flat(f64),
}

impl FactorRule {
    /// Resolve the rate for a lower-cased detail string.
    pub fn rate(&self, detail: &str, electricity_factor: f64) -> f64 {
        match *self {
            FactorRule::Keywords { rules, default } => rules
                .iter()
                .find(|rule| rule.matches(detail))
                .map_or(default, |rule| rule.rate),
            FactorRule::CallerSupplied => electricity_factor,
            FactorRule::Flat(rate) => rate,
        }
    }
}

const TRANSPORT_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["car"],
        rate: 0.21,
    },
    KeywordRule {
        keywords: &["bus"],
        rate: 0.089,
    },
    KeywordRule {
        keywords: &["train"],
        rate: 0.041,
    },
    KeywordRule {
        keywords: &["bike", "walk"],
        rate: 0.0,
    },
];

const RECYCLING_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["plastic"],
        rate: -0.02,
    },
    KeywordRule {
        keywords: &["paper"],
        rate: -0.03,
    },
    KeywordRule {
        keywords: &["glass"],
        rate: -0.01,
    },
];

const FOOD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["beef"],
        rate: 27.0,
    },
    KeywordRule {
        keywords: &["lamb"],
        rate: 39.2,
    },
    KeywordRule {
        keywords: &["chicken"],
        rate: 6.9,
    },
    KeywordRule {
        keywords: &["veg"],
        rate: 2.0,
    },
];

const TRANSPORT_DEFAULT: f64 = 0.18;
const WATER_RATE: f64 = 0.001;
const RECYCLING_DEFAULT: f64 = -0.015;
const FOOD_DEFAULT: f64 = 4.0;
const OTHER_RATE: f64 = 1.0;

/// Rate selection rule for a category.
pub fn factor_rule(category: Category) -> FactorRule {
    match category {
        Category::Transport => FactorRule::Keywords {
            rules: TRANSPORT_RULES,
            default: TRANSPORT_DEFAULT,
        },
        Category::Electricity => FactorRule::CallerSupplied,
        Category::Water => FactorRule::Flat(WATER_RATE),
        Category::Recycling => FactorRule::Keywords {
            rules: RECYCLING_RULES,
            default: RECYCLING_DEFAULT,
        },
        Category::Food => FactorRule::Keywords {
            rules: FOOD_RULES,
            default: FOOD_DEFAULT,
        },
        Category::Other => FactorRule::Flat(OTHER_RATE),
    }
}
