// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carbon calculator: turns an activity into an estimated kg CO2e.
//!
//! The calculation is pure. Callers must reject non-numeric input before
//! getting here; every finite `amount` yields a result. No rounding is
//! applied.

use crate::models::Category;
use crate::services::emission_factors::factor_rule;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Default grid intensity in kg CO2e per kWh.
pub const DEFAULT_ELECTRICITY_FACTOR: f64 = 0.475;

/// Result of an estimate, with the rate that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Estimate {
    pub kg: f64,
    /// kg CO2e per unit of amount
    pub rate: f64,
}

/// Calculator bound to an electricity factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonCalculator {
    electricity_factor: f64,
}

impl Default for CarbonCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_ELECTRICITY_FACTOR)
    }
}

impl CarbonCalculator {
    pub fn new(electricity_factor: f64) -> Self {
        Self { electricity_factor }
    }

    pub fn electricity_factor(&self) -> f64 {
        self.electricity_factor
    }

    /// Copy of this calculator with a per-call factor override.
    pub fn with_override(&self, electricity_factor: Option<f64>) -> Self {
        electricity_factor.map_or(*self, Self::new)
    }

    /// Estimate emissions for an activity. A missing detail matches only
    /// the category default.
    pub fn estimate(&self, category: Category, detail: Option<&str>, amount: f64) -> Estimate {
        let detail = detail.unwrap_or_default().to_lowercase();
        let rate = factor_rule(category).rate(&detail, self.electricity_factor);
        Estimate {
            kg: amount * rate,
            rate,
        }
    }

    pub fn compute(&self, category: Category, detail: Option<&str>, amount: f64) -> f64 {
        self.estimate(category, detail, amount).kg
    }
}

/// Compute kg CO2e with an explicit electricity factor.
pub fn compute(category: Category, detail: &str, amount: f64, electricity_factor: f64) -> f64 {
    CarbonCalculator::new(electricity_factor).compute(category, Some(detail), amount)
}
