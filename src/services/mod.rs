// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod calculator;
pub mod emission_factors;

pub use activity::{check_kg, ActivityService, LogActivity, MAX_KG};
pub use calculator::{CarbonCalculator, Estimate, DEFAULT_ELECTRICITY_FACTOR};
pub use emission_factors::{factor_rule, FactorRule, KeywordRule};
