// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eco-Tracker: personal carbon footprint logging
//!
//! This crate provides the backend API for logging resource-consumption
//! activities, estimating their CO2e and summarizing emissions by category.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::ActivityStore;
use services::{ActivityService, CarbonCalculator};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activities: ActivityService,
}

impl AppState {
    /// Wire the activity service to a store using the configured
    /// electricity factor.
    pub fn new(config: Config, store: Arc<dyn ActivityStore>) -> Self {
        let calculator = CarbonCalculator::new(config.default_electricity_factor);
        Self {
            activities: ActivityService::new(store, calculator),
            config,
        }
    }
}
