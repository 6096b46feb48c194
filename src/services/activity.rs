// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity logging service.
//!
//! Handles the core workflow:
//! 1. Derive kg CO2e for an activity (unless the caller already did)
//! 2. Reject a non-finite kg before anything is written
//! 3. Store the record, exactly one write per activity
//! 4. Summarize stored records by category

use crate::db::{ActivityStore, StoreError};
use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, Category, EmissionsSummary, NewActivity};
use crate::services::CarbonCalculator;
use chrono::NaiveDate;
use std::sync::Arc;

/// Largest kg magnitude that can be stored. A full listing window of
/// records at this bound still sums to a finite total.
pub const MAX_KG: f64 = 1e14;

/// Reject a kg value that is not finite or exceeds `MAX_KG`.
pub fn check_kg(category: Category, kg: f64) -> Result<f64> {
    if !kg.is_finite() {
        return Err(AppError::Validation(format!(
            "Computed kg for {} is not a finite number",
            category
        )));
    }
    if kg.abs() > MAX_KG {
        return Err(AppError::Validation(format!(
            "kg for {} must be between -{:e} and {:e}",
            category, MAX_KG, MAX_KG
        )));
    }
    Ok(kg)
}

/// A validated activity ready to be logged.
#[derive(Debug, Clone)]
pub struct LogActivity {
    pub date: Option<NaiveDate>,
    pub category: Category,
    pub detail: String,
    pub amount: f64,
    /// Pre-computed kg CO2e; stored as given when present
    pub kg: Option<f64>,
    /// Per-call electricity factor, used only when `kg` is absent
    pub electricity_factor: Option<f64>,
}

/// Logs activities and reports on them.
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
    calculator: CarbonCalculator,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>, calculator: CarbonCalculator) -> Self {
        Self { store, calculator }
    }

    pub fn calculator(&self) -> &CarbonCalculator {
        &self.calculator
    }

    /// Compute (if needed) and store one activity.
    ///
    /// No retry on failure; the store error is returned unchanged.
    pub async fn log(&self, activity: LogActivity) -> Result<ActivityRecord> {
        let kg = match activity.kg {
            Some(kg) => kg,
            None => self
                .calculator
                .with_override(activity.electricity_factor)
                .compute(activity.category, Some(&activity.detail), activity.amount),
        };

        // The stored kg is permanent, so an overflowed estimate must not get in
        let kg = check_kg(activity.category, kg)?;

        let record = self
            .store
            .insert(NewActivity {
                date: activity.date,
                category: activity.category,
                detail: activity.detail,
                amount: activity.amount,
                kg,
            })
            .await?;

        tracing::info!(
            id = %record.id,
            category = %record.category,
            date = %record.date,
            kg = record.kg,
            "Activity logged"
        );

        Ok(record)
    }

    /// Most recent activities, newest first.
    pub async fn history(&self, limit: u32) -> std::result::Result<Vec<ActivityRecord>, StoreError> {
        let records = self.store.list(limit).await?;
        tracing::debug!(limit, count = records.len(), "Fetched activity history");
        Ok(records)
    }

    /// Category totals over the most recent `limit` activities.
    pub async fn summary(&self, limit: u32) -> std::result::Result<EmissionsSummary, StoreError> {
        let records = self.store.list(limit).await?;
        let summary = EmissionsSummary::from_records(&records);

        tracing::debug!(
            limit,
            records = summary.record_count,
            grand_total = summary.grand_total,
            "Computed emissions summary"
        );

        Ok(summary)
    }
}
