// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity ingestion and reporting API.

use crate::db::DEFAULT_LIST_LIMIT;
use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, Category, EmissionsSummary};
use crate::services::{check_kg, LogActivity};
use crate::time_utils::parse_date;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Methods accepted on `/api/activities`.
pub const ACTIVITIES_ALLOW: &str = "GET, POST";

/// Largest accepted `amount` or `kg` magnitude. Keeps the sum of a full
/// listing window finite.
pub const MAX_MAGNITUDE: f64 = 1e12;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/activities",
            get(list_activities)
                .post(create_activity)
                // `get` would otherwise answer HEAD too
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/api/summary", get(get_summary))
        .route("/api/estimate", post(estimate))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ACTIVITIES_ALLOW)],
        "Method Not Allowed",
    )
}

// ─── Input Parsing ───────────────────────────────────────────

/// Accept a JSON number or a numeric string within `MAX_MAGNITUDE`;
/// anything else is rejected.
fn parse_number(field: &str, value: Option<&Value>) -> Result<Option<f64>> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let number = number
        .filter(|n| n.is_finite())
        .ok_or_else(|| AppError::Validation(format!("'{}' must be a finite number", field)))?;

    if number.abs() > MAX_MAGNITUDE {
        return Err(AppError::Validation(format!(
            "'{}' must be between -{:e} and {:e}",
            field, MAX_MAGNITUDE, MAX_MAGNITUDE
        )));
    }

    Ok(Some(number))
}

fn require_amount(value: Option<&Value>) -> Result<f64> {
    parse_number("amount", value)?
        .ok_or_else(|| AppError::Validation("'amount' is required".to_string()))
}

fn check(request: &impl Validate) -> Result<()> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ListQuery {
    limit: Option<u32>,
}

fn parse_limit(query: std::result::Result<Query<ListQuery>, QueryRejection>) -> Result<u32> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    match query.limit {
        None => Ok(DEFAULT_LIST_LIMIT),
        Some(limit) if (1..=DEFAULT_LIST_LIMIT).contains(&limit) => Ok(limit),
        Some(_) => Err(AppError::Validation(format!(
            "'limit' must be between 1 and {}",
            DEFAULT_LIST_LIMIT
        ))),
    }
}

/// List activities, newest date first.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ActivityRecord>>> {
    let limit = parse_limit(query)?;
    let records = state.activities.history(limit).await?;
    Ok(Json(records))
}

#[derive(Deserialize, Validate)]
struct CreateActivityRequest {
    /// `YYYY-MM-DD`; defaults to today
    date: Option<String>,
    #[serde(alias = "type")]
    category: Category,
    #[validate(length(max = 200))]
    detail: Option<String>,
    amount: Option<Value>,
    /// Pre-computed by the client; computed here only when absent
    kg: Option<Value>,
    #[validate(range(min = 0.0))]
    electricity_factor: Option<f64>,
}

/// Log a new activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateActivityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ActivityRecord>)> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    check(&request)?;

    let amount = require_amount(request.amount.as_ref())?;
    let kg = parse_number("kg", request.kg.as_ref())?;
    let date = request
        .date
        .as_deref()
        .map(|raw| {
            parse_date(raw).ok_or_else(|| {
                AppError::Validation("Invalid 'date': expected YYYY-MM-DD".to_string())
            })
        })
        .transpose()?;

    let record = state
        .activities
        .log(LogActivity {
            date,
            category: request.category,
            detail: request.detail.unwrap_or_default(),
            amount,
            kg,
            electricity_factor: request.electricity_factor,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

// ─── Summary ─────────────────────────────────────────────────

/// Positive emissions by category over recent activities.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<EmissionsSummary>> {
    let limit = parse_limit(query)?;
    let summary = state.activities.summary(limit).await?;
    Ok(Json(summary))
}

// ─── Estimate ────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct EstimateRequest {
    #[serde(alias = "type")]
    category: Category,
    #[validate(length(max = 200))]
    detail: Option<String>,
    amount: Option<Value>,
    #[validate(range(min = 0.0))]
    electricity_factor: Option<f64>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EstimateResponse {
    pub category: Category,
    /// Unit of `amount`
    pub unit: String,
    pub kg: f64,
    pub rate: f64,
}

/// Estimate kg CO2e without storing anything.
async fn estimate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    check(&request)?;

    let amount = require_amount(request.amount.as_ref())?;
    let estimate = state
        .activities
        .calculator()
        .with_override(request.electricity_factor)
        .estimate(request.category, request.detail.as_deref(), amount);

    let kg = check_kg(request.category, estimate.kg)?;

    Ok(Json(EstimateResponse {
        category: request.category,
        unit: request.category.unit().to_string(),
        kg,
        rate: estimate.rate,
    }))
}
