// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store.

use crate::db::{ActivityStore, StoreError};
use crate::models::{ActivityRecord, NewActivity};
use crate::time_utils::today_utc;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Append-only store kept in process memory.
///
/// Failures can be switched on to exercise error paths.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ActivityRecord>>,
    fail_on_insert: RwLock<Option<String>>,
    fail_on_list: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent inserts fail with `message` (`None` to recover).
    pub async fn set_fail_on_insert(&self, message: Option<&str>) {
        *self.fail_on_insert.write().await = message.map(str::to_string);
    }

    /// Make subsequent lists fail with `message` (`None` to recover).
    pub async fn set_fail_on_list(&self, message: Option<&str>) {
        *self.fail_on_list.write().await = message.map(str::to_string);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ActivityStore for MemoryStore {
    async fn insert(&self, activity: NewActivity) -> Result<ActivityRecord, StoreError> {
        if let Some(message) = self.fail_on_insert.read().await.as_deref() {
            return Err(StoreError::write(message));
        }

        let mut records = self.records.write().await;
        // Zero-padded so ids sort in insertion order
        let id = format!("{:012}", records.len() + 1);
        let record = activity.into_record(id, today_utc());
        records.push(record.clone());

        Ok(record)
    }

    async fn list(&self, limit: u32) -> Result<Vec<ActivityRecord>, StoreError> {
        if let Some(message) = self.fail_on_list.read().await.as_deref() {
            return Err(StoreError::read(message));
        }

        let records = self.records.read().await;
        let mut newest_first: Vec<ActivityRecord> = records.iter().rev().cloned().collect();
        // Stable sort keeps later inserts first within a date
        newest_first.sort_by(|a, b| b.date.cmp(&a.date));
        newest_first.truncate(limit as usize);

        Ok(newest_first)
    }
}
