// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record storage.
//!
//! The store is append-only: records are inserted once and listed newest
//! first by date. Implementations:
//! - `FirestoreDb`: Cloud Firestore (or the emulator)
//! - `MemoryStore`: in-process, for local development and tests

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::models::{ActivityRecord, NewActivity};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
}

/// Default (and maximum) number of records returned by `list`.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

const UNKNOWN_ERROR: &str = "unknown";

/// Failures reported by a store. The message is passed through to callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Write(String),

    #[error("{0}")]
    Read(String),
}

impl StoreError {
    pub fn write(message: impl Into<String>) -> Self {
        StoreError::Write(or_unknown(message.into()))
    }

    pub fn read(message: impl Into<String>) -> Self {
        StoreError::Read(or_unknown(message.into()))
    }
}

fn or_unknown(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// Persistence contract for activity records.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Persist one record and return it with its assigned id.
    ///
    /// Either the record exists afterwards or the call failed as a whole.
    async fn insert(&self, activity: NewActivity) -> Result<ActivityRecord, StoreError>;

    /// Up to `limit` records ordered by date descending. Records sharing a
    /// date come back most recently inserted first.
    async fn list(&self, limit: u32) -> Result<Vec<ActivityRecord>, StoreError>;
}
