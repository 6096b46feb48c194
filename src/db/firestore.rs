// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore-backed activity store.
//!
//! Records live in the `activities` collection, keyed by a UUIDv7 so that
//! document IDs sort by insertion time.

use crate::db::{collections, ActivityStore, StoreError};
use crate::models::{ActivityRecord, NewActivity};
use crate::time_utils::today_utc;
use async_trait::async_trait;

const OFFLINE: &str = "Database not connected (offline mode)";

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> anyhow::Result<Self> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to Firestore: {}", e))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> anyhow::Result<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Firestore Emulator: {}", e))?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an offline client for testing.
    ///
    /// Every store operation fails as if the network were down.
    pub fn new_mock() -> Self {
        Self { client: None }
    }
}

#[async_trait]
impl ActivityStore for FirestoreDb {
    async fn insert(&self, activity: NewActivity) -> Result<ActivityRecord, StoreError> {
        let client = self.client.as_ref().ok_or_else(|| StoreError::write(OFFLINE))?;

        let id = uuid::Uuid::now_v7().to_string();
        let record = activity.into_record(id, today_utc());

        // `insert` fails if the document already exists
        let stored: ActivityRecord = client
            .fluent()
            .insert()
            .into(collections::ACTIVITIES)
            .document_id(&record.id)
            .object(&record)
            .execute()
            .await
            .map_err(|e| StoreError::write(e.to_string()))?;

        Ok(stored)
    }

    async fn list(&self, limit: u32) -> Result<Vec<ActivityRecord>, StoreError> {
        let client = self.client.as_ref().ok_or_else(|| StoreError::read(OFFLINE))?;

        client
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .order_by([
                ("date", firestore::FirestoreQueryDirection::Descending),
                ("id", firestore::FirestoreQueryDirection::Descending),
            ])
            .limit(limit)
            .obj()
            .query()
            .await
            .map_err(|e| StoreError::read(e.to_string()))
    }
}
