//! Training domain entity and content blocks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of a content block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Title,
    Text,
    Video,
    Image,
    Code,
    List,
    Quote,
    Divider,
}

/// A single ordered content element of a training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentBlock {
    #[schema(example = "block-1")]
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[schema(example = 0)]
    pub order: i32,
    /// Type-dependent payload (e.g. `{"text": "..."}` or `{"url": "..."}`)
    #[serde(default)]
    #[schema(value_type = Object)]
    pub content: serde_json::Map<String, serde_json::Value>,
}

/// Training module as persisted in the training store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Training {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    #[schema(example = "Forklift safety")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<ContentBlock>,
    /// Email of the creator; only the creator may delete or restore
    #[schema(example = "jane@example.com")]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = in the recycle bin)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields supplied when creating a training
#[derive(Debug, Clone, Default)]
pub struct NewTraining {
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default)]
pub struct TrainingChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub blocks: Option<Vec<ContentBlock>>,
}

impl Training {
    /// Create an active training with a fresh identifier
    pub fn new(fields: NewTraining, created_by: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: fields.title,
            description: fields.description,
            thumbnail_url: fields.thumbnail_url,
            blocks: fields.blocks,
            created_by,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.created_by == email
    }

    /// Check if training is in the recycle bin
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if training is active (not deleted)
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Move to the recycle bin
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Restore from the recycle bin
    pub fn restore(&mut self) {
        self.deleted_at = None;
        self.updated_at = Utc::now();
    }

    pub fn apply(&mut self, changes: TrainingChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(thumbnail_url) = changes.thumbnail_url {
            self.thumbnail_url = Some(thumbnail_url);
        }
        if let Some(blocks) = changes.blocks {
            self.blocks = blocks;
        }
        self.updated_at = Utc::now();
    }
}
