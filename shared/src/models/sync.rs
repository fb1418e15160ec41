//! Offline change tracking models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operation recorded against an entity while offline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyncOperation {
    Create,
    Update,
    Delete,
}

/// A local change waiting to be pushed once the device is online
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingChange {
    pub entity_type: String,
    pub entity_id: Uuid,
    pub operation: SyncOperation,
    pub data: serde_json::Value,
    pub changed_at: DateTime<Utc>,
}

/// Identity of a synced entity: ids are only unique within one entity type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub entity_type: String,
    pub entity_id: Uuid,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>, entity_id: Uuid) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id,
        }
    }
}

impl PendingChange {
    pub fn entity(&self) -> EntityRef {
        EntityRef::new(self.entity_type.clone(), self.entity_id)
    }

    /// Whether this change targets `entity`
    pub fn targets(&self, entity: &EntityRef) -> bool {
        self.entity_id == entity.entity_id && self.entity_type == entity.entity_type
    }
}
