//! Offline queue and connectivity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Slice;
use crate::error::AppResult;
use crate::store::action::{Action, ErrorPayload, REHYDRATE};
use shared::models::{EntityRef, PendingChange};

pub const SET_ONLINE: &str = "sync/setOnline";
pub const QUEUE_CHANGE: &str = "sync/queueChange";
pub const SYNC_START: &str = "sync/syncStart";
pub const SYNC_SUCCESS: &str = "sync/syncSuccess";
pub const SYNC_FAILURE: &str = "sync/syncFailure";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncState {
    pub is_online: bool,
    pub pending_changes: Vec<PendingChange>,
    pub is_syncing: bool,
    pub last_synced_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            is_online: true,
            pending_changes: Vec::new(),
            is_syncing: false,
            last_synced_at: None,
            error: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SyncSuccessPayload {
    synced_at: DateTime<Utc>,
    synced_ids: Vec<EntityRef>,
}

pub struct SyncSlice;

impl Slice for SyncSlice {
    const NAME: &'static str = "sync";
    type State = SyncState;

    fn reduce(state: &mut SyncState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            SET_ONLINE => state.is_online = action.payload_as()?,
            QUEUE_CHANGE => {
                let change: PendingChange = action.payload_as()?;
                // A newer change to the same entity supersedes the queued one
                let entity = change.entity();
                state.pending_changes.retain(|c| !c.targets(&entity));
                state.pending_changes.push(change);
            }
            SYNC_START => {
                state.is_syncing = true;
                state.error = None;
            }
            SYNC_SUCCESS => {
                let payload: SyncSuccessPayload = action.payload_as()?;
                state
                    .pending_changes
                    .retain(|c| !payload.synced_ids.iter().any(|entity| c.targets(entity)));
                state.last_synced_at = Some(payload.synced_at);
                state.is_syncing = false;
            }
            SYNC_FAILURE => {
                let payload: ErrorPayload = action.payload_as()?;
                state.is_syncing = false;
                state.error = Some(payload.error);
            }
            // A sync cut short by shutdown is not running any more
            REHYDRATE => state.is_syncing = false,
            _ => {}
        }
        Ok(())
    }
}

pub fn set_online(online: bool) -> Action {
    Action::json(SET_ONLINE, json!(online))
}

pub fn queue_change(change: &PendingChange) -> Action {
    Action::json(QUEUE_CHANGE, json!(change))
}

pub fn sync_start() -> Action {
    Action::new(SYNC_START)
}

pub fn sync_success(synced_at: DateTime<Utc>, synced_ids: &[EntityRef]) -> Action {
    Action::json(
        SYNC_SUCCESS,
        json!({ "synced_at": synced_at, "synced_ids": synced_ids }),
    )
}

pub fn sync_failure(error: impl Into<String>) -> Action {
    Action::json(SYNC_FAILURE, json!({ "error": error.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SyncOperation;
    use uuid::Uuid;

    fn change(entity_id: Uuid, operation: SyncOperation) -> PendingChange {
        change_of("farm", entity_id, operation)
    }

    fn change_of(entity_type: &str, entity_id: Uuid, operation: SyncOperation) -> PendingChange {
        PendingChange {
            entity_type: entity_type.to_string(),
            entity_id,
            operation,
            data: json!({ "name": "Khet 1" }),
            changed_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_online() {
        assert!(SyncState::default().is_online);
    }

    #[test]
    fn test_queue_replaces_change_for_same_entity() {
        let mut state = SyncState::default();
        let id = Uuid::new_v4();
        SyncSlice::reduce(&mut state, &queue_change(&change(id, SyncOperation::Create))).unwrap();
        SyncSlice::reduce(&mut state, &queue_change(&change(id, SyncOperation::Update))).unwrap();
        assert_eq!(state.pending_changes.len(), 1);
        assert_eq!(state.pending_changes[0].operation, SyncOperation::Update);
    }

    #[test]
    fn test_success_drops_synced_changes_only() {
        let mut state = SyncState::default();
        let synced = Uuid::new_v4();
        let pending = Uuid::new_v4();
        SyncSlice::reduce(&mut state, &queue_change(&change(synced, SyncOperation::Create))).unwrap();
        SyncSlice::reduce(&mut state, &queue_change(&change(pending, SyncOperation::Delete))).unwrap();
        SyncSlice::reduce(&mut state, &sync_start()).unwrap();
        assert!(state.is_syncing);

        let at = Utc::now();
        SyncSlice::reduce(&mut state, &sync_success(at, &[EntityRef::new("farm", synced)])).unwrap();
        assert!(!state.is_syncing);
        assert_eq!(state.last_synced_at, Some(at));
        assert_eq!(state.pending_changes.len(), 1);
        assert_eq!(state.pending_changes[0].entity_id, pending);
    }

    #[test]
    fn test_rehydrate_clears_stale_syncing_flag() {
        let mut state = SyncState {
            is_syncing: true,
            ..SyncState::default()
        };
        SyncSlice::reduce(&mut state, &Action::new(REHYDRATE)).unwrap();
        assert!(!state.is_syncing);
    }

    #[test]
    fn test_failure_keeps_queue() {
        let mut state = SyncState::default();
        SyncSlice::reduce(&mut state, &queue_change(&change(Uuid::new_v4(), SyncOperation::Create))).unwrap();
        SyncSlice::reduce(&mut state, &sync_start()).unwrap();
        SyncSlice::reduce(&mut state, &sync_failure("timeout")).unwrap();
        assert_eq!(state.pending_changes.len(), 1);
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_success_matches_entity_type_and_id() {
        let mut state = SyncState::default();
        let id = Uuid::new_v4();
        SyncSlice::reduce(&mut state, &queue_change(&change_of("farm", id, SyncOperation::Update))).unwrap();
        SyncSlice::reduce(&mut state, &queue_change(&change_of("post", id, SyncOperation::Create))).unwrap();
        assert_eq!(state.pending_changes.len(), 2);

        SyncSlice::reduce(&mut state, &sync_success(Utc::now(), &[EntityRef::new("farm", id)])).unwrap();
        assert_eq!(state.pending_changes.len(), 1);
        assert_eq!(state.pending_changes[0].entity_type, "post");
    }
}
