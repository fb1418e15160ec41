//! Actions dispatched to the application store

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const FLUSH: &str = "persist/FLUSH";
pub const REHYDRATE: &str = "persist/REHYDRATE";
pub const PAUSE: &str = "persist/PAUSE";
pub const PERSIST: &str = "persist/PERSIST";
pub const PURGE: &str = "persist/PURGE";
pub const REGISTER: &str = "persist/REGISTER";

/// Persistence lifecycle actions. They may carry opaque payloads.
pub const PERSIST_LIFECYCLE_ACTIONS: [&str; 6] = [FLUSH, REHYDRATE, PAUSE, PERSIST, PURGE, REGISTER];

/// Data attached to an action
#[derive(Clone, Default)]
pub enum Payload {
    #[default]
    None,
    Json(Value),
    /// Host-side handle that cannot be written to storage
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::None => write!(f, "None"),
            Payload::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Payload::Opaque(_) => write!(f, "Opaque(..)"),
        }
    }
}

/// A state transition request: a type tag plus a payload
#[derive(Debug, Clone)]
pub struct Action {
    pub kind: String,
    pub payload: Payload,
}

impl Action {
    /// Action without payload
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Payload::None,
        }
    }

    pub fn json(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Payload::Json(payload),
        }
    }

    pub fn opaque(kind: impl Into<String>, payload: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            kind: kind.into(),
            payload: Payload::Opaque(payload),
        }
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn is_serializable(&self) -> bool {
        !matches!(self.payload, Payload::Opaque(_))
    }

    pub fn is_persist_lifecycle(&self) -> bool {
        PERSIST_LIFECYCLE_ACTIONS.contains(&self.kind.as_str())
    }

    /// Decode the JSON payload into `T`. A missing payload decodes as `null`.
    pub fn payload_as<T: DeserializeOwned>(&self) -> AppResult<T> {
        let decoded = match &self.payload {
            Payload::None => T::deserialize(&Value::Null),
            Payload::Json(value) => T::deserialize(value),
            Payload::Opaque(_) => {
                return Err(AppError::InvalidPayload {
                    action: self.kind.clone(),
                    message: "opaque payload cannot be decoded".to_string(),
                })
            }
        };

        decoded.map_err(|e| AppError::InvalidPayload {
            action: self.kind.clone(),
            message: e.to_string(),
        })
    }

    /// Downcast an opaque payload
    pub fn opaque_as<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match &self.payload {
            Payload::Opaque(value) => value.clone().downcast::<T>().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdPayload {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    pub error: String,
}
