//! Community forum models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post on the farmer community board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub title: String,
    pub body: String,
    /// English crop names the post is about
    pub crop_tags: Vec<String>,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}
