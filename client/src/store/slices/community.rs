//! Community board feed

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::Slice;
use crate::error::AppResult;
use crate::store::action::{Action, IdPayload};
use shared::models::CommunityPost;

pub const SET_POSTS: &str = "community/setPosts";
pub const ADD_POST: &str = "community/addPost";
pub const LIKE_POST: &str = "community/likePost";
pub const REMOVE_POST: &str = "community/removePost";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommunityState {
    /// Newest first
    pub posts: Vec<CommunityPost>,
}

pub struct CommunitySlice;

impl Slice for CommunitySlice {
    const NAME: &'static str = "community";
    type State = CommunityState;

    fn reduce(state: &mut CommunityState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            SET_POSTS => state.posts = action.payload_as()?,
            ADD_POST => {
                let post: CommunityPost = action.payload_as()?;
                state.posts.insert(0, post);
            }
            LIKE_POST => {
                let IdPayload { id } = action.payload_as()?;
                if let Some(post) = state.posts.iter_mut().find(|post| post.id == id) {
                    post.likes += 1;
                }
            }
            REMOVE_POST => {
                let IdPayload { id } = action.payload_as()?;
                state.posts.retain(|post| post.id != id);
            }
            _ => {}
        }
        Ok(())
    }
}

pub fn set_posts(posts: &[CommunityPost]) -> Action {
    Action::json(SET_POSTS, json!(posts))
}

pub fn add_post(post: &CommunityPost) -> Action {
    Action::json(ADD_POST, json!(post))
}

pub fn like_post(id: Uuid) -> Action {
    Action::json(LIKE_POST, json!({ "id": id }))
}

pub fn remove_post(id: Uuid) -> Action {
    Action::json(REMOVE_POST, json!({ "id": id }))
}
