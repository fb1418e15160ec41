//! Profile and preferences of the signed-in farmer

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{auth, Slice};
use crate::error::AppResult;
use crate::store::action::Action;
use shared::models::{AuthResponse, User, UserProfileUpdate};
use shared::types::Language;

pub const SET_PROFILE: &str = "user/setProfile";
pub const UPDATE_PROFILE: &str = "user/updateProfile";
pub const SET_LANGUAGE: &str = "user/setLanguage";
pub const SET_SELECTED_CROPS: &str = "user/setSelectedCrops";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserState {
    pub profile: Option<User>,
    pub language: Language,
    /// English names of crops the farmer follows
    pub selected_crops: Vec<String>,
}

pub struct UserSlice;

impl Slice for UserSlice {
    const NAME: &'static str = "user";
    type State = UserState;

    fn reduce(state: &mut UserState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            SET_PROFILE => state.profile = Some(action.payload_as()?),
            UPDATE_PROFILE => {
                let update: UserProfileUpdate = action.payload_as()?;
                if let Some(profile) = state.profile.as_mut() {
                    profile.apply(&update);
                }
            }
            SET_LANGUAGE => state.language = action.payload_as()?,
            SET_SELECTED_CROPS => state.selected_crops = action.payload_as()?,
            auth::LOGIN_SUCCESS => {
                let response: AuthResponse = action.payload_as()?;
                state.profile = Some(response.user);
            }
            // Language is a device preference and survives logout
            auth::LOGOUT => {
                state.profile = None;
                state.selected_crops.clear();
            }
            _ => {}
        }
        Ok(())
    }
}

pub fn set_profile(user: &User) -> Action {
    Action::json(SET_PROFILE, json!(user))
}

pub fn update_profile(update: &UserProfileUpdate) -> Action {
    Action::json(UPDATE_PROFILE, json!(update))
}

pub fn set_language(language: Language) -> Action {
    Action::json(SET_LANGUAGE, json!(language))
}

pub fn set_selected_crops(crops: &[String]) -> Action {
    Action::json(SET_SELECTED_CROPS, json!(crops))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_follows_session() {
        let mut state = UserState::default();
        let response = AuthResponse {
            token: "mock_token_1_abc".to_string(),
            user: User::demo(),
        };
        UserSlice::reduce(&mut state, &auth::login_success(&response)).unwrap();
        assert_eq!(state.profile.as_ref().map(|u| u.id), Some(User::demo().id));

        UserSlice::reduce(&mut state, &set_language(Language::English)).unwrap();
        UserSlice::reduce(&mut state, &set_selected_crops(&["Rice".to_string()])).unwrap();
        UserSlice::reduce(&mut state, &auth::logout()).unwrap();

        assert!(state.profile.is_none());
        assert!(state.selected_crops.is_empty());
        assert_eq!(state.language, Language::English);
    }

    #[test]
    fn test_update_without_profile_is_noop() {
        let mut state = UserState::default();
        let update = UserProfileUpdate {
            name: Some("Gita".to_string()),
            ..Default::default()
        };
        UserSlice::reduce(&mut state, &update_profile(&update)).unwrap();
        assert!(state.profile.is_none());

        UserSlice::reduce(&mut state, &set_profile(&User::demo())).unwrap();
        UserSlice::reduce(&mut state, &update_profile(&update)).unwrap();
        assert_eq!(state.profile.unwrap().name, "Gita");
    }
}
