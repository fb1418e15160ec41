//! Session state

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Slice;
use crate::error::AppResult;
use crate::store::action::{Action, ErrorPayload, REHYDRATE};
use shared::models::AuthResponse;

pub const LOGIN_START: &str = "auth/loginStart";
pub const LOGIN_SUCCESS: &str = "auth/loginSuccess";
pub const LOGIN_FAILURE: &str = "auth/loginFailure";
pub const LOGOUT: &str = "auth/logout";
pub const TOKEN_REFRESHED: &str = "auth/tokenRefreshed";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub struct AuthSlice;

#[derive(Deserialize)]
struct TokenPayload {
    token: String,
}

impl Slice for AuthSlice {
    const NAME: &'static str = "auth";
    type State = AuthState;

    fn reduce(state: &mut AuthState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            LOGIN_START => {
                state.is_loading = true;
                state.error = None;
            }
            LOGIN_SUCCESS => {
                let response: AuthResponse = action.payload_as()?;
                state.token = Some(response.token);
                state.is_authenticated = true;
                state.is_loading = false;
                state.error = None;
            }
            LOGIN_FAILURE => {
                let payload: ErrorPayload = action.payload_as()?;
                *state = AuthState {
                    error: Some(payload.error),
                    ..AuthState::default()
                };
            }
            LOGOUT => *state = AuthState::default(),
            TOKEN_REFRESHED => {
                let payload: TokenPayload = action.payload_as()?;
                state.token = Some(payload.token);
            }
            // A request in flight when the app was killed never finishes
            REHYDRATE => state.is_loading = false,
            _ => {}
        }
        Ok(())
    }
}

pub fn login_start() -> Action {
    Action::new(LOGIN_START)
}

pub fn login_success(response: &AuthResponse) -> Action {
    Action::json(LOGIN_SUCCESS, json!(response))
}

pub fn login_failure(error: impl Into<String>) -> Action {
    Action::json(LOGIN_FAILURE, json!({ "error": error.into() }))
}

pub fn logout() -> Action {
    Action::new(LOGOUT)
}

pub fn token_refreshed(token: impl Into<String>) -> Action {
    Action::json(TOKEN_REFRESHED, json!({ "token": token.into() }))
}
