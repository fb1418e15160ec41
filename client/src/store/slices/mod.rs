//! Feature slices and the root state tree they compose into

pub mod auth;
pub mod community;
pub mod dashboard;
pub mod farms;
pub mod notifications;
pub mod sync;
pub mod user;
pub mod weather;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::store::action::Action;

pub use auth::{AuthSlice, AuthState};
pub use community::{CommunitySlice, CommunityState};
pub use dashboard::{DashboardSlice, DashboardState, DashboardSummary};
pub use farms::{FarmsSlice, FarmsState};
pub use notifications::{NotificationsSlice, NotificationsState};
pub use sync::{SyncSlice, SyncState};
pub use user::{UserSlice, UserState};
pub use weather::{WeatherSlice, WeatherState};

/// Every slice in the root state, in field order
pub const SLICE_NAMES: [&str; 8] = [
    AuthSlice::NAME,
    UserSlice::NAME,
    FarmsSlice::NAME,
    WeatherSlice::NAME,
    CommunitySlice::NAME,
    DashboardSlice::NAME,
    SyncSlice::NAME,
    NotificationsSlice::NAME,
];

/// Slices mirrored to storage unless configured otherwise
pub const PERSISTED_SLICES: [&str; 4] = [
    AuthSlice::NAME,
    UserSlice::NAME,
    SyncSlice::NAME,
    NotificationsSlice::NAME,
];

/// An independently defined piece of state and its transition function
pub trait Slice {
    /// Field name in the root state and suffix of the storage key
    const NAME: &'static str;

    type State: Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Apply `action`. Actions the slice does not handle leave state untouched.
    fn reduce(state: &mut Self::State, action: &Action) -> AppResult<()>;
}

/// The whole application state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RootState {
    pub auth: AuthState,
    pub user: UserState,
    pub farms: FarmsState,
    pub weather: WeatherState,
    pub community: CommunityState,
    pub dashboard: DashboardState,
    pub sync: SyncState,
    pub notifications: NotificationsState,
}

impl RootState {
    /// Offer `action` to every slice
    pub fn reduce(&mut self, action: &Action) -> AppResult<()> {
        AuthSlice::reduce(&mut self.auth, action)?;
        UserSlice::reduce(&mut self.user, action)?;
        FarmsSlice::reduce(&mut self.farms, action)?;
        WeatherSlice::reduce(&mut self.weather, action)?;
        CommunitySlice::reduce(&mut self.community, action)?;
        DashboardSlice::reduce(&mut self.dashboard, action)?;
        SyncSlice::reduce(&mut self.sync, action)?;
        NotificationsSlice::reduce(&mut self.notifications, action)?;
        Ok(())
    }

    /// JSON form of one slice
    pub fn slice_json(&self, name: &str) -> AppResult<String> {
        let json = match name {
            "auth" => serde_json::to_string(&self.auth)?,
            "user" => serde_json::to_string(&self.user)?,
            "farms" => serde_json::to_string(&self.farms)?,
            "weather" => serde_json::to_string(&self.weather)?,
            "community" => serde_json::to_string(&self.community)?,
            "dashboard" => serde_json::to_string(&self.dashboard)?,
            "sync" => serde_json::to_string(&self.sync)?,
            "notifications" => serde_json::to_string(&self.notifications)?,
            other => return Err(AppError::UnknownSlice(other.to_string())),
        };
        Ok(json)
    }

    /// Replace one slice with its stored JSON form
    pub fn rehydrate_slice(&mut self, name: &str, json: &str) -> AppResult<()> {
        match name {
            "auth" => self.auth = serde_json::from_str(json)?,
            "user" => self.user = serde_json::from_str(json)?,
            "farms" => self.farms = serde_json::from_str(json)?,
            "weather" => self.weather = serde_json::from_str(json)?,
            "community" => self.community = serde_json::from_str(json)?,
            "dashboard" => self.dashboard = serde_json::from_str(json)?,
            "sync" => self.sync = serde_json::from_str(json)?,
            "notifications" => self.notifications = serde_json::from_str(json)?,
            other => return Err(AppError::UnknownSlice(other.to_string())),
        }
        Ok(())
    }
}

pub fn is_slice_name(name: &str) -> bool {
    SLICE_NAMES.contains(&name)
}
