//! Latest weather for the user's location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Slice;
use crate::error::AppResult;
use crate::store::action::{Action, ErrorPayload};
use shared::models::{DailyForecast, WeatherAlert, WeatherSnapshot};

pub const FETCH_START: &str = "weather/fetchStart";
pub const SET_CURRENT: &str = "weather/setCurrent";
pub const SET_FORECAST: &str = "weather/setForecast";
pub const SET_ALERTS: &str = "weather/setAlerts";
pub const FETCH_FAILURE: &str = "weather/fetchFailure";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherState {
    pub current: Option<WeatherSnapshot>,
    pub forecast: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

pub struct WeatherSlice;

impl Slice for WeatherSlice {
    const NAME: &'static str = "weather";
    type State = WeatherState;

    fn reduce(state: &mut WeatherState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            FETCH_START => {
                state.is_loading = true;
                state.error = None;
            }
            SET_CURRENT => {
                let snapshot: WeatherSnapshot = action.payload_as()?;
                state.last_updated = Some(snapshot.timestamp);
                state.current = Some(snapshot);
                state.is_loading = false;
            }
            SET_FORECAST => {
                state.forecast = action.payload_as()?;
                state.is_loading = false;
            }
            SET_ALERTS => state.alerts = action.payload_as()?,
            FETCH_FAILURE => {
                let payload: ErrorPayload = action.payload_as()?;
                state.is_loading = false;
                state.error = Some(payload.error);
            }
            _ => {}
        }
        Ok(())
    }
}

pub fn fetch_start() -> Action {
    Action::new(FETCH_START)
}

pub fn set_current(snapshot: &WeatherSnapshot) -> Action {
    Action::json(SET_CURRENT, json!(snapshot))
}

pub fn set_forecast(forecast: &[DailyForecast]) -> Action {
    Action::json(SET_FORECAST, json!(forecast))
}

pub fn set_alerts(alerts: &[WeatherAlert]) -> Action {
    Action::json(SET_ALERTS, json!(alerts))
}

pub fn fetch_failure(error: impl Into<String>) -> Action {
    Action::json(FETCH_FAILURE, json!({ "error": error.into() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::types::GpsCoordinates;

    #[test]
    fn test_current_weather_sets_last_updated() {
        let mut state = WeatherState::default();
        WeatherSlice::reduce(&mut state, &fetch_start()).unwrap();
        assert!(state.is_loading);

        let snapshot = WeatherSnapshot {
            timestamp: Utc::now(),
            location: GpsCoordinates::new(Decimal::new(2768, 2), Decimal::new(8443, 2)),
            temperature_celsius: Decimal::new(315, 1),
            humidity_percent: 82,
            precipitation_mm: Decimal::new(12, 0),
            conditions: "Rain".to_string(),
        };
        WeatherSlice::reduce(&mut state, &set_current(&snapshot)).unwrap();
        assert!(!state.is_loading);
        assert_eq!(state.last_updated, Some(snapshot.timestamp));
        assert_eq!(state.current, Some(snapshot));
    }

    #[test]
    fn test_fetch_failure() {
        let mut state = WeatherState::default();
        WeatherSlice::reduce(&mut state, &fetch_start()).unwrap();
        WeatherSlice::reduce(&mut state, &fetch_failure("offline")).unwrap();
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("offline"));
    }
}
