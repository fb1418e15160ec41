//! Home screen summary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Slice;
use crate::error::AppResult;
use crate::store::action::Action;

pub const SET_SUMMARY: &str = "dashboard/setSummary";
pub const SET_LOADING: &str = "dashboard/setLoading";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_farms: u32,
    pub total_area: Decimal,
    pub active_crops: Vec<String>,
    pub upcoming_tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub is_loading: bool,
}

pub struct DashboardSlice;

impl Slice for DashboardSlice {
    const NAME: &'static str = "dashboard";
    type State = DashboardState;

    fn reduce(state: &mut DashboardState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            SET_SUMMARY => {
                state.summary = Some(action.payload_as()?);
                state.is_loading = false;
            }
            SET_LOADING => state.is_loading = action.payload_as()?,
            _ => {}
        }
        Ok(())
    }
}

pub fn set_summary(summary: &DashboardSummary) -> Action {
    Action::json(SET_SUMMARY, json!(summary))
}

pub fn set_loading(loading: bool) -> Action {
    Action::json(SET_LOADING, json!(loading))
}
