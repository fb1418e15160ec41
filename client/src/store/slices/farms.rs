//! Farms registered by the user

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{auth, Slice};
use crate::error::AppResult;
use crate::store::action::{Action, IdPayload};
use shared::models::Farm;

pub const SET_FARMS: &str = "farms/setFarms";
pub const ADD_FARM: &str = "farms/addFarm";
pub const UPDATE_FARM: &str = "farms/updateFarm";
pub const REMOVE_FARM: &str = "farms/removeFarm";
pub const SELECT_FARM: &str = "farms/selectFarm";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FarmsState {
    pub farms: Vec<Farm>,
    pub selected_farm_id: Option<Uuid>,
}

impl FarmsState {
    pub fn selected(&self) -> Option<&Farm> {
        let id = self.selected_farm_id?;
        self.farms.iter().find(|farm| farm.id == id)
    }
}

pub struct FarmsSlice;

#[derive(Deserialize)]
struct SelectPayload {
    id: Option<Uuid>,
}

impl Slice for FarmsSlice {
    const NAME: &'static str = "farms";
    type State = FarmsState;

    fn reduce(state: &mut FarmsState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            SET_FARMS => {
                state.farms = action.payload_as()?;
                if state.selected().is_none() {
                    state.selected_farm_id = None;
                }
            }
            ADD_FARM | UPDATE_FARM => {
                let farm: Farm = action.payload_as()?;
                match state.farms.iter().position(|f| f.id == farm.id) {
                    Some(index) => state.farms[index] = farm,
                    None if action.is(ADD_FARM) => state.farms.push(farm),
                    None => {}
                }
            }
            REMOVE_FARM => {
                let IdPayload { id } = action.payload_as()?;
                state.farms.retain(|farm| farm.id != id);
                if state.selected_farm_id == Some(id) {
                    state.selected_farm_id = None;
                }
            }
            SELECT_FARM => {
                let SelectPayload { id } = action.payload_as()?;
                // Unknown ids leave the selection alone
                if id.map_or(true, |id| state.farms.iter().any(|farm| farm.id == id)) {
                    state.selected_farm_id = id;
                }
            }
            auth::LOGOUT => *state = FarmsState::default(),
            _ => {}
        }
        Ok(())
    }
}

pub fn set_farms(farms: &[Farm]) -> Action {
    Action::json(SET_FARMS, json!(farms))
}

pub fn add_farm(farm: &Farm) -> Action {
    Action::json(ADD_FARM, json!(farm))
}

pub fn update_farm(farm: &Farm) -> Action {
    Action::json(UPDATE_FARM, json!(farm))
}

pub fn remove_farm(id: Uuid) -> Action {
    Action::json(REMOVE_FARM, json!({ "id": id }))
}

pub fn select_farm(id: Option<Uuid>) -> Action {
    Action::json(SELECT_FARM, json!({ "id": id }))
}
