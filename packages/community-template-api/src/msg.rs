use crate::api::{AppCodeId, NewInstanceMsg};
use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    pub template_name: String,
    /// Apps every new DAO instance receives, in registration order
    pub apps: Vec<AppCodeId>,
}

#[cw_serde]
pub enum ExecuteMsg {
    NewInstance(Box<NewInstanceMsg>),
}
