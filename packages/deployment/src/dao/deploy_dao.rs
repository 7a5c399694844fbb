use std::io::Write;

use community_template_api::api::NewInstanceMsg;
use community_template_api::response::{DAO_ATTRIBUTE, DEPLOY_DAO_EVENT};
use cosmwasm_std::{Addr, Event};
use log::info;

use crate::config::{DaoDeployConfig, TokenConfig};
use crate::dao::events::event_argument;
use crate::validate::validate_address;

/// The calls a DAO deployment makes against the chain.
pub trait DaoChain {
    /// Account that will administer the new DAO.
    fn admin(&self) -> anyhow::Result<Addr>;

    /// Creates a new token, minting the whole initial supply to the admin.
    fn create_token(&self, token: &TokenConfig) -> anyhow::Result<Addr>;

    /// Executes the template's instantiation and returns the transaction's events.
    fn new_instance(&self, template: &Addr, msg: NewInstanceMsg) -> anyhow::Result<Vec<Event>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentResult {
    pub token: Addr,
    pub dao: Addr,
}

impl DeploymentResult {
    pub fn report(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "CW20: {}", self.token)?;
        writeln!(out, "DAO: {}", self.dao)?;
        Ok(())
    }
}

pub fn new_instance_msg(config: &DaoDeployConfig, admin: &Addr, token: &Addr) -> NewInstanceMsg {
    NewInstanceMsg {
        dao_name: config.dao_name.clone(),
        admin: admin.to_string(),
        token: token.to_string(),
        wrapped_token_name: config.token.wrapped_name(),
        wrapped_token_symbol: config.token.wrapped_symbol(),
        voting_settings: config.voting.settings(),
        participant_voting_settings: config.participant_voting.settings(),
    }
}

/// Creates a token and a new DAO instance bound to it from the configured template.
pub fn deploy_dao(chain: &impl DaoChain, config: &DaoDeployConfig) -> anyhow::Result<DeploymentResult> {
    let admin = chain.admin()?;

    let token = chain.create_token(&config.token)?;
    info!("Created token {} at {}", config.token.symbol, token);

    let template = validate_address(&config.template_address)?;
    info!("Using template at {}", template);

    let events = chain.new_instance(&template, new_instance_msg(config, &admin, &token))?;

    let dao = Addr::unchecked(event_argument(&events, DEPLOY_DAO_EVENT, DAO_ATTRIBUTE)?);
    info!("Deployed DAO '{}' at {}", config.dao_name, dao);

    Ok(DeploymentResult { token, dao })
}
