use std::cell::RefCell;

use anyhow::anyhow;
use community_template_api::api::{AppDescriptor, NewInstanceMsg};
use community_template_api::response::{DAO_ATTRIBUTE, DEPLOY_DAO_EVENT};
use cosmwasm_std::{Addr, Event};

use crate::config::TokenConfig;
use crate::dao::deploy_dao::DaoChain;
use crate::template::deploy_template::TemplateDeployer;

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateDeployment {
    pub template_name: String,
    pub contract_name: String,
    pub apps: Vec<AppDescriptor>,
}

#[derive(Default)]
pub struct RecordingTemplateDeployer {
    pub failure: Option<String>,
    pub deployments: RefCell<Vec<TemplateDeployment>>,
}

impl TemplateDeployer for RecordingTemplateDeployer {
    fn deploy_template(
        &self,
        template_name: &str,
        contract_name: &str,
        apps: &[AppDescriptor],
    ) -> anyhow::Result<()> {
        self.deployments.borrow_mut().push(TemplateDeployment {
            template_name: template_name.to_string(),
            contract_name: contract_name.to_string(),
            apps: apps.to_vec(),
        });

        match &self.failure {
            Some(failure) => Err(anyhow!(failure.clone())),
            None => Ok(()),
        }
    }
}

pub struct FakeDaoChain {
    pub admin: Addr,
    pub token: Addr,
    pub token_failure: Option<String>,
    pub instance_failure: Option<String>,
    pub events: Vec<Event>,
    pub created_tokens: RefCell<Vec<TokenConfig>>,
    pub instances: RefCell<Vec<(Addr, NewInstanceMsg)>>,
}

impl FakeDaoChain {
    pub fn emitting(events: Vec<Event>) -> FakeDaoChain {
        FakeDaoChain {
            admin: Addr::unchecked(ADMIN),
            token: Addr::unchecked(TOKEN),
            token_failure: None,
            instance_failure: None,
            events,
            created_tokens: RefCell::new(vec![]),
            instances: RefCell::new(vec![]),
        }
    }
}

impl DaoChain for FakeDaoChain {
    fn admin(&self) -> anyhow::Result<Addr> {
        Ok(self.admin.clone())
    }

    fn create_token(&self, token: &TokenConfig) -> anyhow::Result<Addr> {
        self.created_tokens.borrow_mut().push(token.clone());

        match &self.token_failure {
            Some(failure) => Err(anyhow!(failure.clone())),
            None => Ok(self.token.clone()),
        }
    }

    fn new_instance(&self, template: &Addr, msg: NewInstanceMsg) -> anyhow::Result<Vec<Event>> {
        self.instances.borrow_mut().push((template.clone(), msg));

        match &self.instance_failure {
            Some(failure) => Err(anyhow!(failure.clone())),
            None => Ok(self.events.clone()),
        }
    }
}

/// Event the template emits once a new DAO instance is wired up.
pub fn deploy_dao_event(dao: &str) -> Event {
    Event::new(DEPLOY_DAO_EVENT).add_attribute(DAO_ATTRIBUTE, dao)
}

pub const ADMIN: &str = "terra1335hded4gyzpt00fpz75mms4m7ck02wguw0zu5";
pub const TOKEN: &str = "terra183rfa8tvtp6ax7jr7dfaf7ywv870sykxdmhrg46xtfqtpkjp20sqq3fs2z";
pub const TEMPLATE: &str = "terra1tn0q7y5c7s0h68ytjpardxf20fgnyfdzv9dadcc8hudfzjdsddqqjkme70";
pub const DAO: &str = "terra1dao_address";
