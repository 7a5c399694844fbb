use community_template_api::api::{AppCodeId, AppDescriptor, NewInstanceMsg};
use cosmwasm_std::{Addr, Event};
use cw20::Cw20Coin;
use cw_orch::prelude::*;
use log::info;

use interface::app::AppContract;
use interface::artifact_name;
use interface::community_template::{
    CommunityTemplateContract, ExecuteMsg as TemplateExecuteMsg,
    InstantiateMsg as TemplateInstantiateMsg,
};
use interface::standard_token::{InstantiateMsg as TokenInstantiateMsg, StandardTokenContract};

use crate::config::{TokenConfig, CONTRACT_NAME};
use crate::dao::deploy_dao::DaoChain;
use crate::template::deploy_template::TemplateDeployer;

const STANDARD_TOKEN_ID: &str = "standard_token";

pub struct ContractsRepository<Chain: CwEnv> {
    chain: Chain,
}

impl<Chain: CwEnv> ContractsRepository<Chain> {
    pub fn new(chain: Chain) -> ContractsRepository<Chain> {
        ContractsRepository { chain }
    }

    pub fn app(&self, contract_name: &str) -> AppContract<Chain> {
        AppContract::new(artifact_name(contract_name), self.chain.clone())
    }

    pub fn standard_token(&self) -> StandardTokenContract<Chain> {
        StandardTokenContract::new(STANDARD_TOKEN_ID, self.chain.clone())
    }

    pub fn template(&self, contract_name: &str) -> CommunityTemplateContract<Chain> {
        CommunityTemplateContract::new(artifact_name(contract_name), self.chain.clone())
    }
}

impl<Chain: CwEnv> TemplateDeployer for ContractsRepository<Chain> {
    fn deploy_template(
        &self,
        template_name: &str,
        contract_name: &str,
        apps: &[AppDescriptor],
    ) -> anyhow::Result<()> {
        let mut app_code_ids = Vec::with_capacity(apps.len());
        for app in apps {
            let contract = self.app(&app.contract_name);
            contract.upload()?;
            let code_id = contract.code_id()?;
            info!("Uploaded {} ({}) as code ID {}", app.name, app.contract_name, code_id);

            app_code_ids.push(AppCodeId {
                name: app.name.clone(),
                code_id,
            });
        }

        let template = self.template(contract_name);
        template.upload()?;

        let admin = self.chain.sender();

        template.instantiate(
            &TemplateInstantiateMsg {
                template_name: template_name.to_string(),
                apps: app_code_ids,
            },
            Some(&admin),
            None,
        )?;

        Ok(())
    }
}

impl<Chain: CwEnv> DaoChain for ContractsRepository<Chain> {
    fn admin(&self) -> anyhow::Result<Addr> {
        Ok(self.chain.sender())
    }

    fn create_token(&self, token: &TokenConfig) -> anyhow::Result<Addr> {
        let contract = self.standard_token();
        if contract.code_id().is_err() {
            contract.upload()?;
        }

        let admin = self.chain.sender();

        contract.instantiate(
            &TokenInstantiateMsg {
                name: token.name.clone(),
                symbol: token.symbol.clone(),
                decimals: token.decimals,
                initial_balances: vec![Cw20Coin {
                    address: admin.to_string(),
                    amount: token.initial_supply,
                }],
                mint: None,
                marketing: None,
            },
            Some(&admin),
            None,
        )?;

        Ok(contract.address()?)
    }

    fn new_instance(&self, template: &Addr, msg: NewInstanceMsg) -> anyhow::Result<Vec<Event>> {
        let contract = self.template(CONTRACT_NAME);
        contract.set_address(template);

        let response = contract.execute(&TemplateExecuteMsg::NewInstance(Box::new(msg)), None)?;

        Ok(response.events())
    }
}
