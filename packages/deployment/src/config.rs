use std::str::FromStr;

use community_template_api::api::AppDescriptor;
use cosmwasm_std::{Uint128, Uint64};

use crate::error::DeployError::{InvalidConfig, MissingConfig};
use crate::error::DeployResult;

pub const TEMPLATE_NAME: &str = "community-template";
pub const CONTRACT_NAME: &str = "CommunityTemplate";

pub const DAO_NAME: &str = "test";
pub const TOKEN_NAME: &str = "Token";
pub const TOKEN_SYMBOL: &str = "TKN";
pub const TOKEN_DECIMALS: u8 = 18;
pub const TOKEN_SUPPLY: u128 = 100_000_000_000_000_000_000; // 100e18

pub const VOTE_DURATION: u64 = 120;
pub const VOTE_SUPPORT: u64 = 500_000_000_000_000_000; // 50e16
pub const PARTICIPANT_SUPPORT: u64 = 50_000_000_000_000_000; // 5e16
pub const QUORUM: u64 = 200_000_000_000_000_000; // 20e16

pub const COMMUNITY_TEMPLATE_PARAM: &str = "COMMUNITY_TEMPLATE";
pub const DAO_NAME_PARAM: &str = "DAO_NAME";
pub const TOKEN_NAME_PARAM: &str = "TOKEN_NAME";
pub const TOKEN_SYMBOL_PARAM: &str = "TOKEN_SYMBOL";
pub const TOKEN_DECIMALS_PARAM: &str = "TOKEN_DECIMALS";
pub const TOKEN_SUPPLY_PARAM: &str = "TOKEN_SUPPLY";
pub const VOTE_DURATION_PARAM: &str = "VOTE_DURATION";
pub const VOTE_SUPPORT_PARAM: &str = "VOTE_SUPPORT";
pub const PARTICIPANT_SUPPORT_PARAM: &str = "PARTICIPANT_SUPPORT";
pub const QUORUM_PARAM: &str = "QUORUM";

/// Apps registered in the community template, in the order the template wires them.
pub fn default_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor::new("finance", "Finance"),
        AppDescriptor::new("vault", "Vault"),
        AppDescriptor::new("voting", "Voting"),
        AppDescriptor::new("dot-voting", "DotVoting"),
        AppDescriptor::new("token-wrapper", "TokenWrapper"),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateConfig {
    pub template_name: String,
    pub contract_name: String,
    pub apps: Vec<AppDescriptor>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        TemplateConfig {
            template_name: TEMPLATE_NAME.to_string(),
            contract_name: CONTRACT_NAME.to_string(),
            apps: default_apps(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_supply: Uint128,
}

impl TokenConfig {
    pub fn wrapped_name(&self) -> String {
        format!("w{}", self.name)
    }

    pub fn wrapped_symbol(&self) -> String {
        format!("w{}", self.symbol)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        TokenConfig {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            initial_supply: Uint128::new(TOKEN_SUPPLY),
        }
    }
}

/// Percentages are scaled so that 1e18 is 100%.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VotingParams {
    pub support_required_pct: Uint64,
    pub min_accept_quorum_pct: Uint64,
    pub vote_duration: Uint64,
}

impl VotingParams {
    pub fn settings(&self) -> [Uint64; 3] {
        [
            self.support_required_pct,
            self.min_accept_quorum_pct,
            self.vote_duration,
        ]
    }
}

/// Note that the quorum comes first here, unlike in [VotingParams].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantVotingParams {
    pub min_quorum_pct: Uint64,
    pub participant_support_pct: Uint64,
    pub vote_duration: Uint64,
}

impl ParticipantVotingParams {
    pub fn settings(&self) -> [Uint64; 3] {
        [
            self.min_quorum_pct,
            self.participant_support_pct,
            self.vote_duration,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaoDeployConfig {
    pub dao_name: String,
    pub template_address: String,
    pub token: TokenConfig,
    pub voting: VotingParams,
    pub participant_voting: ParticipantVotingParams,
}

impl DaoDeployConfig {
    pub fn new(template_address: impl Into<String>) -> DaoDeployConfig {
        DaoDeployConfig::with_governance(
            template_address,
            VOTE_SUPPORT,
            QUORUM,
            PARTICIPANT_SUPPORT,
            VOTE_DURATION,
        )
    }

    fn with_governance(
        template_address: impl Into<String>,
        vote_support: u64,
        quorum: u64,
        participant_support: u64,
        vote_duration: u64,
    ) -> DaoDeployConfig {
        DaoDeployConfig {
            dao_name: DAO_NAME.to_string(),
            template_address: template_address.into(),
            token: TokenConfig::default(),
            voting: VotingParams {
                support_required_pct: vote_support.into(),
                min_accept_quorum_pct: quorum.into(),
                vote_duration: vote_duration.into(),
            },
            participant_voting: ParticipantVotingParams {
                min_quorum_pct: quorum.into(),
                participant_support_pct: participant_support.into(),
                vote_duration: vote_duration.into(),
            },
        }
    }

    /// Builds the configuration from `lookup`, falling back to the default constants
    /// for everything except the template address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DeployResult<DaoDeployConfig> {
        let template_address = lookup(COMMUNITY_TEMPLATE_PARAM)
            .filter(|address| !address.trim().is_empty())
            .ok_or_else(|| MissingConfig {
                key: COMMUNITY_TEMPLATE_PARAM.to_string(),
            })?;

        let mut config = DaoDeployConfig::with_governance(
            template_address.trim(),
            parse_or(&lookup, VOTE_SUPPORT_PARAM, VOTE_SUPPORT)?,
            parse_or(&lookup, QUORUM_PARAM, QUORUM)?,
            parse_or(&lookup, PARTICIPANT_SUPPORT_PARAM, PARTICIPANT_SUPPORT)?,
            parse_or(&lookup, VOTE_DURATION_PARAM, VOTE_DURATION)?,
        );

        config.dao_name = lookup(DAO_NAME_PARAM).unwrap_or(config.dao_name);
        config.token = TokenConfig {
            name: lookup(TOKEN_NAME_PARAM).unwrap_or(config.token.name),
            symbol: lookup(TOKEN_SYMBOL_PARAM).unwrap_or(config.token.symbol),
            decimals: parse_or(&lookup, TOKEN_DECIMALS_PARAM, TOKEN_DECIMALS)?,
            initial_supply: Uint128::new(parse_or(&lookup, TOKEN_SUPPLY_PARAM, TOKEN_SUPPLY)?),
        };

        Ok(config)
    }

    pub fn from_env() -> DeployResult<DaoDeployConfig> {
        DaoDeployConfig::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> DeployResult<T> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| InvalidConfig {
                key: key.to_string(),
                value,
            })
        }
    }
}
