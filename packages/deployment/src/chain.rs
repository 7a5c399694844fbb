use std::fmt;
use std::str::FromStr;

use cw_orch::daemon::{networks, Daemon, DaemonBuilder};
use tokio::runtime::Handle;

use crate::error::DeployError::InvalidConfig;
use crate::error::{DeployError, DeployResult};

pub const NETWORK_PARAM: &str = "NETWORK";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    LocalTerra,
    #[default]
    Pisco,
    Phoenix,
}

impl Network {
    pub fn id(&self) -> &'static str {
        match self {
            Network::LocalTerra => "localterra",
            Network::Pisco => "pisco-1",
            Network::Phoenix => "phoenix-1",
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DeployResult<Network> {
        match lookup(NETWORK_PARAM) {
            Some(network) => network.parse(),
            None => Ok(Network::default()),
        }
    }

    pub fn from_env() -> DeployResult<Network> {
        Network::from_lookup(|key| std::env::var(key).ok())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "localterra" => Ok(Network::LocalTerra),
            "pisco-1" => Ok(Network::Pisco),
            "phoenix-1" => Ok(Network::Phoenix),
            other => Err(InvalidConfig {
                key: NETWORK_PARAM.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Connects to the given network. The runtime behind `handle` has to outlive the daemon.
pub fn create_chain_with_default_settings(network: Network, handle: &Handle) -> anyhow::Result<Daemon> {
    let chain_info = match network {
        Network::LocalTerra => networks::LOCAL_TERRA,
        Network::Pisco => networks::PISCO_1,
        Network::Phoenix => networks::PHOENIX_1,
    };

    log::info!("Connecting to {}", network);

    let chain = DaemonBuilder::default()
        .handle(handle)
        .chain(chain_info)
        .build()?;

    Ok(chain)
}
