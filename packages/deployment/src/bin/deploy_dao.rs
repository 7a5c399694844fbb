use tokio::runtime::Runtime;

use deployment::chain::{create_chain_with_default_settings, Network};
use deployment::config::DaoDeployConfig;
use deployment::contracts_repository::ContractsRepository;
use deployment::dao::deploy_dao::deploy_dao;
use deployment::logger::enable_info_logger;
use deployment::mnemonics::load_mnemonic;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    enable_info_logger();
    load_mnemonic()?;

    let network = Network::from_env()?;
    let config = DaoDeployConfig::from_env()?;

    let runtime = Runtime::new()?;
    let chain = create_chain_with_default_settings(network, runtime.handle())?;

    let result = deploy_dao(&ContractsRepository::new(chain), &config)?;
    result.report(&mut std::io::stdout().lock())?;

    Ok(())
}
