use tokio::runtime::Runtime;

use deployment::chain::{create_chain_with_default_settings, Network};
use deployment::config::TemplateConfig;
use deployment::contracts_repository::ContractsRepository;
use deployment::logger::enable_info_logger;
use deployment::mnemonics::load_mnemonic;
use deployment::template::deploy_template::register_template;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    enable_info_logger();
    load_mnemonic()?;

    let network = Network::from_env()?;

    let runtime = Runtime::new()?;
    let chain = create_chain_with_default_settings(network, runtime.handle())?;

    register_template(&ContractsRepository::new(chain), &TemplateConfig::default())
}
