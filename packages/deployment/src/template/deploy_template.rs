use community_template_api::api::AppDescriptor;
use log::info;

use crate::config::TemplateConfig;

/// Publishes a template contract configured with the given apps.
pub trait TemplateDeployer {
    fn deploy_template(
        &self,
        template_name: &str,
        contract_name: &str,
        apps: &[AppDescriptor],
    ) -> anyhow::Result<()>;
}

/// Registers the configured apps with a new template contract.
///
/// The apps are handed over in exactly the configured order, and the first
/// deployment error is returned as-is.
// TODO: return the template address; deploy-dao currently needs it passed in through COMMUNITY_TEMPLATE
pub fn register_template(
    deployer: &impl TemplateDeployer,
    config: &TemplateConfig,
) -> anyhow::Result<()> {
    info!(
        "Registering template '{}' ({}) with apps: {}",
        config.template_name,
        config.contract_name,
        config
            .apps
            .iter()
            .map(|app| app.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    deployer.deploy_template(&config.template_name, &config.contract_name, &config.apps)?;

    info!("Template '{}' registered", config.template_name);

    Ok(())
}
