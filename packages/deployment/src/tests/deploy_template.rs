use community_template_api::api::AppDescriptor;

use crate::config::{default_apps, TemplateConfig, CONTRACT_NAME, TEMPLATE_NAME};
use crate::template::deploy_template::register_template;
use crate::tests::fakes::{RecordingTemplateDeployer, TemplateDeployment};

#[test]
fn register_template_passes_configured_apps_in_order() -> anyhow::Result<()> {
    let deployer = RecordingTemplateDeployer::default();

    register_template(&deployer, &TemplateConfig::default())?;

    assert_eq!(
        deployer.deployments.into_inner(),
        vec![TemplateDeployment {
            template_name: TEMPLATE_NAME.to_string(),
            contract_name: CONTRACT_NAME.to_string(),
            apps: vec![
                AppDescriptor::new("finance", "Finance"),
                AppDescriptor::new("vault", "Vault"),
                AppDescriptor::new("voting", "Voting"),
                AppDescriptor::new("dot-voting", "DotVoting"),
                AppDescriptor::new("token-wrapper", "TokenWrapper"),
            ],
        }]
    );

    Ok(())
}

#[test]
fn register_template_does_not_reorder_custom_apps() -> anyhow::Result<()> {
    let deployer = RecordingTemplateDeployer::default();
    let mut apps = default_apps();
    apps.reverse();
    let config = TemplateConfig {
        template_name: "reversed".to_string(),
        contract_name: "ReversedTemplate".to_string(),
        apps: apps.clone(),
    };

    register_template(&deployer, &config)?;

    let deployments = deployer.deployments.into_inner();
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0].template_name, "reversed");
    assert_eq!(deployments[0].contract_name, "ReversedTemplate");
    assert_eq!(deployments[0].apps, apps);

    Ok(())
}

#[test]
fn register_template_forwards_deployment_error() {
    let deployer = RecordingTemplateDeployer {
        failure: Some("out of gas".to_string()),
        ..Default::default()
    };

    let result = register_template(&deployer, &TemplateConfig::default());

    assert_eq!(result.unwrap_err().to_string(), "out of gas");
    assert_eq!(deployer.deployments.borrow().len(), 1);
}
