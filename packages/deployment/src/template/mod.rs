pub mod deploy_template;
