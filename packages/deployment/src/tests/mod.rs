mod deploy_template;
mod fakes;
mod validate;
