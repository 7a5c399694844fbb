pub mod deploy_dao;
pub mod events;
