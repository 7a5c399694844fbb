pub const DEPLOY_DAO_EVENT: &str = "DeployDao";
pub const DAO_ATTRIBUTE: &str = "dao";
