use crate::error::DeployError::MissingConfig;
use crate::error::DeployResult;

pub const DEPLOYER_MNEMONIC_PARAM: &str = "DEPLOYER_MNEMONIC";

// variables cw-orch reads the signer from, per network kind
const LOCAL_MNEMONIC_PARAM: &str = "LOCAL_MNEMONIC";
const TEST_MNEMONIC_PARAM: &str = "TEST_MNEMONIC";
const MAIN_MNEMONIC_PARAM: &str = "MAIN_MNEMONIC";

pub fn use_mnemonic(mnemonic: &str) {
    std::env::set_var(LOCAL_MNEMONIC_PARAM, mnemonic);
    std::env::set_var(TEST_MNEMONIC_PARAM, mnemonic);
    std::env::set_var(MAIN_MNEMONIC_PARAM, mnemonic);
}

/// Reads the deployer's mnemonic and hands it to cw-orch for every network kind.
pub fn load_mnemonic() -> DeployResult<()> {
    let mnemonic = std::env::var(DEPLOYER_MNEMONIC_PARAM)
        .ok()
        .filter(|mnemonic| !mnemonic.trim().is_empty())
        .ok_or_else(|| MissingConfig {
            key: DEPLOYER_MNEMONIC_PARAM.to_string(),
        })?;

    use_mnemonic(mnemonic.trim());

    Ok(())
}
