use cosmwasm_std::Addr;

use crate::error::DeployError::InvalidAddress;
use crate::error::DeployResult;

/// Checks that the address is valid bech32, checksum included.
pub fn validate_address(address: &str) -> DeployResult<Addr> {
    let trimmed = address.trim();

    bech32_no_std::decode(trimmed).map_err(|_| InvalidAddress {
        address: address.to_string(),
    })?;

    Ok(Addr::unchecked(trimmed.to_ascii_lowercase()))
}
