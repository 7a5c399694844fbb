use cosmwasm_std::Addr;

use crate::error::DeployError;
use crate::tests::fakes::TEMPLATE;
use crate::validate::validate_address;

#[test]
fn accepts_contract_address() {
    assert_eq!(validate_address(TEMPLATE), Ok(Addr::unchecked(TEMPLATE)));
}

#[test]
fn normalizes_upper_case_address() {
    assert_eq!(
        validate_address(&TEMPLATE.to_ascii_uppercase()),
        Ok(Addr::unchecked(TEMPLATE))
    );
}

#[test]
fn rejects_address_with_corrupted_checksum() {
    let corrupted = format!("{}q", &TEMPLATE[..TEMPLATE.len() - 1]);

    assert_eq!(
        validate_address(&corrupted),
        Err(DeployError::InvalidAddress {
            address: corrupted.clone()
        })
    );
}

#[test]
fn rejects_malformed_addresses() {
    let mixed_case = format!("Terra1{}", &TEMPLATE[6..]);
    for address in [
        "",
        "terra",
        "1qypqxpq9qcrsszg",
        "terra1abc",
        "terra1bbbbbbbbbbbbbb",
        "0x8a045ed49a7079eb3cf9980bb60226e0b8491e3e",
        mixed_case.as_str(),
    ] {
        assert_eq!(
            validate_address(address),
            Err(DeployError::InvalidAddress {
                address: address.to_string()
            }),
            "{} should be rejected",
            address
        );
    }
}
