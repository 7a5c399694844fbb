use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint64;

/// An application slot of the template, e.g. `voting` backed by the `Voting` contract.
#[cw_serde]
pub struct AppDescriptor {
    pub name: String,
    pub contract_name: String,
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, contract_name: impl Into<String>) -> AppDescriptor {
        AppDescriptor {
            name: name.into(),
            contract_name: contract_name.into(),
        }
    }
}

#[cw_serde]
pub struct AppCodeId {
    pub name: String,
    pub code_id: u64,
}

#[cw_serde]
pub struct NewInstanceMsg {
    pub dao_name: String,
    /// Account that receives the initial administrative permissions
    pub admin: String,
    /// Address of the CW20 token the DAO will wrap for voting
    pub token: String,
    pub wrapped_token_name: String,
    pub wrapped_token_symbol: String,
    /// `[support_required_pct, min_accept_quorum_pct, vote_duration]`
    pub voting_settings: [Uint64; 3],
    /// `[min_quorum_pct, participant_support_pct, vote_duration]`
    pub participant_voting_settings: [Uint64; 3],
}
