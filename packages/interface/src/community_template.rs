use cw_orch::{interface, prelude::*};

pub use community_template_api::api::{AppCodeId, AppDescriptor, NewInstanceMsg};
pub use community_template_api::msg::{ExecuteMsg, InstantiateMsg};

#[interface(InstantiateMsg, ExecuteMsg, Empty, Empty)]
pub struct CommunityTemplateContract;

// The template contract lives outside this workspace, so there is no mock wrapper for it.
impl<Chain: CwEnv> Uploadable for CommunityTemplateContract<Chain> {
    // The contract id is the artifact name, e.g. `community_template`
    fn wasm(&self) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path(&self.id())
            .unwrap()
    }
}
