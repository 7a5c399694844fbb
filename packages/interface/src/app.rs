use cw_orch::{interface, prelude::*};

/// Any application contract registered in the template (finance, vault, voting, ...).
/// The contract id doubles as the artifact name.
#[interface(Empty, Empty, Empty, Empty)]
pub struct AppContract;

impl<Chain: CwEnv> Uploadable for AppContract<Chain> {
    fn wasm(&self) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path(&self.id())
            .unwrap()
    }
}
