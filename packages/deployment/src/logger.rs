const RUST_LOG: &str = "RUST_LOG";

pub fn enable_info_logger() {
    if std::env::var_os(RUST_LOG).is_none() {
        std::env::set_var(RUST_LOG, "info");
    }
    pretty_env_logger::init(); // Used to log contract and chain interactions
}
