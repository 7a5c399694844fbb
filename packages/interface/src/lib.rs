#[cfg(feature = "interface")]
pub mod app;
#[cfg(feature = "interface")]
pub mod community_template;
#[cfg(feature = "interface")]
pub mod standard_token;

/// Artifact name of a contract, e.g. `DotVoting` becomes `dot_voting`.
pub fn artifact_name(contract_name: &str) -> String {
    let mut name = String::with_capacity(contract_name.len() + 4);
    for (i, c) in contract_name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                name.push('_');
            }
            name.push(c.to_ascii_lowercase());
        } else if c == '-' {
            name.push('_');
        } else {
            name.push(c);
        }
    }
    name
}
