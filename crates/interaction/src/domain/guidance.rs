use crate::infra::config::Network;

/// The instructions shown in place of an actual deployment. The playground
/// does not compile or deploy bytecode; deployment happens through the
/// cargo-stylus CLI outside the browser.
pub fn deployment_steps(network: &Network) -> Vec<String> {
    vec![
        "Stylus contracts are compiled and deployed with the cargo-stylus CLI.".to_string(),
        "Install it: cargo install cargo-stylus".to_string(),
        "Validate the contract: cargo stylus check".to_string(),
        format!("Deploy it: cargo stylus deploy --endpoint {}", network.rpc_url),
        "Or paste the address of an already deployed contract below to interact with it."
            .to_string(),
    ]
}
