use {
    crate::domain::eth::{ChainId, TxId},
    url::Url,
};

/// The single network the playground targets. All interactions require the
/// wallet to be on this chain.
#[derive(Debug, Clone)]
pub struct Network {
    pub chain_id: ChainId,
    pub name: String,
    pub rpc_url: Url,
    pub explorer_url: Url,
    pub faucet_url: Url,
}

impl Network {
    pub fn arbitrum_sepolia() -> Self {
        Self {
            chain_id: ChainId(421614),
            name: "Arbitrum Sepolia".to_string(),
            rpc_url: Url::parse("https://sepolia-rollup.arbitrum.io/rpc").unwrap(),
            explorer_url: Url::parse("https://sepolia.arbiscan.io").unwrap(),
            faucet_url: Url::parse("https://faucet.arbitrum.io").unwrap(),
        }
    }

    /// The block-explorer page for a submitted transaction.
    pub fn tx_url(&self, tx: TxId) -> Url {
        let mut url = self.explorer_url.clone();
        url.set_path(&format!("tx/{tx}"));
        url
    }
}
