use crate::domain::eth::{ChainId, SignerHandle};

/// The wallet/session capability of the host page. The core only ever asks
/// three things of it: is a wallet connected, which chain is it on, and which
/// account signs. Connection and account-switch flows live outside the core.
#[mockall::automock]
pub trait WalletSession: Send + Sync {
    fn is_connected(&self) -> bool;

    /// The chain the wallet is currently on, if any.
    fn chain_id(&self) -> Option<ChainId>;

    /// The account that authorizes writes, if one is connected.
    fn signer(&self) -> Option<SignerHandle>;
}
