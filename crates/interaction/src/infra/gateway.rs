use {
    crate::{
        domain::eth::{ContractAddress, Receipt, SignerHandle, TxId},
        util::bytes::Bytes,
    },
    thiserror::Error,
};

/// The two primitive operations a node/wallet pair exposes, plus the
/// confirmation wait. The playground consumes this capability; it never
/// implements it. Implementations sit on top of whatever provider the host
/// page injects.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ChainGateway: Send + Sync {
    /// Executes a read-only call. No side effect, no signature.
    async fn query(&self, to: ContractAddress, calldata: Bytes) -> Result<Bytes, Fault>;

    /// Signs and broadcasts a state-changing transaction. Returns as soon as
    /// the network has acknowledged the transaction with a handle.
    async fn submit(
        &self,
        to: ContractAddress,
        calldata: Bytes,
        signer: SignerHandle,
    ) -> Result<TxId, Fault>;

    /// Waits until the transaction is included in a block. Timeout handling
    /// is the implementation's concern and surfaces as a [`Fault`].
    async fn await_confirmation(&self, tx: TxId) -> Result<Receipt, Fault>;
}

/// A fault reported by the node or wallet provider, carrying the provider's
/// own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Fault(pub String);

impl Fault {
    pub fn new(message: impl ToString) -> Self {
        Self(message.to_string())
    }
}
