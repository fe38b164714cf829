//! The interaction controller: validates a user action, encodes it, drives
//! the gateway and owns the request's lifecycle state.

use {
    crate::{
        domain::{
            abi,
            eth::{ContractAddress, Receipt, SignerHandle, U256},
            registry::{Method, Mutability},
        },
        infra::{
            config::Network,
            gateway::{ChainGateway, Fault},
            wallet::WalletSession,
        },
        util::fmt::truncate,
    },
    std::sync::{Arc, Mutex},
    thiserror::Error,
};

/// Display budget for provider fault messages.
const MAX_FAULT_LEN: usize = 200;

/// Provider messages that indicate the user declined the request in the
/// wallet. Providers do not standardize these strings; anything unrecognized
/// falls through to [`Failure::Gateway`].
const REJECTION_MARKERS: &[&str] = &["User rejected", "rejected the request", "denied transaction"];

/// Orchestrates one control surface's interactions with the target contract.
/// Owns the surface's [`InteractionState`]; at most one request is in flight
/// at a time.
pub struct Controller {
    gateway: Arc<dyn ChainGateway>,
    session: Arc<dyn WalletSession>,
    network: Network,
    state: Mutex<InteractionState>,
}

impl Controller {
    pub fn new(
        gateway: Arc<dyn ChainGateway>,
        session: Arc<dyn WalletSession>,
        network: Network,
    ) -> Self {
        Self {
            gateway,
            session,
            network,
            state: Mutex::new(InteractionState::Idle),
        }
    }

    /// Runs one interaction: validate, encode, dispatch as query or signed
    /// transaction, interpret the result. Every error is classified into a
    /// [`Failure`] and recorded as the terminal state; none escape.
    ///
    /// Returns [`AlreadyInFlight`] without touching the gateway or the state
    /// when a prior request has not reached a terminal state yet.
    pub async fn invoke(
        &self,
        target: &str,
        method: &str,
        raw_args: &[&str],
    ) -> Result<Outcome, AlreadyInFlight> {
        self.begin()?;
        let outcome = match self.run(target, method, raw_args).await {
            Ok(value) => Outcome::Succeeded(value),
            Err(failure) => Outcome::Failed(failure),
        };
        match &outcome {
            Outcome::Succeeded(value) => {
                tracing::debug!(?value, "interaction succeeded");
                self.set_state(InteractionState::Succeeded(*value));
            }
            Outcome::Failed(failure) => {
                tracing::warn!(%failure, "interaction failed");
                self.set_state(InteractionState::Failed(failure.clone()));
            }
        }
        Ok(outcome)
    }

    /// A snapshot of the current lifecycle state, for display.
    pub fn state(&self) -> InteractionState {
        self.state.lock().unwrap().clone()
    }

    /// The human-readable status string for the presentation layer.
    pub fn status_line(&self) -> String {
        self.state().status_line()
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    fn begin(&self) -> Result<(), AlreadyInFlight> {
        let mut state = self.state.lock().unwrap();
        if state.is_in_flight() {
            return Err(AlreadyInFlight);
        }
        // A terminal Succeeded/Failed state resets here, on the next action.
        *state = InteractionState::Validating;
        Ok(())
    }

    fn set_state(&self, next: InteractionState) {
        *self.state.lock().unwrap() = next;
    }

    async fn run(&self, target: &str, method: &str, raw_args: &[&str]) -> Result<Value, Failure> {
        let signer = self.preconditions()?;
        let target: ContractAddress = target.parse().map_err(|_| Failure::InvalidAddress)?;
        let method =
            Method::lookup(method).ok_or_else(|| Failure::UnknownMethod(method.to_string()))?;
        let calldata = abi::encode_call(method, raw_args)?;
        tracing::debug!(method = method.name(), %target, ?calldata, "dispatching interaction");
        self.set_state(InteractionState::AwaitingSignatureOrQuery);

        match method.mutability() {
            Mutability::Read => {
                let data = self
                    .gateway
                    .query(target, calldata)
                    .await
                    .map_err(|fault| Failure::Gateway(truncate(&fault.to_string(), MAX_FAULT_LEN)))?;
                if data.is_empty() {
                    // The node answered but had nothing to say. Distinct from
                    // a malformed response.
                    return Ok(Value::NoData);
                }
                Ok(match abi::decode_result(method, data.as_slice())? {
                    abi::Decoded::Uint(value) => Value::Uint(value),
                    abi::Decoded::Empty => Value::NoData,
                })
            }
            Mutability::Write => {
                let tx = self
                    .gateway
                    .submit(target, calldata, signer)
                    .await
                    .map_err(classify_submission_fault)?;
                tracing::debug!(%tx, "transaction submitted, awaiting confirmation");
                self.set_state(InteractionState::AwaitingConfirmation);
                let receipt = self.gateway.await_confirmation(tx).await.map_err(|fault| {
                    Failure::Confirmation(truncate(&fault.to_string(), MAX_FAULT_LEN))
                })?;
                Ok(Value::Confirmed(receipt))
            }
        }
    }

    /// Checks every precondition in order. No side effect happens before all
    /// of them pass.
    fn preconditions(&self) -> Result<SignerHandle, Failure> {
        if !self.session.is_connected() {
            return Err(Failure::NotConnected);
        }
        match self.session.chain_id() {
            Some(chain_id) if chain_id == self.network.chain_id => {}
            _ => {
                return Err(Failure::WrongNetwork {
                    required: self.network.name.clone(),
                });
            }
        }
        self.session.signer().ok_or(Failure::NotConnected)
    }
}

fn classify_submission_fault(fault: Fault) -> Failure {
    let message = fault.to_string();
    if REJECTION_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
    {
        Failure::SignerRejected
    } else {
        Failure::Gateway(truncate(&message, MAX_FAULT_LEN))
    }
}

/// Lifecycle of one interaction request. Transitions run strictly forward;
/// the two terminal states reset to a fresh run on the next user action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Validating,
    AwaitingSignatureOrQuery,
    AwaitingConfirmation,
    Succeeded(Value),
    Failed(Failure),
}

impl InteractionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Validating | Self::AwaitingSignatureOrQuery | Self::AwaitingConfirmation
        )
    }

    pub fn status_line(&self) -> String {
        match self {
            Self::Idle => "Ready".to_string(),
            Self::Validating => "Validating...".to_string(),
            Self::AwaitingSignatureOrQuery => "Sending request...".to_string(),
            Self::AwaitingConfirmation => "Tx sent! Waiting for confirmation...".to_string(),
            Self::Succeeded(value) => value.status_line(),
            Self::Failed(failure) => format!("Error: {failure}"),
        }
    }
}

/// How a finished interaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded(Value),
    Failed(Failure),
}

/// The payload of a successful interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Decoded result of a read.
    Uint(U256),
    /// The read went through but the node returned an empty payload.
    NoData,
    /// A write was confirmed on chain.
    Confirmed(Receipt),
}

impl Value {
    fn status_line(&self) -> String {
        match self {
            Self::Uint(value) => format!("Result: {value}"),
            Self::NoData => "No data returned".to_string(),
            Self::Confirmed(receipt) => format!(
                "Confirmed in block {}. Gas used: {}",
                receipt.block, receipt.gas_used
            ),
        }
    }
}

/// Classified reason an interaction failed. Each kind renders its own
/// message; the presentation layer never has to disambiguate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("connect your wallet first")]
    NotConnected,
    #[error("wrong network, switch to {required} first")]
    WrongNetwork { required: String },
    #[error("enter a valid contract address (0x followed by 40 hex characters)")]
    InvalidAddress,
    #[error("method {0} not found")]
    UnknownMethod(String),
    #[error(transparent)]
    Encoding(#[from] abi::EncodingError),
    #[error(transparent)]
    Decoding(#[from] abi::DecodingError),
    #[error("transaction rejected in the wallet")]
    SignerRejected,
    #[error("gateway error: {0}")]
    Gateway(String),
    #[error("confirmation failed: {0}")]
    Confirmation(String),
}

/// Returned when `invoke` is called while a prior request is still in
/// flight. The call is a no-op; the in-flight request is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("an interaction is already in flight")]
pub struct AlreadyInFlight;
