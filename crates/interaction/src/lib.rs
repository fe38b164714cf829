//! Contract-interaction core of the Stylus playground: turns a user-chosen
//! method and raw argument text into an encoded on-chain call, dispatches it
//! through the right channel (read-only query vs. wallet-signed transaction),
//! tracks its lifecycle and reports the outcome in displayable form.
#![forbid(unsafe_code)]

pub mod domain;
pub mod infra;
pub mod util;

pub use {
    domain::{
        guidance,
        interaction::{AlreadyInFlight, Controller, Failure, InteractionState, Outcome, Value},
        registry::{Method, Mutability},
    },
    infra::{config::Network, gateway::ChainGateway, wallet::WalletSession},
};
