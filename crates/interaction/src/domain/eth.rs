use std::str::FromStr;

pub use alloy_primitives::{Address, B256, U256};

/// Chain ID as defined by EIP-155.
///
/// https://eips.ethereum.org/EIPS/eip-155
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A smart contract address, the target of an interaction.
///
/// Constructed only through [`FromStr`], which accepts exactly the external
/// representation: `0x` followed by 40 hex characters, case insensitive. No
/// check is made that the address actually holds code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractAddress(pub Address);

impl FromStr for ContractAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").ok_or(InvalidAddress)?;
        if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidAddress);
        }
        Address::from_str(s).map(Self).map_err(|_| InvalidAddress)
    }
}

impl std::fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not a contract address, expected 0x followed by 40 hex characters")]
pub struct InvalidAddress;

/// Opaque handle to the wallet account that authorizes writes. The core never
/// inspects it beyond passing it to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignerHandle(pub Address);

/// Hash identifying a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxId(pub B256);

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Block number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockNo(pub u64);

impl std::fmt::Display for BlockNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gas amount.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gas(pub U256);

impl From<U256> for Gas {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for Gas {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Confirmation record returned once a write is included in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub block: BlockNo,
    pub gas_used: Gas,
}
