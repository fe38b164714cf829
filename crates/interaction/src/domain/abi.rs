//! Encoding of contract calls and decoding of their results.
//!
//! Calls use the standard contract ABI layout: a 4-byte selector derived from
//! the canonical method signature, followed by each argument as a 32-byte
//! big-endian word. Unsigned integer text is parsed at full 256-bit
//! precision; malformed or out-of-range text is a hard error, never a clamp.

use {
    crate::{
        domain::registry::{Method, ParamType},
        util::bytes::Bytes,
    },
    alloy_primitives::{U256, keccak256},
    std::str::FromStr,
};

/// The 4-byte call selector for a method.
pub fn selector(method: Method) -> [u8; 4] {
    let digest = keccak256(method.signature().as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Encodes a call to `method` with the given raw argument text.
pub fn encode_call(method: Method, raw_args: &[&str]) -> Result<Bytes, EncodingError> {
    let params = method.params();
    if raw_args.len() != params.len() {
        return Err(EncodingError::Arity {
            method: method.name(),
            expected: params.len(),
            got: raw_args.len(),
        });
    }
    let mut payload = Vec::with_capacity(4 + 32 * params.len());
    payload.extend_from_slice(&selector(method));
    for (param, raw) in params.iter().zip(raw_args) {
        match param.kind {
            ParamType::Uint256 => payload.extend_from_slice(&parse_uint(raw)?.to_be_bytes::<32>()),
        }
    }
    Ok(payload.into())
}

/// Decodes the raw bytes a query returned into the method's declared return
/// value. The empty-payload case ("no data returned") is a distinct outcome
/// handled by the caller before decoding.
pub fn decode_result(method: Method, data: &[u8]) -> Result<Decoded, DecodingError> {
    let returns = method.returns();
    let expected = 32 * returns.len();
    if data.len() != expected {
        return Err(DecodingError::Width {
            expected,
            got: data.len(),
        });
    }
    match returns {
        [] => Ok(Decoded::Empty),
        [ParamType::Uint256, ..] => {
            let mut word = [0; 32];
            word.copy_from_slice(&data[..32]);
            Ok(Decoded::Uint(U256::from_be_bytes(word)))
        }
    }
}

/// A decoded return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Uint(U256),
    Empty,
}

/// Parses unsigned integer argument text, accepting decimal or `0x` hex.
fn parse_uint(text: &str) -> Result<U256, EncodingError> {
    let invalid = |reason: &str| EncodingError::InvalidUint {
        text: text.to_string(),
        reason: reason.to_string(),
    };
    let digits = text.strip_prefix("0x").unwrap_or(text);
    if digits.is_empty() {
        return Err(invalid("no digits"));
    }
    U256::from_str(text).map_err(|err| invalid(&err.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("{method} takes {expected} argument(s), got {got}")]
    Arity {
        method: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid unsigned integer {text:?}: {reason}")]
    InvalidUint { text: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodingError {
    #[error("malformed response, expected {expected} bytes, got {got}")]
    Width { expected: usize, got: usize },
}
