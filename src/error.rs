use crate::KeyFormat;
use thiserror::Error;

/// Errors that can occur in the cosmos-addr-types crate
#[derive(Error, Debug)]
pub enum Error {
    /// Encoded address exceeds the 90 character bech32 maximum
    #[error("Bech32 string longer than the 90 character maximum: {0}")]
    AddressTooLong(usize),

    /// Bech32 decode error
    #[error("Bech32 Error: {0}")]
    Bech32Decode(#[from] bech32::primitives::decode::CheckedHrpstringError),

    /// Bech32 encode error
    #[error("Bech32 Error: {0}")]
    Bech32Encode(#[from] bech32::EncodeError),

    /// Bech32 HRP error
    #[error("Bech32 Error: {0}")]
    Bech32Hrp(#[from] bech32::primitives::hrp::Error),

    /// Hex string decoding error
    #[error("Hex Decode Error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Public key string does not parse under its declared format
    #[error("Malformed {0} public key: \"{1}\"")]
    MalformedKey(KeyFormat, String),

    /// Serialization error
    #[error("JSON (de)serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Unknown public key format tag
    #[error("Unsupported public key format: {0}")]
    UnsupportedKeyFormat(String),

    /// Wrong length hex string
    #[error("Wrong length hex string")]
    WrongLengthHexString,
}
