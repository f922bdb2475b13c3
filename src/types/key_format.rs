use crate::Error;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The encoding scheme of a validator public key, which determines how its
/// textual representation is decoded into raw key bytes
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum KeyFormat {
    /// An Ed25519 public key, rendered as standard base64 (the Tendermint default)
    Ed25519,

    /// A Secp256k1 public key, rendered as hexadecimal
    Secp256k1,
}

impl KeyFormat {
    /// Recognize a format from either its bare name or the Tendermint type
    /// tag that validator set documents carry (e.g. `tendermint/PubKeyEd25519`)
    pub fn from_tag(tag: &str) -> Result<KeyFormat, Error> {
        match tag {
            "Ed25519" | "ed25519" | "tendermint/PubKeyEd25519" => Ok(KeyFormat::Ed25519),
            "Secp256k1" | "secp256k1" | "tendermint/PubKeySecp256k1" => Ok(KeyFormat::Secp256k1),
            _ => Err(Error::UnsupportedKeyFormat(tag.to_owned())),
        }
    }

    /// Decode a textual public key into raw key bytes under this format.
    ///
    /// The bytes are opaque here; nothing past the text encoding is validated.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, Error> {
        match *self {
            KeyFormat::Ed25519 => base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .map_err(|_| Error::MalformedKey(*self, encoded.to_owned())),
            KeyFormat::Secp256k1 => {
                hex::decode(encoded).map_err(|_| Error::MalformedKey(*self, encoded.to_owned()))
            }
        }
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> KeyFormat {
        KeyFormat::Ed25519
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KeyFormat::Ed25519 => write!(f, "Ed25519"),
            KeyFormat::Secp256k1 => write!(f, "Secp256k1"),
        }
    }
}

impl FromStr for KeyFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<KeyFormat, Error> {
        KeyFormat::from_tag(s)
    }
}
