use crate::{Error, KeyFormat};
use serde::{Deserialize, Serialize};

/// A validator public key as supplied by the caller: a declared format and
/// the key material rendered in that format's textual encoding.
///
/// The encoded text is not validated at construction; validation happens
/// when the raw bytes are needed, see [`PublicKeySpec::decode`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PublicKeySpec {
    /// The declared key format
    pub format: KeyFormat,

    /// The key material, encoded as text under `format`
    pub encoded: String,
}

impl PublicKeySpec {
    /// Create a new PublicKeySpec
    pub fn new<S: Into<String>>(format: KeyFormat, encoded: S) -> PublicKeySpec {
        PublicKeySpec {
            format,
            encoded: encoded.into(),
        }
    }

    /// Create from a raw `(type tag, value)` record, recognizing Tendermint
    /// type tags as well as bare format names
    pub fn from_tagged(tag: &str, encoded: &str) -> Result<PublicKeySpec, Error> {
        Ok(PublicKeySpec {
            format: KeyFormat::from_tag(tag)?,
            encoded: encoded.to_owned(),
        })
    }

    /// Decode into raw key bytes
    pub fn decode(&self) -> Result<Vec<u8>, Error> {
        self.format.decode(&self.encoded)
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> PublicKeySpec {
        PublicKeySpec::new(
            KeyFormat::Ed25519,
            "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=",
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    test_serde! {PublicKeySpec, test_public_key_spec_serde}

    #[test]
    fn test_from_tagged() {
        let spec = PublicKeySpec::from_tagged("tendermint/PubKeyEd25519", "aGVsbG8=").unwrap();
        assert_eq!(spec.format, KeyFormat::Ed25519);
        assert_eq!(spec.decode().unwrap(), b"hello");

        assert!(matches!(
            PublicKeySpec::from_tagged("tendermint/PubKeyBls12381", "aGVsbG8="),
            Err(Error::UnsupportedKeyFormat(_))
        ));
    }

    #[test]
    fn test_decode_defers_validation() {
        // construction accepts anything; decode reports the bad text
        let spec = PublicKeySpec::new(KeyFormat::Secp256k1, "not hex");
        match spec.decode() {
            Err(Error::MalformedKey(format, encoded)) => {
                assert_eq!(format, KeyFormat::Secp256k1);
                assert_eq!(encoded, "not hex");
            }
            other => panic!("expected MalformedKey, got {:?}", other),
        }
    }
}
