use crate::{Bech32Address, Error, PublicKeySpec};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

/// A Tendermint RPC `/validators` response document, reduced to the fields
/// the address derivation needs. Unknown fields are ignored when parsing.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidatorSet {
    /// The RPC result envelope
    pub result: ValidatorSetResult,
}

/// The `result` object of a `/validators` response
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidatorSetResult {
    /// The validators in the set, in document order
    pub validators: Vec<Validator>,
}

/// One validator entry of a validator set document
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Validator {
    /// The validator's public key record
    pub pub_key: ValidatorPubKey,
}

/// A validator public key record: the Tendermint type tag and the key
/// material encoded as text
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidatorPubKey {
    /// The declared key type tag, e.g. `tendermint/PubKeyEd25519`
    #[serde(rename = "type")]
    pub key_type: String,

    /// The key material, encoded as the type tag implies
    pub value: String,
}

impl ValidatorSet {
    /// Parse a validator set document from JSON text
    pub fn from_json(json: &str) -> Result<ValidatorSet, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Project the validators into typed [`PublicKeySpec`] records, in
    /// document order. A record with an unrecognized type tag yields that
    /// record's error in place.
    pub fn public_keys(&self) -> Vec<Result<PublicKeySpec, Error>> {
        self.result
            .validators
            .iter()
            .map(|v| v.pub_key.to_spec())
            .collect()
    }

    /// Derive one account address per validator, in document order.
    ///
    /// Records are independent: a validator whose key fails to parse or
    /// decode yields its error in place and the rest of the set is
    /// unaffected.
    pub fn derive_addresses(&self, prefix: &str) -> Vec<Result<Bech32Address, Error>> {
        self.result
            .validators
            .iter()
            .map(|v| {
                let result = v.derive_address(prefix);
                if let Err(ref e) = result {
                    event!(Level::WARN, "could not derive address: {e}");
                }
                result
            })
            .collect()
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> ValidatorSet {
        ValidatorSet {
            result: ValidatorSetResult {
                validators: vec![Validator {
                    pub_key: ValidatorPubKey {
                        key_type: "tendermint/PubKeyEd25519".to_owned(),
                        value: "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=".to_owned(),
                    },
                }],
            },
        }
    }
}

impl Validator {
    /// Derive the account address for this validator's public key
    pub fn derive_address(&self, prefix: &str) -> Result<Bech32Address, Error> {
        Bech32Address::derive(prefix, &self.pub_key.to_spec()?)
    }
}

impl ValidatorPubKey {
    /// Interpret the type tag and project into a typed [`PublicKeySpec`]
    pub fn to_spec(&self) -> Result<PublicKeySpec, Error> {
        PublicKeySpec::from_tagged(&self.key_type, &self.value)
    }
}
