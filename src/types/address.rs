use crate::{Error, PublicKeySpec};
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use derive_more::{AsMut, AsRef, Deref, Display, From, Into};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A bech32 string is at most 90 characters long
const MAX_ADDRESS_LENGTH: usize = 90;

/// A 20-byte account address digest, constructed as the RIPEMD-160 of the
/// SHA-256 of the raw public key bytes.
///
/// The two-stage hash and its order are fixed; this reproduces the
/// Cosmos/Tendermint address derivation standard.
#[derive(AsMut, AsRef, Clone, Copy, Debug, Deref, Eq, From, Into, Ord, PartialEq, PartialOrd)]
pub struct AddressDigest(pub [u8; 20]);

impl AddressDigest {
    /// Hash raw public key bytes into an address digest.
    ///
    /// Any byte sequence hashes, including an empty one; the key bytes are
    /// never interpreted here.
    pub fn of_key_bytes(raw: &[u8]) -> AddressDigest {
        let sha256 = Sha256::digest(raw);
        let ripemd160 = Ripemd160::digest(sha256);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&ripemd160);
        AddressDigest(bytes)
    }

    /// Render into a hexadecimal string
    pub fn as_hex_string(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from a hexadecimal string
    pub fn try_from_hex_string(v: &str) -> Result<AddressDigest, Error> {
        let vec: Vec<u8> = hex::decode(v)?;
        Ok(AddressDigest(
            vec.try_into().map_err(|_| Error::WrongLengthHexString)?,
        ))
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> AddressDigest {
        AddressDigest::of_key_bytes(b"mock raw public key bytes")
    }
}

/// A bech32-encoded account address: a lowercase human-readable prefix, the
/// separator `1`, and the payload regrouped into 5-bit characters followed
/// by a 6 character checksum
#[derive(
    AsRef, Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Into, PartialEq, Serialize,
)]
pub struct Bech32Address(String);

impl Bech32Address {
    /// Encode a byte payload as a bech32 address under the given prefix.
    ///
    /// The payload bits are regrouped from 8-bit bytes into 5-bit
    /// characters, most significant bit first, zero padded on the right,
    /// and the checksum is computed over the expanded prefix and the data
    /// characters. An empty payload is legal.
    ///
    /// Fails on a prefix that is empty, mixes upper and lower case, or
    /// contains characters outside US-ASCII 33-126, and on any result
    /// longer than 90 characters.
    pub fn encode(prefix: &str, payload: &[u8]) -> Result<Bech32Address, Error> {
        let hrp = Hrp::parse(prefix)?;
        let encoded = bech32::encode::<Bech32>(hrp, payload)?;
        if encoded.len() > MAX_ADDRESS_LENGTH {
            return Err(Error::AddressTooLong(encoded.len()));
        }
        Ok(Bech32Address(encoded))
    }

    /// Encode an address digest as a bech32 address under the given prefix
    pub fn for_digest(prefix: &str, digest: &AddressDigest) -> Result<Bech32Address, Error> {
        Bech32Address::encode(prefix, &digest.0)
    }

    /// Derive the account address for a public key: decode the key text
    /// under its declared format, hash the raw bytes, and encode the digest
    /// under the given prefix
    pub fn derive(prefix: &str, spec: &PublicKeySpec) -> Result<Bech32Address, Error> {
        let raw = spec.decode()?;
        let digest = AddressDigest::of_key_bytes(&raw);
        Bech32Address::for_digest(prefix, &digest)
    }

    /// Decode back into the prefix and the byte payload.
    ///
    /// Strict inverse of [`Bech32Address::encode`]: the checksum must
    /// verify under the same rules the encoder used (a bech32m checksum
    /// does not pass), the string must not mix upper and lower case, and
    /// the separator must be present with a nonempty prefix before it.
    /// The returned prefix is lowercase even for an all-uppercase address.
    pub fn decode(&self) -> Result<(String, Vec<u8>), Error> {
        let checked = CheckedHrpstring::new::<Bech32>(&self.0)?;
        let prefix = checked.hrp().as_str().to_lowercase();
        let payload: Vec<u8> = checked.byte_iter().collect();
        Ok((prefix, payload))
    }

    /// Interpret a string as a bech32 address, verifying its checksum
    pub fn try_from_str(s: &str) -> Result<Bech32Address, Error> {
        let _checked = CheckedHrpstring::new::<Bech32>(s)?;
        Ok(Bech32Address(s.to_owned()))
    }

    /// As &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Into String
    pub fn into_string(self) -> String {
        self.0
    }

    // Mock data for testing
    #[allow(dead_code)]
    pub(crate) fn mock() -> Bech32Address {
        Bech32Address("nomic1af97k377lpyj8zdpu9nrg725g8smsuj9xay3v0".to_owned())
    }
}

impl TryFrom<&str> for Bech32Address {
    type Error = Error;

    fn try_from(s: &str) -> Result<Bech32Address, Error> {
        Bech32Address::try_from_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::KeyFormat;

    test_serde! {Bech32Address, test_bech32_address_serde}

    const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

    #[test]
    fn test_known_ed25519_vector() {
        // base64 of the bytes 0x00..0x1f
        let spec = PublicKeySpec::new(
            KeyFormat::Ed25519,
            "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=",
        );
        let raw = spec.decode().unwrap();
        assert_eq!(raw, (0u8..32).collect::<Vec<u8>>());

        let digest = AddressDigest::of_key_bytes(&raw);
        assert_eq!(
            digest.as_hex_string(),
            "ea4beb47def8492389a1e16634795441e1b87245"
        );

        let address = Bech32Address::derive("nomic", &spec).unwrap();
        assert_eq!(
            address.as_str(),
            "nomic1af97k377lpyj8zdpu9nrg725g8smsuj9xay3v0"
        );
    }

    #[test]
    fn test_known_secp256k1_vector() {
        let spec = PublicKeySpec::new(
            KeyFormat::Secp256k1,
            "03f349dec2b5205707c778534a7f134125ea31e82134e5aa987417f1091103e263",
        );
        let address = Bech32Address::derive("cosmos", &spec).unwrap();
        assert_eq!(
            address.as_str(),
            "cosmos1sqxddufe9qz0phxnntsgytg3wr8sl9z4xhc8up"
        );
    }

    #[test]
    fn test_hash_is_total_and_deterministic() {
        assert_eq!(
            AddressDigest::of_key_bytes(b""),
            AddressDigest::of_key_bytes(b"")
        );
        // RIPEMD160(SHA256("")) reference value
        assert_eq!(
            AddressDigest::of_key_bytes(b"").as_hex_string(),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_roundtrip() {
        let digest = AddressDigest::of_key_bytes(b"roundtrip");
        let address = Bech32Address::for_digest("nomic", &digest).unwrap();
        let (prefix, payload) = address.decode().unwrap();
        assert_eq!(prefix, "nomic");
        assert_eq!(payload, digest.0.to_vec());
    }

    #[test]
    fn test_empty_payload() {
        let address = Bech32Address::encode("nomic", &[]).unwrap();
        assert_eq!(address.as_str(), "nomic16y7aat");
        let (prefix, payload) = address.decode().unwrap();
        assert_eq!(prefix, "nomic");
        assert!(payload.is_empty());
    }

    #[test]
    fn test_checksum_sensitivity() {
        let valid = "nomic1af97k377lpyj8zdpu9nrg725g8smsuj9xay3v0";
        assert!(Bech32Address::try_from_str(valid).is_ok());

        // substituting any single character of the data or checksum part
        // must fail the checksum
        for i in 6..valid.len() {
            for c in BECH32_CHARSET.bytes() {
                if valid.as_bytes()[i] == c {
                    continue;
                }
                let mut flipped: Vec<u8> = valid.bytes().collect();
                flipped[i] = c;
                let flipped = String::from_utf8(flipped).unwrap();
                assert!(
                    Bech32Address::try_from_str(&flipped).is_err(),
                    "{} was accepted",
                    flipped
                );
            }
        }
    }

    #[test]
    fn test_rejects_bech32m_checksum() {
        // carries a valid bech32m checksum, not a bech32 one
        assert!(Bech32Address::try_from_str("abc14w46h2at4w46h2at4w46h2at4w46h2at958ngu").is_err());
    }

    #[test]
    fn test_rejects_bad_prefix() {
        assert!(Bech32Address::encode("Nomic", &[0u8; 20]).is_err());
        assert!(Bech32Address::encode("", &[0u8; 20]).is_err());
        assert!(Bech32Address::encode("no mic", &[0u8; 20]).is_err());
    }

    #[test]
    fn test_rejects_mixed_case_address() {
        assert!(
            Bech32Address::try_from_str("nomic1AF97K377lpyj8zdpu9nrg725g8smsuj9xay3v0").is_err()
        );
    }

    #[test]
    fn test_uppercase_address_decodes() {
        let address =
            Bech32Address::try_from_str("NOMIC1AF97K377LPYJ8ZDPU9NRG725G8SMSUJ9XAY3V0").unwrap();
        let (prefix, payload) = address.decode().unwrap();
        assert_eq!(prefix, "nomic");
        assert_eq!(hex::encode(payload), "ea4beb47def8492389a1e16634795441e1b87245");
    }

    #[test]
    fn test_too_long() {
        let err = Bech32Address::encode("averylongchainprefix", &[0u8; 64]).unwrap_err();
        assert!(matches!(err, Error::AddressTooLong(_)));
    }

    #[test]
    fn test_digest_hex() {
        let digest =
            AddressDigest::try_from_hex_string("ea4beb47def8492389a1e16634795441e1b87245").unwrap();
        assert_eq!(
            digest.as_hex_string(),
            "ea4beb47def8492389a1e16634795441e1b87245"
        );
        assert!(matches!(
            AddressDigest::try_from_hex_string("ea4beb"),
            Err(Error::WrongLengthHexString)
        ));
        assert!(AddressDigest::try_from_hex_string("zz").is_err());
    }
}
