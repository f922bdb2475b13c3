mod address;
pub use address::{AddressDigest, Bech32Address};

mod key_format;
pub use key_format::KeyFormat;

mod public_key;
pub use public_key::PublicKeySpec;

mod validator_set;
pub use validator_set::{Validator, ValidatorPubKey, ValidatorSet, ValidatorSetResult};
