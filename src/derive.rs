use crate::{Bech32Address, Error, PublicKeySpec};
use tracing::{event, Level};

/// Derive one bech32 account address per public key record, in input order.
///
/// Records are independent: a record whose key fails to decode, or whose
/// address fails to encode, yields its error in that position and the rest
/// of the batch continues. Nothing is retried; every step is a pure
/// function of its input.
pub fn derive_all(prefix: &str, specs: &[PublicKeySpec]) -> Vec<Result<Bech32Address, Error>> {
    specs
        .iter()
        .map(|spec| {
            let result = Bech32Address::derive(prefix, spec);
            if let Err(ref e) = result {
                event!(Level::WARN, "could not derive address: {e}");
            }
            result
        })
        .collect()
}
