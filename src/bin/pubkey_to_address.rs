// TEMPORARILY
#![allow(clippy::uninlined_format_args)]

use cosmos_addr_types::{Bech32Address, PublicKeySpec};

fn main() {
    let stdin = std::io::stdin();

    println!("Public key: ");
    let mut key = String::new();
    stdin.read_line(&mut key).unwrap();

    println!("Public key format (Ed25519, Secp256k1): ");
    let mut format = String::new();
    stdin.read_line(&mut format).unwrap();

    println!("Address prefix: ");
    let mut prefix = String::new();
    stdin.read_line(&mut prefix).unwrap();

    let spec = PublicKeySpec::from_tagged(format.trim(), key.trim()).unwrap();
    let address = Bech32Address::derive(prefix.trim(), &spec).unwrap();
    println!("{}", address);
}
