// TEMPORARILY
#![allow(clippy::uninlined_format_args)]

use cosmos_addr_types::ValidatorSet;

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            println!("Path to the validator set JSON file: ");
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).unwrap();
            line.trim().to_owned()
        }
    };
    let prefix = std::env::args().nth(2).unwrap_or_else(|| "nomic".to_owned());

    let json = std::fs::read_to_string(&path).unwrap();
    let set = ValidatorSet::from_json(&json).unwrap();

    for result in set.derive_addresses(&prefix) {
        match result {
            Ok(address) => println!("{}", address),
            Err(e) => eprintln!("Error deriving address: {}", e),
        }
    }
}
