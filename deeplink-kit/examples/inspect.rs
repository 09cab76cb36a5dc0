//! Print the normalized intent for each deeplink given on the command line,
//! or for each line of stdin when no arguments are given.
//!
//! ```text
//! RUST_LOG=debug cargo run --example inspect -- "web+stellar:pay?amount=100"
//! ```

use std::io::BufRead;

use deeplink_kit::parse_deeplink;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        args.iter().for_each(|input| inspect(input));
        return;
    }

    for line in std::io::stdin().lock().lines() {
        let line = line.expect("Failed to read stdin");
        if !line.is_empty() {
            inspect(&line);
        }
    }
}

fn inspect(input: &str) {
    match parse_deeplink(input) {
        Ok(intent) => {
            let json = serde_json::to_string_pretty(&intent).expect("Intent serializes");
            if intent.is_malformed() {
                eprintln!("warning: {input:?} is a malformed {} link", intent.kind());
            }
            println!("{json}");
        }
        Err(err) => eprintln!("{input:?}: {err}"),
    }
}
