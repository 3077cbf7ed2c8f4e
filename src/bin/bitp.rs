//! Bit-position to hex mask CLI.
//!
//! Reads one line of whitespace-separated positions (0-127) from stdin and
//! prints the 128-bit mask as 32 uppercase hex digits.

use std::io::{self, Write};

use chartprep::bitmask::encode;

fn main() -> anyhow::Result<()> {
    print!("Enter bit positions (0-127, space-separated): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    match encode(&line) {
        Ok(hex) => println!("Hex result: 0x{}", hex),
        Err(err) => {
            println!("Error: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}
