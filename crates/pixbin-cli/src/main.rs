mod cli;

use std::io;
use std::process;

use clap::Parser;
use pixbin_core::commands::{decode, encode};

use crate::cli::CliArgs;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    log::debug!("invoked with {args:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if args.decode {
        if !args.dimensions.is_empty() {
            eprintln!("Dimension arguments are only accepted when encoding");
            process::exit(1);
        }

        if let Err(e) = decode(stdin.lock(), stdout.lock()) {
            eprintln!("Error decoding PPM: {e}");
            process::exit(1);
        }
    } else {
        let (width, height) = match args.target_dimensions() {
            Ok(dimensions) => dimensions,
            Err(message) => {
                eprintln!("{message}");
                process::exit(1);
            }
        };

        if let Err(e) = encode(stdin.lock(), stdout.lock(), width, height) {
            eprintln!("Error encoding binary to PPM: {e}");
            process::exit(1);
        }
    }
}
