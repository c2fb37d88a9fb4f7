use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use pixbin_core::ImageDimensions;

/// Computes the padded PPM image dimensions for a given byte count.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CalcArgs {
    /// Number of bytes to store, prompted for interactively when absent
    byte_count: Option<usize>,
}

fn main() {
    env_logger::init();

    let args = CalcArgs::parse();
    let byte_count = match args.byte_count {
        Some(count) => count,
        None => match prompt_for_byte_count() {
            Ok(count) => count,
            Err(message) => {
                eprintln!("{message}");
                process::exit(1);
            }
        },
    };

    match ImageDimensions::for_byte_count(byte_count) {
        Ok(dimensions) => {
            println!("\nFor {byte_count} bytes:");
            println!("Width:  {}", dimensions.width);
            println!("Height: {}", dimensions.height);
            println!("Padding Bytes: {}", dimensions.padding);
            println!("Total Bytes: {}", dimensions.total_bytes());
        }
        Err(_) => {
            eprintln!("Invalid input. Please enter a positive integer.");
            process::exit(1);
        }
    }
}

fn prompt_for_byte_count() -> Result<usize, String> {
    print!("Enter the number of bytes to store: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to write the prompt: {e}"))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read the byte count: {e}"))?;

    line.trim()
        .parse::<usize>()
        .map_err(|_| "Invalid input. Please enter a positive integer.".to_owned())
}
