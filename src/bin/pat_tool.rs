//! Inspect the name codec: convert between numbers, hex and `@p`/`@q` names,
//! and print a name's tier.

use clap::{Parser, Subcommand};
use planetsieve::cli_error::CliError;
use planetsieve::{
    hex_to_num, num_to_hex, num_to_patp, num_to_patq, patp_to_num, IdentifierCodec, PatpCodec,
};

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a number (decimal or 0x-prefixed hex) as @p
    Patp { value: String },
    /// Render a number (decimal or 0x-prefixed hex) as @q
    Patq { value: String },
    /// Decode an @p name to decimal
    Num { name: String },
    /// Decode an @p name to hex
    Hex { name: String },
    /// Print whether a name is a galaxy, star, planet or moon
    Clan { name: String },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    match args.command {
        Command::Patp { value } => println!("{}", num_to_patp(parse_value(&value)?)),
        Command::Patq { value } => println!("{}", num_to_patq(parse_value(&value)?)),
        Command::Num { name } => println!("{}", patp_to_num(&name)?),
        Command::Hex { name } => println!("{}", num_to_hex(patp_to_num(&name)?)),
        Command::Clan { name } => println!("{}", PatpCodec.tier(&name)?),
    }
    Ok(())
}

fn parse_value(text: &str) -> Result<u64, Box<dyn std::error::Error>> {
    if text.starts_with("0x") {
        Ok(hex_to_num(text)?)
    } else {
        text.parse::<u64>()
            .map_err(|_| CliError::Message(format!("invalid number '{text}'")).into())
    }
}
