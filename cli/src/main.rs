//! Alea command-line tool
//!
//! Prints draws from a seeded generator, one per line.
//!
//! ```text
//! alea [--count N] [--kind random|fract53|int32] [SEED...]
//! ```
//!
//! Without seed values the generator is seeded from OS entropy and the
//! seed is echoed to stderr so the run can be reproduced.

use alea_prng::{Alea, AleaError};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Alea(#[from] AleaError),
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq)]
enum Kind {
    #[value(name = "random")]
    Random,
    #[value(name = "fract53")]
    Fract53,
    #[value(name = "int32")]
    Int32,
}

#[derive(Parser, Debug)]
#[command(name = "alea", about = "Print draws from a seeded Alea generator")]
struct Args {
    /// Number of values to print
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    /// Kind of draw
    #[arg(long, short, value_enum, default_value_t = Kind::Random)]
    kind: Kind,

    /// Seed values; OS entropy when omitted
    seed: Vec<String>,
}

fn run(args: Args) -> Result<(), CliError> {
    let mut rng = if args.seed.is_empty() {
        let rng = Alea::from_entropy()?;
        let seed: Vec<&str> = rng.initial_args().iter().map(|v| v.as_str()).collect();
        eprintln!("seed: {}", seed.join(" "));
        rng
    } else {
        Alea::new(&args.seed)
    };

    for _ in 0..args.count {
        match args.kind {
            Kind::Random => println!("{}", rng.random()),
            Kind::Fract53 => println!("{}", rng.fract53()),
            Kind::Int32 => println!("{}", rng.int32()),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
