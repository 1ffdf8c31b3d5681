//! `rnode-deploy` — sign and verify RNode deploys from the command line.

mod keygen;
mod sign;
mod verify;

use clap::Parser;
use clap::Subcommand;

/// Deploy signing tools for RNode-compatible networks.
#[derive(Parser)]
#[command(name = "rnode-deploy", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new secp256k1 keypair for deploy signing.
    Keygen {
        /// Output path for the secret key.
        #[arg(long)]
        output: Option<String>,
    },

    /// Sign a deploy and print the JSON envelope.
    Sign {
        /// Path to the secp256k1 secret key file (hex-encoded).
        #[arg(long)]
        key: String,
        /// The term to deploy, inline.
        #[arg(long, conflicts_with = "term_file")]
        term: Option<String>,
        /// Read the term from a file instead.
        #[arg(long)]
        term_file: Option<String>,
        /// Phlo price.
        #[arg(long, default_value_t = 1)]
        phlo_price: i64,
        /// Phlo limit.
        #[arg(long, default_value_t = 500_000)]
        phlo_limit: i64,
        /// Block number after which the deploy is valid.
        #[arg(long, default_value_t = 0)]
        valid_after_block_number: i64,
        /// Millisecond Unix timestamp (defaults to now).
        #[arg(long)]
        timestamp: Option<i64>,
    },

    /// Verify a signed deploy envelope JSON file.
    Verify {
        /// Path to the SignedDeploy JSON file.
        envelope: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Keygen { output } => keygen::run(output.as_deref()),
        Command::Sign {
            key,
            term,
            term_file,
            phlo_price,
            phlo_limit,
            valid_after_block_number,
            timestamp,
        } => sign::run(
            &key,
            term.as_deref(),
            term_file.as_deref(),
            phlo_price,
            phlo_limit,
            valid_after_block_number,
            timestamp,
        ),
        Command::Verify { envelope } => verify::run(&envelope),
    }
}
