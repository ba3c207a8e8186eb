//! The `superstep` binary: re-runs one step of the interop program from a recorded fixture.

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use superstep_client::{execute, Fixture};
use superstep_proof::block_on;
use tracing::Level;

/// Replays a single step of the superchain interop state transition from a recorded fixture.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0 [error] - 4 [trace])", action = ArgAction::Count)]
    v: u8,
    /// Path to the JSON fixture holding the boot information, preimages and recorded derivations.
    #[arg(long, env = "SUPERSTEP_FIXTURE")]
    fixture: PathBuf,
    /// Print the computed commitment without checking it against the claimed post-state.
    #[arg(long)]
    skip_claim_validation: bool,
}

fn main() -> Result<()> {
    let Cli { v, fixture, skip_claim_validation } = Cli::parse();
    init_tracing_subscriber(v)?;

    let raw = std::fs::read(&fixture)
        .with_context(|| format!("failed to read fixture {}", fixture.display()))?;
    let fixture: Fixture = serde_json::from_slice(&raw).context("failed to parse fixture")?;

    let computed = block_on(execute(&fixture, !skip_claim_validation))?;
    println!("{computed}");
    Ok(())
}

/// Initializes the tracing subscriber
///
/// # Arguments
/// * `verbosity_level` - The verbosity level (0-4)
///
/// # Returns
/// * `Result<()>` - Ok if successful, Err otherwise.
fn init_tracing_subscriber(verbosity_level: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(match verbosity_level {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))
}
