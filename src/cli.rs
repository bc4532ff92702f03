use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_ENGINE: &str = "openquake";

#[derive(Parser, Debug)]
#[command(name = "oq-smoke", version, about = "Smoke-test runner for the hazard engine CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_ENGINE,
        help = "Engine executable to invoke (name on PATH or explicit path)"
    )]
    pub engine: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the four-step smoke sequence, aborting at the first failure
    Run {
        #[arg(
            long,
            env = "OQ_CHECKOUT_ROOT",
            help = "Checkout root containing demos/hazard/AreaSourceClassicalPSHA/job.ini"
        )]
        checkout_root: PathBuf,
        #[arg(long, help = "Per-invocation wall-clock timeout in seconds")]
        timeout: Option<u64>,
    },
    /// Print the sequence that `run` would execute, without executing it
    Plan {
        #[arg(long, env = "OQ_CHECKOUT_ROOT")]
        checkout_root: PathBuf,
    },
    /// Preflight checks: engine reachable, checkout root and demo job present
    Doctor {
        #[arg(long, env = "OQ_CHECKOUT_ROOT")]
        checkout_root: PathBuf,
    },
}
