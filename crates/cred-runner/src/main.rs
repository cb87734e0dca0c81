//! Cred Runner - Client-Credential Entry Point
//!
//! Resolves a client id and client secret from command-line flags or
//! environment variables (flag wins) and prints one confirmation line.
//!
//! # Usage
//!
//! ```bash
//! # Explicit flags
//! cred-runner --client_id my-app --client_secret s3cret
//!
//! # Environment fallback
//! CLIENT_ID=my-app CLIENT_SECRET=s3cret cred-runner
//! ```

mod config;
mod runner;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::ResolvedConfig;

/// Client-credential entry point.
#[derive(Parser, Debug)]
#[command(name = "cred-runner")]
#[command(version)]
#[command(about = "Resolves client credentials and prints the active client id")]
struct Args {
    /// Application client id. Falls back to the CLIENT_ID environment variable.
    #[arg(short = 'c', long = "client_id", value_name = "ID")]
    client_id: Option<String>,

    /// Application client secret. Falls back to the CLIENT_SECRET environment variable.
    #[arg(short = 's', long = "client_secret", value_name = "SECRET")]
    client_secret: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Environment is read exactly once, here; everything after works from
    // the resolved values.
    let config = ResolvedConfig::resolve(args.client_id, args.client_secret, |var| {
        std::env::var(var).ok()
    })?;

    tracing::debug!(client_id = %config.client_id, "resolved configuration");

    runner::run(&config, &mut std::io::stdout())?;

    Ok(())
}
