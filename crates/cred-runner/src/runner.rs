//! The program's single action: announce which client id is in use.

use std::io::{self, Write};

use crate::config::ResolvedConfig;

/// Writes the confirmation line for the resolved credentials.
///
/// # Panics
///
/// Panics if the client secret is empty. Resolution already rejects empty
/// secrets, so hitting this assertion means the config was built by some
/// path other than [`ResolvedConfig::resolve`].
pub fn run(config: &ResolvedConfig, out: &mut impl Write) -> io::Result<()> {
    assert!(
        !config.client_secret.expose().is_empty(),
        "client secret must be non-empty"
    );

    writeln!(out, "Using {}", config.client_id)
}
