//! Pull command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use snsync_core::sync::{self, PullOutcome};
use snsync_core::{Config, HttpTransport, Settings};

use crate::output::Output;
use crate::prompt::TerminalPrompt;

/// Reload the file from the remote record if the server copy changed
pub fn run(
    file: &Path,
    config_path: Option<&PathBuf>,
    assume_yes: bool,
    output: &Output,
) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    let mut settings =
        Settings::with_path(config.settings_path()).context("Failed to open settings store")?;
    let transport = HttpTransport::new().context("Failed to build HTTP client")?;
    let prompt = TerminalPrompt::new(assume_yes);

    let mut buffer =
        fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?;
    let original = buffer.clone();

    let result = sync::pull(&mut buffer, &transport, &mut settings, &prompt);

    // Reload and credential scrub both mutate the buffer; whatever changed
    // must reach disk even when the operation ends in an error.
    if buffer != original {
        fs::write(file, &buffer).with_context(|| format!("Failed to write {:?}", file))?;
    }

    match result {
        Ok(PullOutcome::Replaced) => {
            output.success("Reloaded from server");
            Ok(())
        }
        Ok(PullOutcome::Unchanged) => {
            output.message("Already up to date with the server");
            Ok(())
        }
        Ok(PullOutcome::Declined) => {
            output.message("Reload cancelled; keeping local copy");
            Ok(())
        }
        Err(err) => super::report(err),
    }
}
