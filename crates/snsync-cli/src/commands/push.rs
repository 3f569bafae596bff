//! Push command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use snsync_core::sync::{self, PushOutcome};
use snsync_core::{Config, HttpTransport, Settings};

use crate::output::Output;
use crate::prompt::TerminalPrompt;

/// Push the file's field content to the remote record
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

    let result = sync::push(&mut buffer, &transport, &mut settings, &prompt);

    // The credential scrub mutates the buffer even when the push itself
    // fails or is declined; the scrubbed text must reach disk either way.
    if buffer != original {
        fs::write(file, &buffer).with_context(|| format!("Failed to write {:?}", file))?;
    }

    match result {
        Ok(PushOutcome::Pushed { overwrote_conflict }) => {
            if overwrote_conflict {
                output.success("Pushed; diverged server copy overwritten");
            } else {
                output.success("Pushed");
            }
            Ok(())
        }
        Ok(PushOutcome::Declined) => {
            output.message("Push cancelled; server copy left untouched");
            Ok(())
        }
        Err(err) => super::report(err),
    }
}
