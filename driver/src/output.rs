// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fs::File, io::{BufWriter, Write}, path::{Path, PathBuf}};

use anyhow::Context;
use log::{debug, warn};
use tiger::ConfigSectionOutput;

use crate::input::is_stdin;

/// Picks the file the C output goes to: the explicit override, else the
/// input name with a `.c` extension, else the configured fallback name when
/// the program came from stdin.
#[must_use]
pub fn c_output_path(input: &Path, explicit: Option<PathBuf>, config: &ConfigSectionOutput) -> PathBuf {
    if let Some(explicit) = explicit {
        return explicit;
    }

    if is_stdin(input) {
        return PathBuf::from(&config.fallback_name);
    }

    let derived = input.with_extension("c");
    if let Some(directory) = &config.directory {
        if let Some(file_name) = derived.file_name() {
            return directory.join(file_name);
        }
    }

    derived
}

fn temporary_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".tmp");

    path.with_file_name(file_name)
}

/// Runs `emit` against a temporary file next to `path` and moves it into
/// place once `emit` succeeded. A failed emission leaves no file behind.
pub fn write_atomically(path: &Path, emit: impl FnOnce(&mut dyn Write) -> anyhow::Result<()>) -> anyhow::Result<()> {
    let temporary = temporary_path_for(path);

    let result = write_to(&temporary, emit)
        .and_then(|()| {
            std::fs::rename(&temporary, path)
                .with_context(|| format!("failed to move output into {}", path.display()))
        });

    if result.is_err() && temporary.exists() {
        if let Err(e) = std::fs::remove_file(&temporary) {
            warn!("Could not remove {}: {e}", temporary.display());
        }
    }

    result
}

fn write_to(path: &Path, emit: impl FnOnce(&mut dyn Write) -> anyhow::Result<()>) -> anyhow::Result<()> {
    debug!("Writing to temporary file {}", path.display());

    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    emit(&mut writer)?;
    writer.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
