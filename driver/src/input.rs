// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::Read, path::Path};

use anyhow::Context;
use log::debug;
use serde::de::DeserializeOwned;
use tiger::ConfigRoot;

pub const CONFIG_FILE_NAME: &str = "tiger.toml";

/// The path that makes the driver read from stdin instead of a file.
pub const STDIN_PATH: &str = "-";

#[must_use]
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Loads the configuration at `path`, or the defaults if there is no such
/// file.
pub fn load_config(path: &Path) -> anyhow::Result<ConfigRoot> {
    if !path.exists() {
        return Ok(ConfigRoot::default());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    ConfigRoot::from_toml(&source)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

/// Reads and decodes a JSON program from `path`.
pub fn read_program<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let source = if is_stdin(path) {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)
            .context("failed to read the program from stdin")?;
        source
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    debug!("Decoding {} bytes of program JSON", source.len());

    serde_json::from_str(&source)
        .with_context(|| format!("{} is not a valid program", path.display()))
}
