// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::PathBuf;

use serde::Deserialize;

/// Name used for the C output when there is neither an explicit output path
/// nor a source file to derive one from.
pub const DEFAULT_FALLBACK_NAME: &str = "a.c.c";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub output: ConfigSectionOutput,
}

impl ConfigRoot {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionOutput {
    pub fallback_name: String,

    /// Directory for output files whose name is derived from the input.
    pub directory: Option<PathBuf>,
}

impl Default for ConfigSectionOutput {
    fn default() -> Self {
        Self {
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
            directory: None,
        }
    }
}
