// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::Serialize;

/// A type as the bytecode sees it. Booleans are integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    Int,
    IntArray,
    Class(String),
}

impl Type {
    /// The type descriptor used in field and method signatures.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            Self::Int => "I".to_string(),
            Self::IntArray => "[I".to_string(),
            Self::Class(id) => format!("L{id};"),
        }
    }

    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::IntArray | Self::Class(..))
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.descriptor())
    }
}
