// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Int,
    Boolean,
    IntArray,
    Class(String),
}

impl Type {
    /// Whether values of this type are references (and therefore use the
    /// reference forms of loads, stores and returns).
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::IntArray | Self::Class(..))
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Boolean => f.write_str("boolean"),
            Self::IntArray => f.write_str("int[]"),
            Self::Class(id) => f.write_str(id),
        }
    }
}
