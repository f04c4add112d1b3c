// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A named storage location: either a local/formal, or a field of the
/// receiver `this`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Var {
    pub id: String,

    #[serde(default)]
    pub is_field: bool,
}

impl Var {
    #[must_use]
    pub fn local(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_field: false,
        }
    }

    #[must_use]
    pub fn field(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_field: true,
        }
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_field {
            f.write_str("this->")?;
        }

        f.write_str(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    Int(i32),
    Var(Var),
}

impl Operand {
    #[must_use]
    pub fn local(id: impl Into<String>) -> Self {
        Self::Var(Var::local(id))
    }

    #[must_use]
    pub fn field(id: impl Into<String>) -> Self {
        Self::Var(Var::field(id))
    }

    #[must_use]
    pub const fn as_var(&self) -> Option<&Var> {
        match self {
            Self::Var(var) => Some(var),
            Self::Int(..) => None,
        }
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Var> for Operand {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => value.fmt(f),
            Self::Var(var) => var.fmt(f),
        }
    }
}
