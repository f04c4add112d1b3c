// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use super::{Expression, Type};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// The line in the source file this statement originates from.
    pub line: usize,
    pub kind: StatementKind,
}

impl Statement {
    #[must_use]
    pub const fn new(line: usize, kind: StatementKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    Assign {
        id: String,
        ty: Type,
        is_field: bool,
        value: Expression,
    },

    /// `id[index] = value`, where `id` always names an `int[]`.
    AssignArray {
        id: String,
        is_field: bool,
        index: Expression,
        value: Expression,
    },

    Block(Vec<Statement>),

    If {
        condition: Expression,
        then: Box<Statement>,
        otherwise: Box<Statement>,
    },

    Print(Expression),

    While {
        condition: Expression,
        body: Box<Statement>,
    },
}
