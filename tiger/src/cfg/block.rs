// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use crate::Label;

use super::{Operand, Statement};

/// A label, straight-line statements and exactly one terminating transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub label: Label,
    pub statements: Vec<Statement>,
    pub transfer: Transfer,
}

impl Block {
    #[must_use]
    pub fn new(label: Label, statements: Vec<Statement>, transfer: Transfer) -> Self {
        Self {
            label,
            statements,
            transfer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transfer {
    Goto(Label),

    If {
        condition: Operand,
        then: Label,
        otherwise: Label,
    },

    Return(Operand),
}

impl Transfer {
    /// The labels this transfer may jump to.
    #[must_use]
    pub fn targets(&self) -> Vec<Label> {
        match self {
            Self::Goto(label) => vec![*label],
            Self::If { then, otherwise, .. } => vec![*then, *otherwise],
            Self::Return(..) => Vec::new(),
        }
    }

    /// The operand this transfer reads, if any.
    #[must_use]
    pub const fn operand(&self) -> Option<&Operand> {
        match self {
            Self::Goto(..) => None,
            Self::If { condition, .. } => Some(condition),
            Self::Return(operand) => Some(operand),
        }
    }
}
