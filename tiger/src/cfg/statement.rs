// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use super::{Operand, Var};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum BinaryOperator {
    Add,
    Sub,
    Times,
    And,
    Lt,
    Gt,
}

impl BinaryOperator {
    /// The C operator with the same semantics.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Times => "*",
            Self::And => "&&",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }
}

/// A straight-line statement inside a basic block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Binary {
        dst: Var,
        operator: BinaryOperator,
        left: Operand,
        right: Operand,
    },

    Move {
        dst: Var,
        src: Operand,
    },

    ArraySelect {
        dst: Var,
        array: Operand,
        index: Operand,
    },

    AssignArray {
        array: Var,
        index: Operand,
        value: Operand,
    },

    Length {
        dst: Var,
        array: Operand,
    },

    InvokeVirtual {
        dst: Var,
        receiver: Var,
        method: String,
        arguments: Vec<Operand>,
    },

    NewIntArray {
        dst: Var,
        length: Operand,
    },

    NewObject {
        dst: Var,
        class: String,
    },

    Print(Operand),
}

impl Statement {
    /// Every variable this statement reads or writes, destination first.
    #[must_use]
    pub fn variables(&self) -> Vec<&Var> {
        let (written, read): (Option<&Var>, Vec<&Operand>) = match self {
            Self::Binary { dst, left, right, .. } => (Some(dst), vec![left, right]),
            Self::Move { dst, src } => (Some(dst), vec![src]),
            Self::ArraySelect { dst, array, index } => (Some(dst), vec![array, index]),
            Self::AssignArray { array, index, value } => (Some(array), vec![index, value]),
            Self::Length { dst, array } => (Some(dst), vec![array]),
            Self::InvokeVirtual { dst, receiver, arguments, .. } => {
                let mut variables = vec![dst, receiver];
                variables.extend(arguments.iter().filter_map(Operand::as_var));
                return variables;
            }
            Self::NewIntArray { dst, length } => (Some(dst), vec![length]),
            Self::NewObject { dst, .. } => (Some(dst), Vec::new()),
            Self::Print(operand) => (None, vec![operand]),
        };

        written.into_iter()
            .chain(read.into_iter().filter_map(Operand::as_var))
            .collect()
    }
}
