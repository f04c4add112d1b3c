// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use super::Type;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Add {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Logical and. Both operands are always evaluated.
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    ArraySelect {
        array: Box<Expression>,
        index: Box<Expression>,
    },

    /// A virtual call. `class` is the static type of the receiver, the
    /// return and parameter types are those of the resolved method.
    Call {
        receiver: Box<Expression>,
        class: String,
        method: String,
        arguments: Vec<Expression>,
        return_type: Type,
        parameter_types: Vec<Type>,
    },

    Eq {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    False,

    Ge {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    Gt {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    Identifier {
        id: String,
        ty: Type,
        is_field: bool,
    },

    Le {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    Length {
        array: Box<Expression>,
    },

    Lt {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    NewIntArray {
        length: Box<Expression>,
    },

    NewObject {
        class: String,
    },

    Not {
        operand: Box<Expression>,
    },

    Number(i32),

    StringLiteral(String),

    Sub {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    This,

    Times {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    True,
}

impl Expression {
    #[must_use]
    pub fn local(id: impl Into<String>, ty: Type) -> Self {
        Self::Identifier {
            id: id.into(),
            ty,
            is_field: false,
        }
    }

    #[must_use]
    pub fn field(id: impl Into<String>, ty: Type) -> Self {
        Self::Identifier {
            id: id.into(),
            ty,
            is_field: true,
        }
    }

    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::Add { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn sub(left: Self, right: Self) -> Self {
        Self::Sub { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn times(left: Self, right: Self) -> Self {
        Self::Times { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn lt(left: Self, right: Self) -> Self {
        Self::Lt { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn gt(left: Self, right: Self) -> Self {
        Self::Gt { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn not(operand: Self) -> Self {
        Self::Not { operand: Box::new(operand) }
    }
}
