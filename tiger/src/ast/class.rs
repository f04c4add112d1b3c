// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use super::{Expression, Statement, Type};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub main_class: MainClass,
    pub classes: Vec<Class>,
}

/// The class holding the entry point. Its single statement is the body of
/// `main`, whose `String[]` parameter is named by `argument`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainClass {
    pub id: String,
    pub argument: String,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub extends: Option<String>,
    pub fields: Vec<Declaration>,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub return_type: Type,
    pub id: String,
    pub formals: Vec<Declaration>,
    pub locals: Vec<Declaration>,
    pub statements: Vec<Statement>,
    pub return_expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub ty: Type,
    pub id: String,
}

impl Declaration {
    #[must_use]
    pub fn new(ty: Type, id: impl Into<String>) -> Self {
        Self {
            ty,
            id: id.into(),
        }
    }
}
