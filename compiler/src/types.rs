// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Maps source-level types onto the types of both target models.

use tiger::{ast, cfg};

use crate::bytecode;

/// The C spelling of a CFG type. Booleans have no C representation of their
/// own and are plain `int`s.
#[must_use]
pub fn c_type(ty: &cfg::Type) -> String {
    match ty {
        cfg::Type::Int => "int".to_string(),
        cfg::Type::Boolean => "int".to_string(),
        cfg::Type::IntArray => "int *".to_string(),
        cfg::Type::Class(id) => format!("struct {id} *"),
    }
}

/// Declares `id` with type `ty`, e.g. `int x` or `struct A *a`.
#[must_use]
pub fn c_declaration(ty: &cfg::Type, id: &str) -> String {
    let ty = c_type(ty);

    if ty.ends_with('*') {
        format!("{ty}{id}")
    } else {
        format!("{ty} {id}")
    }
}

impl From<&ast::Type> for bytecode::Type {
    fn from(value: &ast::Type) -> Self {
        match value {
            ast::Type::Int => Self::Int,
            ast::Type::Boolean => Self::Int,
            ast::Type::IntArray => Self::IntArray,
            ast::Type::Class(id) => Self::Class(id.clone()),
        }
    }
}
