// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! The typed abstract syntax tree, as produced by the semantic analyzer.
//!
//! Every identifier has already been resolved: [`Expression::Identifier`],
//! [`StatementKind::Assign`] and [`StatementKind::AssignArray`] carry an
//! `is_field` flag that the back end trusts without re-deriving it.

mod class;
mod expression;
mod statement;
mod type_;

pub use self::{
    class::{Class, Declaration, MainClass, Method, Program},
    expression::Expression,
    statement::{Statement, StatementKind},
    type_::Type,
};
