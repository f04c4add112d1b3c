// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! The control-flow graph IR: classes, vtables and methods whose bodies are
//! basic blocks connected by explicit transfers.
//!
//! Field order within a [`Class`] and entry order within a [`Vtable`] are
//! layout and dispatch offsets, so nothing in this crate ever reorders them.

mod block;
mod class;
mod method;
mod operand;
mod program;
mod statement;
mod type_;

pub use self::{
    block::{Block, Transfer},
    class::{Class, Declaration, Vtable, VtableEntry},
    method::{MainMethod, Method},
    operand::{Operand, Var},
    program::Program,
    statement::{BinaryOperator, Statement},
    type_::Type,
};
