// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

//! The two back ends of the compiler: the control-flow graph is printed as
//! portable C, and the typed AST is translated to stack-machine bytecode.

pub mod bytecode;
mod c;
mod error;
pub mod runtime;
mod types;

pub use self::{
    c::{
        emit_c,
        CEmitter,
    },
    error::{
        CompileError,
        CompileResult,
    },
    types::{
        c_declaration,
        c_type,
    },
};
