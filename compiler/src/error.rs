// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use thiserror::Error;

use tiger::Label;

type IoError = std::io::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// A failure while emitting code.
///
/// Apart from [`CompileError::Io`], every variant means the input tree broke
/// a guarantee of the phase that built it. None of them are recoverable for
/// the current compilation unit.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error while writing output: {0}")]
    Io(#[from] IoError),

    #[error("unresolved local `{name}` in method `{class}.{method}`")]
    UnresolvedLocal { class: String, method: String, name: String },

    #[error("`{name}` is declared twice in method `{class}.{method}`")]
    DuplicateLocal { class: String, method: String, name: String },

    #[error("{expression} is not supported by the bytecode back end (in `{class}.{method}`)")]
    UnsupportedExpression { class: String, method: String, expression: &'static str },

    #[error("field `{field}` is declared twice in class `{class}`")]
    DuplicateField { class: String, field: String },

    #[error("class `{class}` is defined twice")]
    DuplicateClass { class: String },

    #[error("vtable `{vtable}` is defined twice")]
    DuplicateVtable { vtable: String },

    #[error("method `{symbol}` is defined twice")]
    DuplicateMethod { symbol: String },

    #[error("method `{method}` creates an object of class `{class}`, which does not exist")]
    UnknownClass { method: String, class: String },

    #[error("method `{method}` creates an object of class `{class}`, which has no vtable")]
    ClassWithoutVtable { method: String, class: String },

    #[error("the main method accesses field `{field}`, but it has no receiver")]
    FieldInMainMethod { field: String },

    #[error("vtable `{vtable}` does not belong to any class")]
    VtableWithoutClass { vtable: String },

    #[error("slot {slot} of vtable `{vtable}` binds `{symbol}`, which is not a method of the program")]
    UnknownVtableTarget { vtable: String, slot: usize, symbol: String },

    #[error("block {label} appears twice in method `{method}`")]
    DuplicateBlock { method: String, label: Label },

    #[error("method `{method}` refers to block {label}, which does not exist")]
    UnknownBlock { method: String, label: Label },
}
