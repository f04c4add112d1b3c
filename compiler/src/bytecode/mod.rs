// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Translation of the typed AST into a flat, label-based stack-machine
//! instruction list per method.

mod instruction;
mod method_context;
mod program;
mod slot;
mod translator;
mod type_;

pub use self::{
    instruction::{Instruction, STRING_DESCRIPTOR},
    program::{Class, Declaration, MainClass, Method, Program},
    slot::SlotAllocator,
    translator::Translator,
    type_::Type,
};
