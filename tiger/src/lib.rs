// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

//! Trees handed to the back ends by the earlier compiler phases: the typed
//! abstract syntax tree, the control-flow graph IR and the labels both of
//! them use for jump targets.

pub mod ast;
pub mod cfg;
mod config;
mod label;

pub use self::{
    config::{
        ConfigRoot,
        ConfigSectionLog,
        ConfigSectionOutput,
    },
    label::{
        Label,
        LabelAllocator,
    },
};
