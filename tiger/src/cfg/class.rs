// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use super::Type;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,

    /// In layout order.
    pub fields: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vtable {
    pub id: String,

    /// In dispatch-offset order.
    pub entries: Vec<VtableEntry>,
}

/// One slot of a vtable: the method `method` as implemented by `class`,
/// which is either the owner of the vtable or one of its ancestors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VtableEntry {
    pub return_type: Type,
    pub method: String,
    pub class: String,
}

impl VtableEntry {
    #[must_use]
    pub fn new(return_type: Type, method: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            return_type,
            method: method.into(),
            class: class.into(),
        }
    }
}
