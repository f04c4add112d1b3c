// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use crate::Label;

use super::{Block, Declaration, Type};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub return_type: Type,
    pub class_id: String,
    pub id: String,

    /// Includes the receiver `this` as the first formal.
    pub formals: Vec<Declaration>,
    pub locals: Vec<Declaration>,
    pub blocks: Vec<Block>,
    pub entry: Label,
}

impl Method {
    /// The symbol this method is emitted under.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}_{}", self.class_id, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMethod {
    pub locals: Vec<Declaration>,
    pub blocks: Vec<Block>,
    pub entry: Label,
}
