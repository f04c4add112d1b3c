// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::{Deserialize, Serialize};

use super::{Class, MainMethod, Method, Vtable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub classes: Vec<Class>,
    pub vtables: Vec<Vtable>,
    pub methods: Vec<Method>,
    pub main_method: MainMethod,
}

impl Program {
    #[must_use]
    pub fn class(&self, id: &str) -> Option<&Class> {
        self.classes.iter().find(|class| class.id == id)
    }
}
