// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::Serialize;

use super::{Instruction, Type};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub main_class: MainClass,
    pub classes: Vec<Class>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainClass {
    pub id: String,
    pub argument: String,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    pub id: String,
    pub extends: Option<String>,
    pub fields: Vec<Declaration>,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub return_type: Type,
    pub id: String,
    pub class_id: String,
    pub formals: Vec<Declaration>,
    pub locals: Vec<Declaration>,
    pub instructions: Vec<Instruction>,

    /// The amount of local slots the method needs, the receiver included.
    pub local_limit: usize,
}

impl Method {
    /// The method descriptor, e.g. `(I[I)I`.
    #[must_use]
    pub fn descriptor(&self) -> String {
        let parameters: String = self.formals.iter()
            .map(|formal| formal.ty.descriptor())
            .collect();

        format!("({parameters}){}", self.return_type.descriptor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub ty: Type,
    pub id: String,
}

/// The class every class without an explicit superclass extends.
const DEFAULT_SUPERCLASS: &str = "java/lang/Object";

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.main_class.fmt(f)?;

        for class in &self.classes {
            f.write_str("\n")?;
            class.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for MainClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, ".class public {}", self.id)?;
        writeln!(f, ".super {DEFAULT_SUPERCLASS}")?;
        writeln!(f, ".method public static main([Ljava/lang/String;)V")?;
        write_instructions(f, &self.instructions)?;
        writeln!(f, ".end method")
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, ".class public {}", self.id)?;
        writeln!(f, ".super {}", self.extends.as_deref().unwrap_or(DEFAULT_SUPERCLASS))?;

        for field in &self.fields {
            writeln!(f, ".field public {} {}", field.id, field.ty)?;
        }

        for method in &self.methods {
            method.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, ".method public {}{}", self.id, self.descriptor())?;
        writeln!(f, ".limit locals {}", self.local_limit)?;
        write_instructions(f, &self.instructions)?;
        writeln!(f, ".end method")
    }
}

fn write_instructions(f: &mut std::fmt::Formatter<'_>, instructions: &[Instruction]) -> std::fmt::Result {
    for instruction in instructions {
        if let Instruction::Label(..) = instruction {
            writeln!(f, "{instruction}")?;
        } else {
            writeln!(f, "    {instruction}")?;
        }
    }

    Ok(())
}
