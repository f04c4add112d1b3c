// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::trace;
use tiger::{ast, Label, LabelAllocator};

use crate::{CompileError, CompileResult};

use super::{Declaration, Instruction, SlotAllocator, Type};

/// Everything the translator tracks while lowering a single method. A new
/// context is made for every method, so nothing carries over between them.
#[derive(Debug)]
pub(super) struct MethodContext<'t> {
    class_id: &'t str,
    method_id: &'t str,
    slots: SlotAllocator,
    instructions: Vec<Instruction>,
    labels: &'t mut LabelAllocator,
}

impl<'t> MethodContext<'t> {
    #[must_use]
    pub fn new(class_id: &'t str, method_id: &'t str, labels: &'t mut LabelAllocator) -> Self {
        Self {
            class_id,
            method_id,
            slots: SlotAllocator::new(),
            instructions: Vec::new(),
            labels,
        }
    }

    pub fn emit(&mut self, instruction: Instruction) {
        trace!("{}.{}: {instruction}", self.class_id, self.method_id);
        self.instructions.push(instruction);
    }

    #[must_use]
    pub fn create_label(&mut self) -> Label {
        self.labels.fresh()
    }

    pub fn link_label_here(&mut self, label: Label) {
        self.emit(Instruction::Label(label));
    }

    /// Lowers the declaration of a formal or local and gives it a slot.
    pub fn declare(&mut self, declaration: &ast::Declaration) -> CompileResult<Declaration> {
        if self.slots.allocate(&declaration.id).is_none() {
            return Err(CompileError::DuplicateLocal {
                class: self.class_id.to_string(),
                method: self.method_id.to_string(),
                name: declaration.id.clone(),
            });
        }

        Ok(Declaration {
            ty: Type::from(&declaration.ty),
            id: declaration.id.clone(),
        })
    }

    pub fn slot_of(&self, id: &str) -> CompileResult<usize> {
        self.slots.resolve(id).ok_or_else(|| CompileError::UnresolvedLocal {
            class: self.class_id.to_string(),
            method: self.method_id.to_string(),
            name: id.to_string(),
        })
    }

    pub fn load_local(&mut self, id: &str, ty: &ast::Type) -> CompileResult<()> {
        let slot = self.slot_of(id)?;

        if ty.is_reference() {
            self.emit(Instruction::Aload(slot));
        } else {
            self.emit(Instruction::Iload(slot));
        }

        Ok(())
    }

    pub fn store_local(&mut self, id: &str, ty: &ast::Type) -> CompileResult<()> {
        let slot = self.slot_of(id)?;

        if ty.is_reference() {
            self.emit(Instruction::Astore(slot));
        } else {
            self.emit(Instruction::Istore(slot));
        }

        Ok(())
    }

    /// `<Class>/<field>`, naming a field of the class being translated.
    #[must_use]
    pub fn field_spec(&self, id: &str) -> String {
        format!("{}/{id}", self.class_id)
    }

    #[must_use]
    pub fn unsupported(&self, expression: &'static str) -> CompileError {
        CompileError::UnsupportedExpression {
            class: self.class_id.to_string(),
            method: self.method_id.to_string(),
            expression,
        }
    }

    /// Returns the instructions and the amount of slots used.
    #[must_use]
    pub fn finish(self) -> (Vec<Instruction>, usize) {
        (self.instructions, self.slots.limit())
    }
}
