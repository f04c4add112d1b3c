// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Prints the CFG IR as a single C translation unit.
//!
//! Every object starts with a pointer to the vtable of its class, so a call
//! can dispatch through `obj->vptr` whatever the static type of `obj` is.
//! Vtables are initialized statically with the symbols of the methods that
//! implement each slot.
//!
//! The output is C99. Every vtable slot carries a full prototype, in which
//! object parameters are `void *` so an inherited slot accepts instances of
//! subclasses.

use std::{collections::HashMap, io::Write};

use log::debug;
use tiger::{cfg::{self, Block, Statement, Transfer}, Label};

use crate::{c_declaration, c_type, runtime, CompileError, CompileResult};

use super::validate::validate_program;

/// Emits `program` into a string.
pub fn emit_c(program: &cfg::Program) -> CompileResult<String> {
    let mut emitter = CEmitter::new(Vec::new());
    emitter.emit_program(program)?;

    Ok(String::from_utf8_lossy(&emitter.into_inner()).into_owned())
}

#[derive(Debug)]
pub struct CEmitter<W: Write> {
    writer: W,
}

impl<W: Write> CEmitter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Validates and emits the whole program. Nothing is written when the
    /// program is inconsistent.
    pub fn emit_program(&mut self, program: &cfg::Program) -> CompileResult<()> {
        validate_program(program)?;

        writeln!(self.writer, "// This is automatically generated by the Tiger compiler.")?;
        writeln!(self.writer, "// Do NOT modify!")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "// Control-flow Graph")?;
        writeln!(self.writer)?;

        self.emit_runtime_prototypes()?;

        writeln!(self.writer, "// structures")?;
        for class in &program.classes {
            self.emit_class(class)?;
        }
        writeln!(self.writer)?;

        let methods: HashMap<String, &cfg::Method> = program.methods.iter()
            .map(|method| (method.symbol(), method))
            .collect();

        writeln!(self.writer, "// vtables structures")?;
        for vtable in &program.vtables {
            self.emit_vtable_structure(vtable, &methods)?;
        }

        writeln!(self.writer, "// vtables declarations")?;
        for vtable in &program.vtables {
            writeln!(self.writer, "struct {id}_vtable {id}_vtable_;", id = vtable.id)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "// methods")?;
        for method in &program.methods {
            self.emit_method(method)?;
        }

        writeln!(self.writer, "// vtables")?;
        for vtable in &program.vtables {
            self.emit_vtable_instance(vtable, &methods)?;
        }

        writeln!(self.writer, "// main method")?;
        self.emit_main_method(&program.main_method)?;

        self.writer.flush()?;
        Ok(())
    }

    fn emit_runtime_prototypes(&mut self) -> CompileResult<()> {
        writeln!(self.writer, "// runtime")?;
        writeln!(self.writer, "void *{} (void *vtable, int size);", runtime::OBJECT_ALLOCATOR)?;
        writeln!(self.writer, "int *{} (int length);", runtime::ARRAY_ALLOCATOR)?;
        writeln!(self.writer, "int {} (int i);", runtime::PRINT)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn emit_class(&mut self, class: &cfg::Class) -> CompileResult<()> {
        debug!("Emitting structure of class `{}` with {} fields", class.id, class.fields.len());

        writeln!(self.writer, "struct {}", class.id)?;
        writeln!(self.writer, "{{")?;
        writeln!(self.writer, "  struct {}_vtable *vptr;", class.id)?;

        for field in &class.fields {
            writeln!(self.writer, "  {};", c_declaration(&field.ty, &field.id))?;
        }

        writeln!(self.writer, "}};")?;
        Ok(())
    }

    fn emit_vtable_structure(&mut self, vtable: &cfg::Vtable, methods: &HashMap<String, &cfg::Method>) -> CompileResult<()> {
        writeln!(self.writer, "struct {}_vtable", vtable.id)?;
        writeln!(self.writer, "{{")?;

        for (slot, entry) in vtable.entries.iter().enumerate() {
            let target = slot_target(vtable, slot, methods)?;
            let pointer = format!("(*{})({})", entry.method, slot_parameters(target));
            writeln!(self.writer, "  {};", c_declaration(&entry.return_type, &pointer))?;
        }

        writeln!(self.writer, "}};")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn emit_vtable_instance(&mut self, vtable: &cfg::Vtable, methods: &HashMap<String, &cfg::Method>) -> CompileResult<()> {
        writeln!(self.writer, "struct {id}_vtable {id}_vtable_ =", id = vtable.id)?;
        writeln!(self.writer, "{{")?;

        for (slot, entry) in vtable.entries.iter().enumerate() {
            let target = slot_target(vtable, slot, methods)?;
            let pointer = format!("(*)({})", slot_parameters(target));
            writeln!(self.writer, "  ({}){},", c_declaration(&entry.return_type, &pointer), target.symbol())?;
        }

        writeln!(self.writer, "}};")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn emit_method(&mut self, method: &cfg::Method) -> CompileResult<()> {
        debug!("Emitting method `{}` with {} blocks", method.symbol(), method.blocks.len());

        let formals: Vec<String> = method.formals.iter()
            .map(|formal| c_declaration(&formal.ty, &formal.id))
            .collect();

        let signature = format!("{}({})", method.symbol(), formals.join(", "));
        writeln!(self.writer, "{}", c_declaration(&method.return_type, &signature))?;
        self.emit_body(&method.locals, &method.blocks, method.entry)
    }

    fn emit_main_method(&mut self, main: &cfg::MainMethod) -> CompileResult<()> {
        debug!("Emitting main method with {} blocks", main.blocks.len());

        writeln!(self.writer, "int {} ()", runtime::MAIN)?;
        self.emit_body(&main.locals, &main.blocks, main.entry)
    }

    fn emit_body(&mut self, locals: &[cfg::Declaration], blocks: &[Block], entry: Label) -> CompileResult<()> {
        writeln!(self.writer, "{{")?;

        for local in locals {
            writeln!(self.writer, "  {};", c_declaration(&local.ty, &local.id))?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "  goto {entry};")?;
        writeln!(self.writer)?;

        for block in blocks {
            self.emit_block(block)?;
        }

        writeln!(self.writer, "}}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn emit_block(&mut self, block: &Block) -> CompileResult<()> {
        writeln!(self.writer, "{}:", block.label)?;

        for statement in &block.statements {
            self.emit_statement(statement)?;
        }

        self.emit_transfer(&block.transfer)
    }

    fn emit_statement(&mut self, statement: &Statement) -> CompileResult<()> {
        match statement {
            Statement::Binary { dst, operator, left, right } => {
                writeln!(self.writer, "  {dst} = {left} {} {right};", operator.symbol())?;
            }

            Statement::Move { dst, src } => {
                writeln!(self.writer, "  {dst} = {src};")?;
            }

            Statement::ArraySelect { dst, array, index } => {
                writeln!(self.writer, "  {dst} = {array}[{} + {index}];", runtime::ARRAY_HEADER_WORDS)?;
            }

            Statement::AssignArray { array, index, value } => {
                writeln!(self.writer, "  {array}[{} + {index}] = {value};", runtime::ARRAY_HEADER_WORDS)?;
            }

            Statement::Length { dst, array } => {
                writeln!(self.writer, "  {dst} = {array}[{}];", runtime::ARRAY_LENGTH_WORD)?;
            }

            Statement::InvokeVirtual { dst, receiver, method, arguments } => {
                write!(self.writer, "  {dst} = {receiver}->vptr->{method}({receiver}")?;
                for argument in arguments {
                    write!(self.writer, ", {argument}")?;
                }
                writeln!(self.writer, ");")?;
            }

            Statement::NewIntArray { dst, length } => {
                writeln!(self.writer, "  {dst} = {}({length});", runtime::ARRAY_ALLOCATOR)?;
            }

            Statement::NewObject { dst, class } => {
                writeln!(
                    self.writer,
                    "  {dst} = ((struct {class}*)({} (&{class}_vtable_, sizeof(struct {class}))));",
                    runtime::OBJECT_ALLOCATOR,
                )?;
            }

            Statement::Print(operand) => {
                writeln!(self.writer, "  {} ({operand});", runtime::PRINT)?;
            }
        }

        Ok(())
    }

    fn emit_transfer(&mut self, transfer: &Transfer) -> CompileResult<()> {
        match transfer {
            Transfer::Goto(label) => {
                writeln!(self.writer, "  goto {label};")?;
            }

            Transfer::If { condition, then, otherwise } => {
                writeln!(self.writer, "  if ({condition})")?;
                writeln!(self.writer, "    goto {then};")?;
                writeln!(self.writer, "  else")?;
                writeln!(self.writer, "    goto {otherwise};")?;
            }

            Transfer::Return(operand) => {
                writeln!(self.writer, "  return {operand};")?;
            }
        }

        Ok(())
    }
}

fn slot_target<'p>(
    vtable: &cfg::Vtable,
    slot: usize,
    methods: &HashMap<String, &'p cfg::Method>,
) -> CompileResult<&'p cfg::Method> {
    let entry = &vtable.entries[slot];
    let symbol = format!("{}_{}", entry.class, entry.method);

    match methods.get(&symbol) {
        Some(method) => Ok(*method),
        None => Err(CompileError::UnknownVtableTarget {
            vtable: vtable.id.clone(),
            slot,
            symbol,
        }),
    }
}

/// The parameter list of a vtable slot bound to `method`.
fn slot_parameters(method: &cfg::Method) -> String {
    if method.formals.is_empty() {
        return "void".to_string();
    }

    let parameters: Vec<String> = method.formals.iter()
        .map(|formal| match &formal.ty {
            cfg::Type::Class(..) => "void *".to_string(),
            ty => c_type(ty),
        })
        .collect();

    parameters.join(", ")
}
