// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Checks the guarantees the C emitter relies on before anything is written.

use std::collections::HashSet;

use tiger::{cfg, Label};

use crate::{runtime, CompileError, CompileResult};

pub(super) fn validate_program(program: &cfg::Program) -> CompileResult<()> {
    let mut classes = HashSet::new();
    for class in &program.classes {
        if !classes.insert(class.id.as_str()) {
            return Err(CompileError::DuplicateClass { class: class.id.clone() });
        }

        validate_class(class)?;
    }

    let mut symbols = HashSet::new();
    for method in &program.methods {
        let symbol = method.symbol();
        if symbols.contains(&symbol) {
            return Err(CompileError::DuplicateMethod { symbol });
        }
        symbols.insert(symbol);
    }

    let mut vtables = HashSet::new();
    for vtable in &program.vtables {
        if !vtables.insert(vtable.id.as_str()) {
            return Err(CompileError::DuplicateVtable { vtable: vtable.id.clone() });
        }

        validate_vtable(program, vtable, &symbols)?;
    }

    for method in &program.methods {
        let symbol = method.symbol();
        validate_blocks(&symbol, &method.blocks, method.entry)?;
        validate_allocations(&symbol, &method.blocks, &classes, &vtables)?;
    }

    let main = &program.main_method;
    validate_blocks(runtime::MAIN, &main.blocks, main.entry)?;
    validate_allocations(runtime::MAIN, &main.blocks, &classes, &vtables)?;
    validate_no_receiver(&main.blocks)
}

fn validate_class(class: &cfg::Class) -> CompileResult<()> {
    let mut seen = HashSet::new();

    for field in &class.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(CompileError::DuplicateField {
                class: class.id.clone(),
                field: field.id.clone(),
            });
        }
    }

    Ok(())
}

fn validate_vtable(program: &cfg::Program, vtable: &cfg::Vtable, symbols: &HashSet<String>) -> CompileResult<()> {
    if program.class(&vtable.id).is_none() {
        return Err(CompileError::VtableWithoutClass {
            vtable: vtable.id.clone(),
        });
    }

    for (slot, entry) in vtable.entries.iter().enumerate() {
        let symbol = format!("{}_{}", entry.class, entry.method);

        if !symbols.contains(&symbol) {
            return Err(CompileError::UnknownVtableTarget {
                vtable: vtable.id.clone(),
                slot,
                symbol,
            });
        }
    }

    Ok(())
}

fn validate_blocks(method: &str, blocks: &[cfg::Block], entry: Label) -> CompileResult<()> {
    let mut labels = HashSet::new();

    for block in blocks {
        if !labels.insert(block.label) {
            return Err(CompileError::DuplicateBlock {
                method: method.to_string(),
                label: block.label,
            });
        }
    }

    let targets = blocks.iter().flat_map(|block| block.transfer.targets());

    for label in std::iter::once(entry).chain(targets) {
        if !labels.contains(&label) {
            return Err(CompileError::UnknownBlock {
                method: method.to_string(),
                label,
            });
        }
    }

    Ok(())
}

/// Every allocated object needs a struct to size it and a vtable to point at.
fn validate_allocations(method: &str, blocks: &[cfg::Block], classes: &HashSet<&str>, vtables: &HashSet<&str>) -> CompileResult<()> {
    for statement in blocks.iter().flat_map(|block| &block.statements) {
        let cfg::Statement::NewObject { class, .. } = statement else {
            continue;
        };

        if !classes.contains(class.as_str()) {
            return Err(CompileError::UnknownClass {
                method: method.to_string(),
                class: class.clone(),
            });
        }

        if !vtables.contains(class.as_str()) {
            return Err(CompileError::ClassWithoutVtable {
                method: method.to_string(),
                class: class.clone(),
            });
        }
    }

    Ok(())
}

fn validate_no_receiver(blocks: &[cfg::Block]) -> CompileResult<()> {
    for block in blocks {
        let variables = block.statements.iter()
            .flat_map(|statement| statement.variables())
            .chain(block.transfer.operand().and_then(cfg::Operand::as_var));

        for var in variables {
            if var.is_field {
                return Err(CompileError::FieldInMainMethod { field: var.id.clone() });
            }
        }
    }

    Ok(())
}
