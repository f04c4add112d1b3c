// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Shared helpers for the integration tests: builders for small typed
//! programs and a reference stack machine that executes the instruction
//! list of a single method.

use std::collections::{HashMap, HashSet};

use log::trace;
use tiger::{ast::{self, Expression, Statement, StatementKind, Type}, Label};
use tiger_compiler::bytecode::{Instruction, STRING_DESCRIPTOR};

/// Executions longer than this are considered to never terminate.
const STEP_LIMIT: usize = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Array(usize),
    Str(String),
    Receiver,
}

impl Value {
    #[must_use]
    pub fn as_int(&self) -> i32 {
        match self {
            Self::Int(value) => *value,
            other => panic!("expected an integer, got {other:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub printed: Vec<String>,
    pub returned: Option<Value>,
    pub fields: HashMap<String, Value>,
    pub steps: usize,
}

/// Interprets an instruction list. Calls and object creation are not
/// supported; everything else behaves like the target machine.
#[derive(Debug)]
pub struct Machine<'i> {
    instructions: &'i [Instruction],
    labels: HashMap<Label, usize>,
    locals: HashMap<usize, Value>,
    fields: HashMap<String, Value>,
    arrays: Vec<Vec<i32>>,
    stack: Vec<Value>,
}

impl<'i> Machine<'i> {
    #[must_use]
    pub fn new(instructions: &'i [Instruction]) -> Self {
        let labels = instructions.iter()
            .enumerate()
            .filter_map(|(index, instruction)| match instruction {
                Instruction::Label(label) => Some((*label, index)),
                _ => None,
            })
            .collect();

        Self {
            instructions,
            labels,
            locals: HashMap::new(),
            fields: HashMap::new(),
            arrays: Vec::new(),
            stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_local(mut self, slot: usize, value: i32) -> Self {
        self.locals.insert(slot, Value::Int(value));
        self
    }

    /// Sets a field of the receiver, named as `Class/field`.
    #[must_use]
    pub fn with_field(mut self, field: &str, value: i32) -> Self {
        self.fields.insert(field.to_string(), Value::Int(value));
        self
    }

    pub fn run(mut self) -> Outcome {
        let mut printed = Vec::new();
        let mut pc = 0;
        let mut steps = 0;

        let returned = loop {
            steps += 1;
            assert!(steps < STEP_LIMIT, "execution did not terminate");

            let Some(instruction) = self.instructions.get(pc) else {
                break None;
            };
            trace!("{pc:>4}: {instruction}  {:?}", self.stack);
            pc += 1;

            match instruction {
                Instruction::Aload(slot) | Instruction::Iload(slot) => {
                    let value = self.locals.get(slot)
                        .unwrap_or_else(|| panic!("slot {slot} read before it was written"))
                        .clone();
                    self.stack.push(value);
                }

                Instruction::Astore(slot) | Instruction::Istore(slot) => {
                    let value = self.pop();
                    self.locals.insert(*slot, value);
                }

                Instruction::This => self.stack.push(Value::Receiver),
                Instruction::LdcInt(value) => self.stack.push(Value::Int(*value)),
                Instruction::LdcString(value) => self.stack.push(Value::Str(value.clone())),
                Instruction::True => self.stack.push(Value::Int(1)),
                Instruction::False => self.stack.push(Value::Int(0)),

                Instruction::GetField { field, .. } => {
                    assert_eq!(self.pop(), Value::Receiver);
                    let value = self.fields.get(field)
                        .unwrap_or_else(|| panic!("field {field} was never set"))
                        .clone();
                    self.stack.push(value);
                }

                Instruction::PutField { field, .. } => {
                    let value = self.pop();
                    assert_eq!(self.pop(), Value::Receiver);
                    self.fields.insert(field.clone(), value);
                }

                Instruction::Iadd => self.arithmetic(i32::wrapping_add),
                Instruction::Isub => self.arithmetic(i32::wrapping_sub),
                Instruction::Imul => self.arithmetic(i32::wrapping_mul),
                Instruction::Iand => self.arithmetic(|a, b| a & b),

                Instruction::Iaload => {
                    let index = self.pop_int();
                    let array = self.pop_array();
                    let value = self.arrays[array][index_of(index)];
                    self.stack.push(Value::Int(value));
                }

                Instruction::Iastore => {
                    let value = self.pop_int();
                    let index = self.pop_int();
                    let array = self.pop_array();
                    self.arrays[array][index_of(index)] = value;
                }

                Instruction::ArrayLength => {
                    let array = self.pop_array();
                    let length = i32::try_from(self.arrays[array].len())
                        .unwrap_or_else(|_| panic!("array {array} is too long"));
                    self.stack.push(Value::Int(length));
                }

                Instruction::NewArray => {
                    let length = self.pop_int();
                    self.arrays.push(vec![0; index_of(length)]);
                    self.stack.push(Value::Array(self.arrays.len() - 1));
                }

                Instruction::IfIcmpLt(label) => {
                    let right = self.pop_int();
                    let left = self.pop_int();
                    if left < right {
                        pc = self.target(*label);
                    }
                }

                Instruction::IfIcmpGt(label) => {
                    let right = self.pop_int();
                    let left = self.pop_int();
                    if left > right {
                        pc = self.target(*label);
                    }
                }

                Instruction::Ifeq(label) => {
                    if self.pop_int() == 0 {
                        pc = self.target(*label);
                    }
                }

                Instruction::Ifne(label) => {
                    if self.pop_int() != 0 {
                        pc = self.target(*label);
                    }
                }

                Instruction::Goto(label) => pc = self.target(*label),

                Instruction::Label(..) | Instruction::Line(..) => (),

                Instruction::Print(descriptor) => {
                    let value = self.pop();
                    let text = match (&value, descriptor.as_str()) {
                        (Value::Str(value), STRING_DESCRIPTOR) => value.clone(),
                        (Value::Int(value), "I") => value.to_string(),
                        _ => panic!("cannot print {value:?} as {descriptor}"),
                    };
                    printed.push(text);
                }

                Instruction::Ireturn | Instruction::Areturn => break Some(self.pop()),
                Instruction::Return => break None,

                Instruction::New(..) | Instruction::InvokeVirtual { .. } => {
                    panic!("the reference machine does not support `{instruction}`");
                }
            }
        };

        assert!(self.stack.is_empty(), "operand stack not empty at exit: {:?}", self.stack);

        Outcome {
            printed,
            returned,
            fields: self.fields,
            steps,
        }
    }

    fn target(&self, label: Label) -> usize {
        *self.labels.get(&label)
            .unwrap_or_else(|| panic!("jump to undefined label {label}"))
    }

    fn pop(&mut self) -> Value {
        self.stack.pop().unwrap_or_else(|| panic!("operand stack underflow"))
    }

    fn pop_int(&mut self) -> i32 {
        self.pop().as_int()
    }

    fn pop_array(&mut self) -> usize {
        match self.pop() {
            Value::Array(array) => array,
            other => panic!("expected an array, got {other:?}"),
        }
    }

    fn arithmetic(&mut self, operation: impl FnOnce(i32, i32) -> i32) {
        let right = self.pop_int();
        let left = self.pop_int();
        self.stack.push(Value::Int(operation(left, right)));
    }
}

fn index_of(value: i32) -> usize {
    usize::try_from(value).unwrap_or_else(|_| panic!("negative index or length {value}"))
}

/// Checks that every label is placed exactly once and that every jump goes
/// to a placed label.
pub fn assert_labels_well_formed(instructions: &[Instruction]) {
    let mut placed = HashSet::new();
    for instruction in instructions {
        if let Instruction::Label(label) = instruction {
            assert!(placed.insert(*label), "label {label} placed twice");
        }
    }

    for instruction in instructions {
        if let Some(target) = instruction.jump_target() {
            assert!(placed.contains(&target), "jump to unplaced label {target}");
        }
    }
}

#[must_use]
pub fn int(id: &str) -> Expression {
    Expression::local(id, Type::Int)
}

#[must_use]
pub fn boolean(id: &str) -> Expression {
    Expression::local(id, Type::Boolean)
}

#[must_use]
pub fn assign(line: usize, id: &str, ty: Type, value: Expression) -> Statement {
    Statement::new(line, StatementKind::Assign {
        id: id.into(),
        ty,
        is_field: false,
        value,
    })
}

#[must_use]
pub fn print(line: usize, expression: Expression) -> Statement {
    Statement::new(line, StatementKind::Print(expression))
}

#[must_use]
pub fn if_else(line: usize, condition: Expression, then: Statement, otherwise: Statement) -> Statement {
    Statement::new(line, StatementKind::If {
        condition,
        then: Box::new(then),
        otherwise: Box::new(otherwise),
    })
}

#[must_use]
pub fn while_loop(line: usize, condition: Expression, body: Vec<Statement>) -> Statement {
    Statement::new(line, StatementKind::While {
        condition,
        body: Box::new(Statement::new(line, StatementKind::Block(body))),
    })
}

/// A method whose formals and locals are declared in order, so the `n`th
/// declaration lives in slot `n + 1`.
#[must_use]
pub fn method(
    return_type: Type,
    formals: &[(&str, Type)],
    locals: &[(&str, Type)],
    statements: Vec<Statement>,
    return_expression: Expression,
) -> ast::Method {
    fn declare(declarations: &[(&str, Type)]) -> Vec<ast::Declaration> {
        declarations.iter()
            .map(|(id, ty)| ast::Declaration::new(ty.clone(), *id))
            .collect()
    }

    ast::Method {
        return_type,
        id: "run".into(),
        formals: declare(formals),
        locals: declare(locals),
        statements,
        return_expression,
    }
}

/// A program with an empty main class and one class `Test` holding the
/// given methods.
#[must_use]
pub fn program(fields: Vec<ast::Declaration>, methods: Vec<ast::Method>) -> ast::Program {
    ast::Program {
        main_class: ast::MainClass {
            id: "Main".into(),
            argument: "args".into(),
            body: Statement::new(1, StatementKind::Block(Vec::new())),
        },
        classes: vec![ast::Class {
            id: "Test".into(),
            extends: None,
            fields,
            methods,
        }],
    }
}

/// Decodes a program written as JSON.
#[must_use]
pub fn from_json<T: serde::de::DeserializeOwned>(source: &str) -> T {
    serde_json::from_str(source).unwrap_or_else(|e| panic!("invalid test program: {e}"))
}
