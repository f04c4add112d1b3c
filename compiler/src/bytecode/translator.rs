// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! The translator takes a typed [`ast::Program`] and lowers every method to
//! a flat instruction list. Structured control flow becomes labels and
//! branches, booleans produced by comparisons become the three-label
//! pattern.

use log::debug;
use tiger::{ast::{self, Expression, Statement, StatementKind}, Label, LabelAllocator};

use crate::CompileResult;

use super::{method_context::MethodContext, Class, Declaration, Instruction, MainClass, Method, Program, Type, STRING_DESCRIPTOR};

/// The name the entry point of the main class is translated under.
const MAIN_METHOD: &str = "main";

#[derive(Debug, Default)]
pub struct Translator {
    labels: LabelAllocator,
}

impl Translator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_labels(LabelAllocator::new())
    }

    /// Creates a translator that takes its labels from `labels`.
    #[must_use]
    pub fn with_labels(labels: LabelAllocator) -> Self {
        Self {
            labels,
        }
    }

    #[must_use]
    pub fn into_labels(self) -> LabelAllocator {
        self.labels
    }

    pub fn translate_program(&mut self, program: &ast::Program) -> CompileResult<Program> {
        let main_class = self.translate_main_class(&program.main_class)?;

        let classes = program.classes.iter()
            .map(|class| self.translate_class(class))
            .collect::<CompileResult<Vec<_>>>()?;

        debug!("Translated {} classes using {} labels", classes.len() + 1, self.labels.issued());

        Ok(Program {
            main_class,
            classes,
        })
    }

    pub fn translate_main_class(&mut self, main_class: &ast::MainClass) -> CompileResult<MainClass> {
        debug!("Translating main class `{}`", main_class.id);

        let mut ctx = MethodContext::new(&main_class.id, MAIN_METHOD, &mut self.labels);
        main_class.body.translate(&mut ctx)?;
        ctx.emit(Instruction::Return);

        let (instructions, _) = ctx.finish();

        Ok(MainClass {
            id: main_class.id.clone(),
            argument: main_class.argument.clone(),
            instructions,
        })
    }

    pub fn translate_class(&mut self, class: &ast::Class) -> CompileResult<Class> {
        debug!("Translating class `{}`", class.id);

        let fields = class.fields.iter()
            .map(|field| Declaration {
                ty: Type::from(&field.ty),
                id: field.id.clone(),
            })
            .collect();

        let methods = class.methods.iter()
            .map(|method| self.translate_method(&class.id, method))
            .collect::<CompileResult<Vec<_>>>()?;

        Ok(Class {
            id: class.id.clone(),
            extends: class.extends.clone(),
            fields,
            methods,
        })
    }

    pub fn translate_method(&mut self, class_id: &str, method: &ast::Method) -> CompileResult<Method> {
        debug!("Translating method `{class_id}.{}`", method.id);

        let mut ctx = MethodContext::new(class_id, &method.id, &mut self.labels);

        let formals = method.formals.iter()
            .map(|formal| ctx.declare(formal))
            .collect::<CompileResult<Vec<_>>>()?;

        let locals = method.locals.iter()
            .map(|local| ctx.declare(local))
            .collect::<CompileResult<Vec<_>>>()?;

        for statement in &method.statements {
            statement.translate(&mut ctx)?;
        }

        method.return_expression.translate(&mut ctx)?;

        if method.return_type.is_reference() {
            ctx.emit(Instruction::Areturn);
        } else {
            ctx.emit(Instruction::Ireturn);
        }

        let (instructions, local_limit) = ctx.finish();

        Ok(Method {
            return_type: Type::from(&method.return_type),
            id: method.id.clone(),
            class_id: class_id.to_string(),
            formals,
            locals,
            instructions,
            local_limit,
        })
    }
}

trait TranslateStatement {
    fn translate(&self, ctx: &mut MethodContext<'_>) -> CompileResult<()>;
}

impl TranslateStatement for Statement {
    fn translate(&self, ctx: &mut MethodContext<'_>) -> CompileResult<()> {
        match &self.kind {
            StatementKind::Assign { id, ty, is_field, value } => {
                ctx.emit(Instruction::Line(self.line));

                if *is_field {
                    let field = ctx.field_spec(id);

                    ctx.emit(Instruction::This);
                    value.translate(ctx)?;
                    ctx.emit(Instruction::PutField {
                        field,
                        descriptor: Type::from(ty).descriptor(),
                    });
                } else {
                    value.translate(ctx)?;
                    ctx.store_local(id, ty)?;
                }
            }

            StatementKind::AssignArray { id, is_field, index, value } => {
                ctx.emit(Instruction::Line(self.line));

                if *is_field {
                    let field = ctx.field_spec(id);

                    ctx.emit(Instruction::This);
                    ctx.emit(Instruction::GetField {
                        field,
                        descriptor: Type::IntArray.descriptor(),
                    });
                } else {
                    let slot = ctx.slot_of(id)?;
                    ctx.emit(Instruction::Aload(slot));
                }

                index.translate(ctx)?;
                value.translate(ctx)?;
                ctx.emit(Instruction::Iastore);
            }

            StatementKind::Block(statements) => {
                for statement in statements {
                    statement.translate(ctx)?;
                }
            }

            StatementKind::If { condition, then, otherwise } => {
                ctx.emit(Instruction::Line(self.line));

                let then_label = ctx.create_label();
                let else_label = ctx.create_label();
                let end_label = ctx.create_label();

                condition.translate(ctx)?;
                ctx.emit(Instruction::Ifne(then_label));

                ctx.link_label_here(else_label);
                otherwise.translate(ctx)?;
                ctx.emit(Instruction::Goto(end_label));

                ctx.link_label_here(then_label);
                then.translate(ctx)?;
                ctx.emit(Instruction::Goto(end_label));

                ctx.link_label_here(end_label);
            }

            StatementKind::Print(expression) => {
                ctx.emit(Instruction::Line(self.line));
                expression.translate(ctx)?;

                let descriptor = match expression {
                    Expression::StringLiteral(..) => STRING_DESCRIPTOR.to_string(),
                    _ => Type::Int.descriptor(),
                };
                ctx.emit(Instruction::Print(descriptor));
            }

            StatementKind::While { condition, body } => {
                ctx.emit(Instruction::Line(self.line));

                let head_label = ctx.create_label();
                let end_label = ctx.create_label();

                ctx.link_label_here(head_label);
                condition.translate(ctx)?;
                ctx.emit(Instruction::Ifeq(end_label));

                body.translate(ctx)?;
                ctx.emit(Instruction::Goto(head_label));

                ctx.link_label_here(end_label);
            }
        }

        Ok(())
    }
}

trait TranslateExpression {
    fn translate(&self, ctx: &mut MethodContext<'_>) -> CompileResult<()>;
}

impl TranslateExpression for Expression {
    fn translate(&self, ctx: &mut MethodContext<'_>) -> CompileResult<()> {
        match self {
            Expression::Add { left, right } => translate_binary(ctx, left, right, Instruction::Iadd)?,
            Expression::And { left, right } => translate_binary(ctx, left, right, Instruction::Iand)?,
            Expression::Sub { left, right } => translate_binary(ctx, left, right, Instruction::Isub)?,
            Expression::Times { left, right } => translate_binary(ctx, left, right, Instruction::Imul)?,

            Expression::ArraySelect { array, index } => {
                translate_binary(ctx, array, index, Instruction::Iaload)?;
            }

            Expression::Call { receiver, class, method, arguments, return_type, parameter_types } => {
                receiver.translate(ctx)?;

                for argument in arguments {
                    argument.translate(ctx)?;
                }

                ctx.emit(Instruction::InvokeVirtual {
                    class: class.clone(),
                    method: method.clone(),
                    parameters: parameter_types.iter().map(Type::from).collect(),
                    return_type: Type::from(return_type),
                });
            }

            Expression::Eq { .. } => return Err(ctx.unsupported("equality (`==`)")),
            Expression::Ge { .. } => return Err(ctx.unsupported("greater-or-equal (`>=`)")),
            Expression::Le { .. } => return Err(ctx.unsupported("less-or-equal (`<=`)")),

            Expression::False => ctx.emit(Instruction::False),
            Expression::True => ctx.emit(Instruction::True),

            Expression::Identifier { id, ty, is_field } => {
                if *is_field {
                    let field = ctx.field_spec(id);

                    ctx.emit(Instruction::This);
                    ctx.emit(Instruction::GetField {
                        field,
                        descriptor: Type::from(ty).descriptor(),
                    });
                } else {
                    ctx.load_local(id, ty)?;
                }
            }

            Expression::Length { array } => {
                array.translate(ctx)?;
                ctx.emit(Instruction::ArrayLength);
            }

            Expression::Lt { left, right } => translate_comparison(ctx, left, right, Instruction::IfIcmpLt)?,
            Expression::Gt { left, right } => translate_comparison(ctx, left, right, Instruction::IfIcmpGt)?,

            Expression::NewIntArray { length } => {
                length.translate(ctx)?;
                ctx.emit(Instruction::NewArray);
            }

            Expression::NewObject { class } => ctx.emit(Instruction::New(class.clone())),

            Expression::Not { operand } => {
                let true_label = ctx.create_label();
                let false_label = ctx.create_label();
                let end_label = ctx.create_label();

                operand.translate(ctx)?;
                ctx.emit(Instruction::Ifne(false_label));

                ctx.link_label_here(true_label);
                ctx.emit(Instruction::True);
                ctx.emit(Instruction::Goto(end_label));

                ctx.link_label_here(false_label);
                ctx.emit(Instruction::False);

                ctx.link_label_here(end_label);
            }

            Expression::Number(value) => ctx.emit(Instruction::LdcInt(*value)),

            Expression::StringLiteral(value) => ctx.emit(Instruction::LdcString(value.clone())),

            Expression::This => ctx.emit(Instruction::This),
        }

        Ok(())
    }
}

/// Evaluates `left`, then `right`, then combines them with `operation`.
fn translate_binary(
    ctx: &mut MethodContext<'_>,
    left: &Expression,
    right: &Expression,
    operation: Instruction,
) -> CompileResult<()> {
    left.translate(ctx)?;
    right.translate(ctx)?;
    ctx.emit(operation);
    Ok(())
}

/// Materializes the outcome of `branch` as `0` or `1` on the stack. Both
/// operands are evaluated exactly once, before the branch.
fn translate_comparison(
    ctx: &mut MethodContext<'_>,
    left: &Expression,
    right: &Expression,
    branch: fn(Label) -> Instruction,
) -> CompileResult<()> {
    let true_label = ctx.create_label();
    let false_label = ctx.create_label();
    let end_label = ctx.create_label();

    left.translate(ctx)?;
    right.translate(ctx)?;
    ctx.emit(branch(true_label));

    ctx.link_label_here(false_label);
    ctx.emit(Instruction::False);
    ctx.emit(Instruction::Goto(end_label));

    ctx.link_label_here(true_label);
    ctx.emit(Instruction::True);

    ctx.link_label_here(end_label);
    Ok(())
}
