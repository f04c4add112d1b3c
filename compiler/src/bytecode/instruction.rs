// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use serde::Serialize;
use tiger::Label;

use super::Type;

/// The descriptor of the receiver of [`Instruction::Print`] when printing a
/// string.
pub const STRING_DESCRIPTOR: &str = "Ljava/lang/String;";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Instruction {
    //
    // Loads & stores
    //

    /// Loads a reference from a local slot.
    Aload(usize),

    /// Stores a reference into a local slot.
    Astore(usize),

    Iload(usize),

    Istore(usize),

    /// Loads the receiver, which always lives in slot `0`.
    This,

    LdcInt(i32),

    LdcString(String),

    /// Pushes the integer `1`.
    True,

    /// Pushes the integer `0`.
    False,

    GetField {
        /// `<Class>/<field>`
        field: String,
        descriptor: String,
    },

    PutField {
        field: String,
        descriptor: String,
    },

    //
    // Math
    //

    Iadd,
    Isub,
    Imul,
    Iand,

    //
    // Arrays & objects
    //

    Iaload,
    Iastore,
    ArrayLength,
    NewArray,
    New(String),

    //
    // Control Flow
    //

    /// Pops two integers and jumps if the first is less than the second.
    IfIcmpLt(Label),

    /// Pops two integers and jumps if the first is greater than the second.
    IfIcmpGt(Label),

    /// Pops an integer and jumps if it is zero.
    Ifeq(Label),

    /// Pops an integer and jumps if it is not zero.
    Ifne(Label),

    Goto(Label),

    /// Marks the position of a jump target. Executes as a no-op.
    Label(Label),

    InvokeVirtual {
        class: String,
        method: String,
        parameters: Vec<Type>,
        return_type: Type,
    },

    /// Calls the print routine with the value on top of the stack.
    Print(String),

    Ireturn,
    Areturn,

    /// Returns from a method without a value.
    Return,

    //
    // Debugging
    //

    /// The following instructions originate from this source line.
    Line(usize),
}

impl Instruction {
    /// The label this instruction may transfer control to.
    #[must_use]
    pub const fn jump_target(&self) -> Option<Label> {
        match self {
            Self::IfIcmpLt(label) => Some(*label),
            Self::IfIcmpGt(label) => Some(*label),
            Self::Ifeq(label) => Some(*label),
            Self::Ifne(label) => Some(*label),
            Self::Goto(label) => Some(*label),
            _ => None,
        }
    }

    #[must_use]
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Aload(..) => "aload",
            Self::Astore(..) => "astore",
            Self::Iload(..) => "iload",
            Self::Istore(..) => "istore",
            Self::This => "aload",
            Self::LdcInt(..) => "ldc",
            Self::LdcString(..) => "ldc",
            Self::True => "iconst_1",
            Self::False => "iconst_0",
            Self::GetField { .. } => "getfield",
            Self::PutField { .. } => "putfield",
            Self::Iadd => "iadd",
            Self::Isub => "isub",
            Self::Imul => "imul",
            Self::Iand => "iand",
            Self::Iaload => "iaload",
            Self::Iastore => "iastore",
            Self::ArrayLength => "arraylength",
            Self::NewArray => "newarray",
            Self::New(..) => "new",
            Self::IfIcmpLt(..) => "if_icmplt",
            Self::IfIcmpGt(..) => "if_icmpgt",
            Self::Ifeq(..) => "ifeq",
            Self::Ifne(..) => "ifne",
            Self::Goto(..) => "goto",
            Self::Label(..) => "",
            Self::InvokeVirtual { .. } => "invokevirtual",
            Self::Print(..) => "print",
            Self::Ireturn => "ireturn",
            Self::Areturn => "areturn",
            Self::Return => "return",
            Self::Line(..) => ".line",
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Label(label) => return write!(f, "{label}:"),
            _ => f.write_str(self.mnemonic())?,
        }

        match self {
            Self::Aload(slot) | Self::Astore(slot) | Self::Iload(slot) | Self::Istore(slot) => {
                write!(f, " {slot}")
            }

            Self::This => f.write_str(" 0"),

            Self::LdcInt(value) => write!(f, " {value}"),

            Self::LdcString(value) => write!(f, " {value:?}"),

            Self::GetField { field, descriptor } | Self::PutField { field, descriptor } => {
                write!(f, " {field} {descriptor}")
            }

            Self::NewArray => f.write_str(" int"),

            Self::New(class) => write!(f, " {class}"),

            Self::IfIcmpLt(label) | Self::IfIcmpGt(label) | Self::Ifeq(label) | Self::Ifne(label) | Self::Goto(label) => {
                write!(f, " {label}")
            }

            Self::InvokeVirtual { class, method, parameters, return_type } => {
                write!(f, " {class}/{method}(")?;
                for parameter in parameters {
                    parameter.fmt(f)?;
                }
                write!(f, "){return_type}")
            }

            Self::Print(descriptor) => write!(f, " ({descriptor})V"),

            Self::Line(line) => write!(f, " {line}"),

            _ => Ok(()),
        }
    }
}
