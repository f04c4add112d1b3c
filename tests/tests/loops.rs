// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{assert_labels_well_formed, assign, int, method, print, while_loop, Machine};
use tiger::ast::{Expression, Statement, StatementKind, Type};
use tiger_compiler::bytecode::{Instruction, Translator};

fn translate(method: &tiger::ast::Method) -> Vec<Instruction> {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();

    let method = Translator::new().translate_method("Test", method).unwrap();
    assert_labels_well_formed(&method.instructions);
    method.instructions
}

/// `i = 0; sum = 0; while (i < n) { sum = sum + i; i = i + 1; } return sum;`
fn sum_below() -> tiger::ast::Method {
    method(
        Type::Int,
        &[("n", Type::Int)],
        &[("i", Type::Int), ("sum", Type::Int)],
        vec![
            assign(2, "i", Type::Int, Expression::Number(0)),
            assign(3, "sum", Type::Int, Expression::Number(0)),
            while_loop(4, Expression::lt(int("i"), int("n")), vec![
                assign(5, "sum", Type::Int, Expression::add(int("sum"), int("i"))),
                assign(6, "i", Type::Int, Expression::add(int("i"), Expression::Number(1))),
            ]),
        ],
        int("sum"),
    )
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(5, 10)]
#[case(100, 4950)]
fn loop_runs_until_the_condition_fails(#[case] n: i32, #[case] expected: i32) {
    let instructions = translate(&sum_below());

    let outcome = Machine::new(&instructions).with_local(1, n).run();

    assert_eq!(outcome.returned.unwrap().as_int(), expected);
}

#[test]
fn loop_has_one_exit_test_and_one_back_edge() {
    let instructions = translate(&sum_below());

    let exits: Vec<_> = instructions.iter().filter(|i| matches!(i, Instruction::Ifeq(..))).collect();
    assert_eq!(exits.len(), 1);

    // The condition is re-evaluated by jumping back to the label placed
    // right before it.
    let head = instructions.iter()
        .position(|i| matches!(i, Instruction::Line(4)))
        .map(|line| &instructions[line + 1])
        .unwrap();
    let Instruction::Label(head) = head else {
        panic!("loop does not start with a label: {head}");
    };

    let back_edges = instructions.iter()
        .filter(|i| **i == Instruction::Goto(*head))
        .count();
    assert_eq!(back_edges, 1);

    // The exit label is the last thing the loop places.
    let Some(Instruction::Ifeq(exit)) = exits.first() else { unreachable!() };
    let exit_position = instructions.iter().position(|i| *i == Instruction::Label(*exit)).unwrap();
    assert_eq!(instructions[exit_position - 1], Instruction::Goto(*head));
}

#[test]
fn loop_cost_grows_linearly() {
    let instructions = translate(&sum_below());

    let ten = Machine::new(&instructions).with_local(1, 10).run().steps;
    let twenty = Machine::new(&instructions).with_local(1, 20).run().steps;
    let thirty = Machine::new(&instructions).with_local(1, 30).run().steps;

    assert_eq!(twenty - ten, thirty - twenty);
}

#[test]
fn array_squares() {
    // a = new int[n]; i = 0;
    // while (i < a.length) { a[i] = i * i; i = i + 1; }
    // print a[n - 1]; return a.length;
    let array = || Expression::local("a", Type::IntArray);

    let instructions = translate(&method(
        Type::Int,
        &[("n", Type::Int)],
        &[("a", Type::IntArray), ("i", Type::Int)],
        vec![
            assign(2, "a", Type::IntArray, Expression::NewIntArray { length: Box::new(int("n")) }),
            assign(3, "i", Type::Int, Expression::Number(0)),
            while_loop(4, Expression::lt(int("i"), Expression::Length { array: Box::new(array()) }), vec![
                Statement::new(5, StatementKind::AssignArray {
                    id: "a".into(),
                    is_field: false,
                    index: int("i"),
                    value: Expression::times(int("i"), int("i")),
                }),
                assign(6, "i", Type::Int, Expression::add(int("i"), Expression::Number(1))),
            ]),
            print(8, Expression::ArraySelect {
                array: Box::new(array()),
                index: Box::new(Expression::sub(int("n"), Expression::Number(1))),
            }),
        ],
        Expression::Length { array: Box::new(array()) },
    ));

    let outcome = Machine::new(&instructions).with_local(1, 6).run();

    assert_eq!(outcome.printed, vec!["25".to_string()]);
    assert_eq!(outcome.returned.unwrap().as_int(), 6);
}

#[test]
fn nested_loops() {
    // count = 0; i = 0;
    // while (i < n) { j = 0; while (j < i) { count = count + 1; j = j + 1; } i = i + 1; }
    let instructions = translate(&method(
        Type::Int,
        &[("n", Type::Int)],
        &[("i", Type::Int), ("j", Type::Int), ("count", Type::Int)],
        vec![
            assign(2, "count", Type::Int, Expression::Number(0)),
            assign(3, "i", Type::Int, Expression::Number(0)),
            while_loop(4, Expression::lt(int("i"), int("n")), vec![
                assign(5, "j", Type::Int, Expression::Number(0)),
                while_loop(6, Expression::lt(int("j"), int("i")), vec![
                    assign(7, "count", Type::Int, Expression::add(int("count"), Expression::Number(1))),
                    assign(8, "j", Type::Int, Expression::add(int("j"), Expression::Number(1))),
                ]),
                assign(10, "i", Type::Int, Expression::add(int("i"), Expression::Number(1))),
            ]),
        ],
        int("count"),
    ));

    let outcome = Machine::new(&instructions).with_local(1, 5).run();

    assert_eq!(outcome.returned.unwrap().as_int(), 10);
}
