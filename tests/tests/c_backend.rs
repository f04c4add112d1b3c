// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use tests::from_json;
use tiger::cfg;
use tiger_compiler::{emit_c, CompileError};

const FACTORIAL: &str = r#"{
    "classes": [
        { "id": "Fac", "fields": [] }
    ],
    "vtables": [
        { "id": "Fac", "entries": [{ "return_type": "Int", "method": "compute", "class": "Fac" }] }
    ],
    "methods": [
        {
            "return_type": "Int",
            "class_id": "Fac",
            "id": "compute",
            "formals": [
                { "ty": { "Class": "Fac" }, "id": "this" },
                { "ty": "Int", "id": "n" }
            ],
            "locals": [
                { "ty": "Int", "id": "acc" },
                { "ty": "Boolean", "id": "t" }
            ],
            "blocks": [
                {
                    "label": 0,
                    "statements": [{ "Move": { "dst": { "id": "acc" }, "src": { "Int": 1 } } }],
                    "transfer": { "Goto": 1 }
                },
                {
                    "label": 1,
                    "statements": [{ "Binary": {
                        "dst": { "id": "t" },
                        "operator": "Gt",
                        "left": { "Var": { "id": "n" } },
                        "right": { "Int": 0 }
                    } }],
                    "transfer": { "If": { "condition": { "Var": { "id": "t" } }, "then": 2, "otherwise": 3 } }
                },
                {
                    "label": 2,
                    "statements": [
                        { "Binary": { "dst": { "id": "acc" }, "operator": "Times", "left": { "Var": { "id": "acc" } }, "right": { "Var": { "id": "n" } } } },
                        { "Binary": { "dst": { "id": "n" }, "operator": "Sub", "left": { "Var": { "id": "n" } }, "right": { "Int": 1 } } }
                    ],
                    "transfer": { "Goto": 1 }
                },
                {
                    "label": 3,
                    "statements": [],
                    "transfer": { "Return": { "Var": { "id": "acc" } } }
                }
            ],
            "entry": 0
        }
    ],
    "main_method": {
        "locals": [
            { "ty": { "Class": "Fac" }, "id": "f" },
            { "ty": "Int", "id": "r" }
        ],
        "blocks": [
            {
                "label": 4,
                "statements": [
                    { "NewObject": { "dst": { "id": "f" }, "class": "Fac" } },
                    { "InvokeVirtual": { "dst": { "id": "r" }, "receiver": { "id": "f" }, "method": "compute", "arguments": [{ "Int": 5 }] } },
                    { "Print": { "Var": { "id": "r" } } }
                ],
                "transfer": { "Return": { "Int": 0 } }
            }
        ],
        "entry": 4
    }
}"#;

#[test]
fn factorial_method() {
    let program: cfg::Program = from_json(FACTORIAL);

    let output = emit_c(&program).unwrap();

    let method = output.split("// methods\n").nth(1).unwrap()
        .split("// vtables\n").next().unwrap();

    assert_eq!(method, "\
int Fac_compute(struct Fac *this, int n)
{
  int acc;
  int t;

  goto L_0;

L_0:
  acc = 1;
  goto L_1;
L_1:
  t = n > 0;
  if (t)
    goto L_2;
  else
    goto L_3;
L_2:
  acc = acc * n;
  n = n - 1;
  goto L_1;
L_3:
  return acc;
}

");
}

#[test]
fn sections_appear_in_order() {
    let program: cfg::Program = from_json(FACTORIAL);

    let output = emit_c(&program).unwrap();

    let positions: Vec<usize> = [
        "// Control-flow Graph",
        "// structures",
        "// vtables structures",
        "// vtables declarations",
        "// methods",
        "// vtables\n",
        "// main method",
    ]
    .iter()
    .map(|section| output.find(section).unwrap_or_else(|| panic!("missing {section:?}")))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn main_method_dispatches_through_the_vtable() {
    let program: cfg::Program = from_json(FACTORIAL);

    let output = emit_c(&program).unwrap();

    assert!(output.ends_with("\
int Tiger_main ()
{
  struct Fac *f;
  int r;

  goto L_4;

L_4:
  f = ((struct Fac*)(Tiger_new (&Fac_vtable_, sizeof(struct Fac))));
  r = f->vptr->compute(f, 5);
  System_out_println (r);
  return 0;
}

"), "{output}");
}

#[test]
fn vtable_bound_to_missing_method_is_rejected() {
    let mut program: cfg::Program = from_json(FACTORIAL);
    program.vtables[0].entries.push(cfg::VtableEntry::new(cfg::Type::Int, "missing", "Fac"));

    let result = emit_c(&program);

    assert!(matches!(result, Err(CompileError::UnknownVtableTarget { .. })), "{result:?}");
}

#[test]
fn output_is_stable() {
    let program: cfg::Program = from_json(FACTORIAL);

    assert_eq!(emit_c(&program).unwrap(), emit_c(&program).unwrap());
}
