//! 定義のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

fn single_definition(source: &str) -> Definition {
    let mut tree = assert_parse_success(source);
    assert_eq!(tree.definitions.len(), 1);
    tree.definitions.remove(0)
}

#[test]
fn test_imports() {
    let tree = assert_parse_success(
        r#"
#import "Basic";
Math :: #import "Math";
#load "helpers.jai";
Basic :: #import "Basic"()(MEMORY_DEBUGGER = true);
"#,
    );
    let imports: Vec<_> = tree
        .definitions
        .iter()
        .map(|def| match def {
            Definition::Import(import) => import,
            other => panic!("Expected import, got {:?}", other),
        })
        .collect();

    assert_eq!(imports[0].alias, None);
    assert_eq!(imports[0].path, "Basic");
    assert_eq!(imports[1].alias.as_deref(), Some("Math"));
    assert_eq!(imports[2].kind, ImportKind::Load);
    assert_eq!(imports[3].config.len(), 1);
    assert_eq!(imports[3].config[0].name, "MEMORY_DEBUGGER");
}

#[test]
fn test_procedure() {
    match single_definition("add :: (a: int, b: int) -> int { return a + b; }") {
        Definition::Proc(proc_def) => {
            assert_eq!(proc_def.name, "add");
            assert!(!proc_def.is_inline);
            let names: Vec<_> = proc_def.parameters.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["a", "b"]);
            assert_eq!(proc_def.returns.len(), 1);
            assert_eq!(proc_def.body.map(|b| b.statements.len()), Some(1));
        }
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_named_and_defaulted_returns() {
    match single_definition("divmod :: (a: int, b: int) -> (q: int, r: int = 0) {}") {
        Definition::Proc(proc_def) => {
            assert_eq!(proc_def.returns.len(), 2);
            assert_eq!(proc_def.returns[0].name.as_deref(), Some("q"));
            assert!(proc_def.returns[0].default.is_none());
            assert!(proc_def.returns[1].default.is_some());
        }
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_inline_procedure() {
    match single_definition("square :: inline (x: float) -> float { return x * x; }") {
        Definition::Proc(proc_def) => assert!(proc_def.is_inline),
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_parameter_forms() {
    let source = "f :: (using ctx: *Context, $T: Type, args: ..Any, loc := #caller_location) {}";
    match single_definition(source) {
        Definition::Proc(proc_def) => {
            let params = &proc_def.parameters;
            assert_eq!(params.len(), 4);
            assert!(params[0].is_using);
            assert!(matches!(params[0].ty, Some(Type::Pointer(_))));
            assert!(params[1].is_baked);
            assert!(params[2].is_variadic);
            assert!(params[3].ty.is_none());
            assert!(matches!(
                params[3].default,
                Some(Expression::Directive(DirectiveExpr { ref name, .. })) if name == "caller_location"
            ));
        }
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_polymorphic_parameter_type() {
    match single_definition("identity :: (x: $T) -> T { return x; }") {
        Definition::Proc(proc_def) => match &proc_def.parameters[0].ty {
            Some(Type::Named(named)) => {
                assert!(named.polymorphic);
                assert_eq!(named.path, vec!["T"]);
            }
            other => panic!("Expected polymorphic type, got {:?}", other),
        },
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_foreign_procedure_without_body() {
    match single_definition("strlen :: (s: *u8) -> s64 #foreign libc;") {
        Definition::Proc(proc_def) => {
            assert!(proc_def.body.is_none());
            assert_eq!(proc_def.directives.len(), 1);
            assert_eq!(proc_def.directives[0].name, "foreign");
            assert_eq!(proc_def.directives[0].arguments, vec!["libc"]);
        }
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_struct_body_interleaving() {
    let source = r#"
Entity :: struct {
    id: u32;
    using transform: Transform;
    MAX_NAME :: 64;
    name: string = "unnamed";
    data: union {
        i: int;
        f: float;
    };
    LIMIT : int : 10;
    flags: [4] bool;
}
"#;
    match single_definition(source) {
        Definition::Struct(def) => {
            assert_eq!(def.name, "Entity");
            assert!(def.parameters.is_empty());
            assert_eq!(def.body.len(), 7);

            assert!(matches!(&def.body[0], BodyItem::Field(f) if f.name == "id"));
            assert!(matches!(&def.body[1], BodyItem::Statement(Statement::Using(_))));
            assert!(matches!(
                &def.body[2],
                BodyItem::Statement(Statement::Declaration(Definition::Constant(_)))
            ));
            match &def.body[3] {
                BodyItem::Field(field) => assert!(field.default.is_some()),
                other => panic!("Expected field, got {:?}", other),
            }
            match &def.body[4] {
                BodyItem::Field(StructField {
                    ty: FieldType::Union(union),
                    ..
                }) => assert_eq!(union.body.len(), 2),
                other => panic!("Expected union field, got {:?}", other),
            }
            assert!(matches!(
                &def.body[5],
                BodyItem::Statement(Statement::Declaration(Definition::Constant(Constant {
                    ty: Some(_),
                    ..
                })))
            ));
        }
        other => panic!("Expected struct, got {:?}", other),
    }
}

#[test]
fn test_polymorphic_struct() {
    match single_definition("Table :: struct (K: Type, V: Type) { count: int; };") {
        Definition::Struct(def) => {
            assert_eq!(def.parameters.len(), 2);
            assert_eq!(def.body.len(), 1);
        }
        other => panic!("Expected struct, got {:?}", other),
    }
}

#[test]
fn test_struct_field_types() {
    let source = r#"
Callbacks :: struct {
    on_event: (code: int) -> bool;
    pair: struct { a: int; b: int; };
    next: *Callbacks;
}
"#;
    match single_definition(source) {
        Definition::Struct(def) => {
            let types: Vec<_> = def
                .body
                .iter()
                .map(|item| match item {
                    BodyItem::Field(StructField {
                        ty: FieldType::Type(ty),
                        ..
                    }) => ty.clone(),
                    other => panic!("Expected typed field, got {:?}", other),
                })
                .collect();
            assert!(matches!(types[0], Type::Proc(_)));
            assert!(matches!(types[1], Type::InlineStruct(ref s) if s.body.len() == 2));
            assert!(matches!(types[2], Type::Pointer(_)));
        }
        other => panic!("Expected struct, got {:?}", other),
    }
}

#[test]
fn test_enum_with_backing_type() {
    match single_definition("Color :: enum u8 { RED; GREEN :: 5; BLUE; }") {
        Definition::Enum(def) => {
            assert!(!def.is_flags);
            assert_eq!(def.backing_type.map(|t| t.kind), Some(PrimitiveKind::U8));
            let names: Vec<_> = def
                .body
                .iter()
                .map(|item| match item {
                    EnumItem::Value(value) => value.name.as_str(),
                    other => panic!("Expected enumerator, got {:?}", other),
                })
                .collect();
            assert_eq!(names, vec!["RED", "GREEN", "BLUE"]);
        }
        other => panic!("Expected enum, got {:?}", other),
    }
}

#[test]
fn test_enum_flags_with_directive() {
    match single_definition("Flags :: enum_flags #specified u32 { A :: 1; B :: 1 << 1; }") {
        Definition::Enum(def) => {
            assert!(def.is_flags);
            assert_eq!(def.directive.map(|d| d.name), Some("specified".to_string()));
            assert_eq!(def.body.len(), 2);
        }
        other => panic!("Expected enum, got {:?}", other),
    }
}

#[test]
fn test_enum_with_nested_definition() {
    match single_definition("Kind :: enum { A; Info :: struct { x: int; } B; }") {
        Definition::Enum(def) => {
            assert_eq!(def.body.len(), 3);
            assert!(matches!(def.body[0], EnumItem::Value(_)));
            assert!(matches!(def.body[1], EnumItem::Definition(Definition::Struct(_))));
            assert!(matches!(def.body[2], EnumItem::Value(_)));
        }
        other => panic!("Expected enum, got {:?}", other),
    }
}

#[test]
fn test_constants_and_variables() {
    let tree = assert_parse_success(
        r#"
PI :: 3.5;
MAX : int : 100;
counter := 0;
buffer : [1024] u8;
CODE :: #code { x := 1; };
"#,
    );
    assert_eq!(tree.definitions.len(), 5);
    assert!(matches!(
        &tree.definitions[0],
        Definition::Constant(Constant {
            value: ConstantValue::Expression(Expression::Float(_)),
            ..
        })
    ));
    assert!(matches!(&tree.definitions[1], Definition::Constant(c) if c.ty.is_some()));
    assert!(matches!(&tree.definitions[2], Definition::Variable(v) if v.value.is_some()));
    assert!(matches!(&tree.definitions[3], Definition::Variable(v) if v.value.is_none()));
    match &tree.definitions[4] {
        Definition::Constant(Constant {
            value: ConstantValue::Code(block),
            ..
        }) => assert_eq!(block.statements.len(), 1),
        other => panic!("Expected code constant, got {:?}", other),
    }
}

#[test]
fn test_definition_names() {
    let tree = assert_parse_success("A :: 1;\n#scope_file\nB :: struct {}");
    let names: Vec<_> = tree.definitions.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec![Some("A"), None, Some("B")]);
}
