//! 型のパーサーテスト

use super::*;
use test_case::test_case;

/// `x : <type>;` として解析し、型を取り出す
fn parse_type(ty: &str) -> Type {
    let tree = assert_parse_success(&format!("x : {};", ty));
    match tree.definitions.into_iter().next() {
        Some(Definition::Variable(Variable { ty: Some(ty), .. })) => ty,
        other => panic!("Expected typed variable, got {:?}", other),
    }
}

#[test_case("bool", PrimitiveKind::Bool)]
#[test_case("string", PrimitiveKind::String)]
#[test_case("float64", PrimitiveKind::Float64)]
#[test_case("s16", PrimitiveKind::S16)]
#[test_case("u64", PrimitiveKind::U64)]
#[test_case("void", PrimitiveKind::Void)]
#[test_case("Any", PrimitiveKind::Any)]
#[test_case("Type", PrimitiveKind::Type)]
#[test_case("Context", PrimitiveKind::Context)]
fn test_primitive_types(source: &str, expected: PrimitiveKind) {
    match parse_type(source) {
        Type::Primitive(primitive) => assert_eq!(primitive.kind, expected),
        other => panic!("Expected primitive, got {:?}", other),
    }
}

#[test]
fn test_qualified_named_type() {
    match parse_type("Math.Matrix4") {
        Type::Named(named) => {
            assert_eq!(named.path, vec!["Math", "Matrix4"]);
            assert!(!named.polymorphic);
        }
        other => panic!("Expected named type, got {:?}", other),
    }
}

#[test]
fn test_array_types() {
    match parse_type("[N * 2] float") {
        Type::Array(array) => {
            assert!(matches!(array.size, ArraySize::Fixed(_)));
            assert!(matches!(*array.element, Type::Primitive(_)));
        }
        other => panic!("Expected array, got {:?}", other),
    }

    match parse_type("[..] *Node") {
        Type::Array(array) => {
            assert_eq!(array.size, ArraySize::Dynamic);
            assert!(matches!(*array.element, Type::Pointer(_)));
        }
        other => panic!("Expected array, got {:?}", other),
    }

    match parse_type("[] [4] u8") {
        Type::Array(array) => {
            assert_eq!(array.size, ArraySize::View);
            assert!(matches!(*array.element, Type::Array(_)));
        }
        other => panic!("Expected array, got {:?}", other),
    }
}

#[test]
fn test_pointer_to_pointer() {
    match parse_type("**u8") {
        Type::Pointer(outer) => assert!(matches!(*outer.pointee, Type::Pointer(_))),
        other => panic!("Expected pointer, got {:?}", other),
    }
}

#[test]
fn test_procedure_type() {
    match parse_type("(a: int, b: *void) -> (ok: bool, err: string) #c_call") {
        Type::Proc(proc_type) => {
            assert_eq!(proc_type.parameters.len(), 2);
            assert_eq!(proc_type.returns.len(), 2);
            assert_eq!(proc_type.returns[1].name.as_deref(), Some("err"));
            assert_eq!(proc_type.directives.len(), 1);
        }
        other => panic!("Expected procedure type, got {:?}", other),
    }

    match parse_type("()") {
        Type::Proc(proc_type) => {
            assert!(proc_type.parameters.is_empty());
            assert!(proc_type.returns.is_empty());
        }
        other => panic!("Expected procedure type, got {:?}", other),
    }
}

#[test]
fn test_type_span() {
    let tree = assert_parse_success("x : [..] int;");
    match &tree.definitions[0] {
        Definition::Variable(Variable { ty: Some(ty), .. }) => {
            assert_eq!(ty.span(), Span::new(4, 12));
        }
        other => panic!("Expected typed variable, got {:?}", other),
    }
}
