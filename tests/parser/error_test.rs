//! 構文エラーのパーサーテスト

use super::*;
use jai_syntax::error::{Severity, SyntaxError};
use test_case::test_case;

fn parser_error(source: &str) -> ParserError {
    parse_expr(source).expect_err("Expression should fail to parse")
}

#[test_case("Vec.{1, y = 2}" ; "positional then named")]
#[test_case("Vec.{x = 1, 2}" ; "named then positional")]
#[test_case("(a + b).{1}" ; "literal after non-name")]
#[test_case("f(1).[2]" ; "array literal after call")]
#[test_case("f(..rest, x)" ; "spread not last")]
fn test_ambiguous_constructs(source: &str) {
    assert!(matches!(
        parser_error(source),
        ParserError::AmbiguousConstruct { .. }
    ));
}

#[test]
fn test_array_literal_with_two_elements() {
    assert!(matches!(
        parser_error("Arr.[1, 2]"),
        ParserError::InvalidSyntax { .. }
    ));
}

#[test]
fn test_missing_expression() {
    assert!(matches!(
        parser_error("+"),
        ParserError::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parser_error("a +"),
        ParserError::UnexpectedEof { .. }
    ));
}

#[test]
fn test_missing_semicolon_is_reported_not_inserted() {
    let output = parse_source("main :: () {\n    x := 1\n}");
    assert_eq!(output.diagnostics.len(), 1);
    assert!(matches!(
        output.diagnostics[0].error,
        SyntaxError::Parser(ParserError::MissingToken { .. })
    ));
    assert_eq!(output.diagnostics[0].severity, Severity::Recovered);

    match &output.tree.definitions[0] {
        Definition::Proc(proc_def) => {
            assert_eq!(proc_def.body.as_ref().map(|b| b.statements.len()), Some(0));
        }
        other => panic!("Expected procedure, got {:?}", other),
    }
}

#[test]
fn test_mixed_return_forms() {
    let diagnostics = assert_parse_error("main :: () { return a, y = 2; }");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].error,
        SyntaxError::Parser(ParserError::InvalidSyntax { .. })
    ));
}

#[test]
fn test_invalid_assignment_target() {
    let diagnostics = assert_parse_error("main :: () { a + b = 1; }");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_assignment_at_top_level() {
    let diagnostics = assert_parse_error("x : int += 1;");
    assert!(matches!(
        diagnostics[0].error,
        SyntaxError::Parser(ParserError::InvalidSyntax { .. })
    ));
}

#[test]
fn test_non_integer_enum_backing_type() {
    let diagnostics = assert_parse_error("E :: enum float { A; }");
    assert!(!diagnostics.is_empty());
}

#[test]
fn test_complete_on_boolean_if() {
    let diagnostics = assert_parse_error("main :: () { if #complete x { } }");
    assert_eq!(diagnostics.len(), 1);
}
