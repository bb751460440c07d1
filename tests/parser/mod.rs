//! パーサーテストの共通モジュール
//!
//! パーサーテストで使用する共通のヘルパー関数と型を定義する。

use jai_syntax::ast::*;
use jai_syntax::driver::{parse_source as run_pipeline, ParseOutput};
use jai_syntax::error::{Diagnostic, ParserError};
use jai_syntax::lexer::Lexer;
use jai_syntax::parser::Parser;

/// ソースコードを解析して木と診断を取得するヘルパー関数
pub fn parse_source(source: &str) -> ParseOutput {
    run_pipeline(source)
}

/// 診断なしで解析できることを確認するヘルパー関数
pub fn assert_parse_success(source: &str) -> SourceFile {
    let output = parse_source(source);
    assert!(
        output.diagnostics.is_empty(),
        "Parsing should succeed, got: {:#?}",
        output.diagnostics
    );
    output.tree
}

/// 診断が出ることを確認するヘルパー関数
pub fn assert_parse_error(source: &str) -> Vec<Diagnostic> {
    let output = parse_source(source);
    assert!(!output.diagnostics.is_empty(), "Parsing should fail");
    output.diagnostics
}

/// 単一の式を解析する
pub fn parse_expr(source: &str) -> Result<Expression, ParserError> {
    let tokens = Lexer::new(source).collect_tokens();
    Parser::new(tokens).parse_expression()
}

pub fn expr(source: &str) -> Expression {
    parse_expr(source).expect("Expression should parse")
}

/// 最初の定義をプロシージャとして取り出し、本体の文を返す
pub fn body_of(source: &str) -> Vec<Statement> {
    let tree = assert_parse_success(source);
    match tree.definitions.into_iter().next() {
        Some(Definition::Proc(proc_def)) => {
            proc_def.body.expect("Procedure should have a body").statements
        }
        other => panic!("Expected procedure, got {:?}", other),
    }
}

/// `main :: () { ... }` の本体として解析する
pub fn statements(body: &str) -> Vec<Statement> {
    body_of(&format!("main :: () {{\n{}\n}}", body))
}

/// 式を括弧付きの文字列に直す（優先順位の確認用）
pub fn render(expr: &Expression) -> String {
    match expr {
        Expression::Identifier(id) => id.name.clone(),
        Expression::Int(lit) => lit.value.to_string(),
        Expression::Float(lit) => lit.value.to_string(),
        Expression::Binary(bin) => format!(
            "({} {} {})",
            render(&bin.left),
            binary_symbol(bin.op),
            render(&bin.right)
        ),
        Expression::Unary(un) => {
            let op = match un.op {
                UnaryOp::Negate => "-",
                UnaryOp::Not => "!",
                UnaryOp::BitNot => "~",
                UnaryOp::Pointer => "*",
                UnaryOp::Reference => "&",
            };
            format!("({}{})", op, render(&un.operand))
        }
        Expression::Range(range) => {
            format!("({}..{})", render(&range.start), render(&range.end))
        }
        Expression::Parenthesized(paren) => render(&paren.inner),
        Expression::MemberAccess(access) => {
            format!("{}.{}", render(&access.object), access.property)
        }
        Expression::ArrayAccess(access) => {
            format!("{}[{}]", render(&access.object), render(&access.index))
        }
        Expression::Dereference(deref) => format!("{}.*", render(&deref.object)),
        Expression::AutoCast(cast) => format!("(xx {})", render(&cast.value)),
        Expression::Call(call) => {
            let args: Vec<_> = call
                .arguments
                .iter()
                .map(|arg| match arg {
                    Argument::Positional(e) => render(e),
                    Argument::Named(n) => format!("{} = {}", n.name, render(&n.value)),
                    Argument::Spread(s) => format!("..{}", s.name),
                })
                .collect();
            format!("{}({})", render(&call.callee), args.join(", "))
        }
        Expression::EnumValue(value) => format!(".{}", value.name),
        other => format!("{:?}", other),
    }
}

fn binary_symbol(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Multiply => "*",
        BinaryOp::Divide => "/",
        BinaryOp::Modulo => "%",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::BitAnd => "&",
        BinaryOp::BitOr => "|",
        BinaryOp::BitXor => "^",
        BinaryOp::Shl => "<<",
        BinaryOp::Shr => ">>",
    }
}

// サブモジュールの宣言
#[cfg(test)]
mod definition_test;
#[cfg(test)]
mod error_test;
#[cfg(test)]
mod statement_test;
#[cfg(test)]
mod type_test;
