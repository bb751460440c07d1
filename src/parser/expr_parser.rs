//! 式の解析

use crate::ast::*;

use super::{ParseResult, Parser};

impl Parser {
    /// 式を解析（内部実装）
    pub(super) fn parse_expression_internal(&mut self) -> ParseResult<Expression> {
        self.parse_binary_expression()
    }

    /// 括弧全体で囲まれた条件式から括弧を外す
    pub(super) fn unwrap_parenthesized(condition: Expression) -> (Expression, bool) {
        match condition {
            Expression::Parenthesized(paren) => (*paren.inner, true),
            other => (other, false),
        }
    }
}
