//! 二項演算式の解析
//!
//! `* / %` だけが一段強く結合し、残りの二項演算子はすべて同じ優先順位で
//! 左結合になる。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 二項演算式を解析
    pub(crate) fn parse_binary_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative_expression()?;

        loop {
            // `x == {` は if-equality の開始なので式はここで終わる
            if self.check(&Token::EqEq) && self.check_at(1, &Token::LeftBrace) {
                break;
            }
            let Some(op) = self.current_token().and_then(flat_binary_op) else {
                break;
            };
            self.advance();
            let right = self.parse_multiplicative_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    /// 乗除算式を解析
    pub(crate) fn parse_multiplicative_expression(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary_expression()?;

        while let Some(op) = self.current_token().and_then(multiplicative_op) {
            self.advance();
            let right = self.parse_unary_expression()?;
            left = binary(left, op, right);
        }

        Ok(left)
    }
}

fn binary(left: Expression, op: BinaryOp, right: Expression) -> Expression {
    let span = left.span().to(right.span());
    Expression::Binary(BinaryExpr {
        left: Box::new(left),
        op,
        right: Box::new(right),
        span,
    })
}

fn multiplicative_op(token: &Token) -> Option<BinaryOp> {
    match token {
        Token::Star => Some(BinaryOp::Multiply),
        Token::Slash => Some(BinaryOp::Divide),
        Token::Percent => Some(BinaryOp::Modulo),
        _ => None,
    }
}

fn flat_binary_op(token: &Token) -> Option<BinaryOp> {
    let op = match token {
        Token::Plus => BinaryOp::Add,
        Token::Minus => BinaryOp::Subtract,
        Token::EqEq => BinaryOp::Eq,
        Token::NotEq => BinaryOp::Ne,
        Token::Lt => BinaryOp::Lt,
        Token::LtEq => BinaryOp::Le,
        Token::Gt => BinaryOp::Gt,
        Token::GtEq => BinaryOp::Ge,
        Token::AndAnd => BinaryOp::And,
        Token::OrOr => BinaryOp::Or,
        Token::Ampersand => BinaryOp::BitAnd,
        Token::Pipe => BinaryOp::BitOr,
        Token::Caret => BinaryOp::BitXor,
        Token::LtLt => BinaryOp::Shl,
        Token::GtGt => BinaryOp::Shr,
        _ => return None,
    };
    Some(op)
}
