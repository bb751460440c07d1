// 単項演算式と範囲式の解析
//
// 範囲 `..` は単項演算より強く、後置演算より弱く結合する右結合。
// `-1..5` は `-(1..5)` になる。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 単項式を解析
    pub(crate) fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;

        let op = match self.current_token() {
            Some(Token::Minus) => UnaryOp::Negate,
            Some(Token::Bang) => UnaryOp::Not,
            Some(Token::Tilde) => UnaryOp::BitNot,
            Some(Token::Star) => UnaryOp::Pointer,
            Some(Token::Ampersand) => UnaryOp::Reference,
            Some(Token::AutoCast) => {
                self.advance();
                let value = self.parse_unary_expression()?;
                return Ok(Expression::AutoCast(AutoCastExpr {
                    value: Box::new(value),
                    span: self.span_from(start),
                }));
            }
            _ => return self.parse_range_expression(),
        };

        self.advance();
        let operand = self.parse_unary_expression()?;
        Ok(Expression::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
            span: self.span_from(start),
        }))
    }

    /// 範囲式を解析
    ///
    /// 終端側は単項式として読むので `a..-b` も書ける。
    pub(crate) fn parse_range_expression(&mut self) -> ParseResult<Expression> {
        let start = self.parse_postfix_expression()?;

        if !self.match_token(&Token::DotDot) {
            return Ok(start);
        }

        let end = self.parse_unary_expression()?;
        let span = start.span().to(end.span());
        Ok(Expression::Range(RangeExpr {
            start: Box::new(start),
            end: Box::new(end),
            span,
        }))
    }
}
