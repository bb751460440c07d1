// リテラル式と一次式の解析
//
// 数値・文字列・真偽値・null・`---`・識別子・括弧式を解析し、
// 先頭の `.`、`ifx`、ディレクティブはそれぞれの解析関数に振り分ける。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// プライマリ式を解析
    pub(crate) fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let span = self.current_span();

        let expr = match self.current_token().cloned() {
            Some(Token::Integer(value)) => Expression::Int(IntLiteral { value, span }),
            Some(Token::Float(value)) => Expression::Float(FloatLiteral { value, span }),
            Some(Token::String(value)) => Expression::String(StringLiteral { value, span }),
            Some(Token::True) => Expression::Bool(BoolLiteral { value: true, span }),
            Some(Token::False) => Expression::Bool(BoolLiteral { value: false, span }),
            Some(Token::Null) => Expression::Null(NullLiteral { span }),
            Some(Token::Undefined) => Expression::Undefined(UndefinedLiteral { span }),
            Some(Token::Identifier(name)) => Expression::Identifier(Identifier { name, span }),
            Some(Token::LeftParen) => return self.parse_parenthesized_expression(),
            Some(Token::Dot) => return self.parse_leading_dot_expression(),
            Some(Token::Ifx) => return self.parse_conditional_expression(),
            Some(Token::Directive(name)) => return self.parse_directive_expression(name),
            _ => return Err(self.unexpected("式")),
        };

        self.advance();
        Ok(expr)
    }

    /// 括弧式を解析
    fn parse_parenthesized_expression(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;
        self.expect(Token::LeftParen)?;
        let inner = self.parse_expression_internal()?;
        self.expect(Token::RightParen)?;
        Ok(Expression::Parenthesized(ParenthesizedExpr {
            inner: Box::new(inner),
            span: self.span_from(start),
        }))
    }
}
