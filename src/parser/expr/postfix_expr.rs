// 後置演算式の解析
//
// 添字アクセス、メンバーアクセス、参照外し `.*`、型名付きリテラル
// `Type.{}` / `Type.[]`、プロシージャ呼び出しを解析する。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 後置式を解析
    pub(crate) fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let mut expr = self.parse_primary_expression()?;

        loop {
            let start = expr.span().start;

            match self.current_token() {
                Some(Token::LeftBracket) => {
                    self.advance();
                    let index = self.parse_expression_internal()?;
                    self.expect(Token::RightBracket)?;
                    expr = Expression::ArrayAccess(ArrayAccess {
                        object: Box::new(expr),
                        index: Box::new(index),
                        span: self.span_from(start),
                    });
                }
                Some(Token::Dot) => {
                    expr = self.parse_dot_suffix(expr)?;
                }
                // 呼び出しは名前パスの直後に限る
                Some(Token::LeftParen) if expr.name_path().is_some() => {
                    let arguments = self.parse_argument_list()?;
                    expr = Expression::Call(ProcCall {
                        callee: Box::new(expr),
                        arguments,
                        span: self.span_from(start),
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// `object.` に続く部分を解析
    fn parse_dot_suffix(&mut self, object: Expression) -> ParseResult<Expression> {
        let start = object.span().start;
        let dot_span = self.current_span();

        match self.peek(1) {
            Some(Token::Star) => {
                self.advance();
                self.advance();
                Ok(Expression::Dereference(DereferenceExpr {
                    object: Box::new(object),
                    span: self.span_from(start),
                }))
            }
            Some(Token::LeftBrace) | Some(Token::LeftBracket) => {
                let Some(type_path) = object.name_path() else {
                    return Err(ParserError::AmbiguousConstruct {
                        message: "`.{` / `.[` の前には型名が必要です".to_string(),
                        span: dot_span,
                    });
                };
                self.advance();
                if self.check(&Token::LeftBrace) {
                    self.parse_struct_literal(type_path, start)
                } else {
                    self.parse_array_literal(type_path, start)
                }
            }
            Some(token) if is_name_token(token) => {
                self.advance();
                let property = self.expect_name()?;
                Ok(Expression::MemberAccess(MemberAccess {
                    object: Box::new(object),
                    property,
                    span: self.span_from(start),
                }))
            }
            Some(_) => Err(ParserError::AmbiguousConstruct {
                message: "`.` の後には名前、`*`、`{`、`[` のいずれかが必要です".to_string(),
                span: dot_span,
            }),
            None => {
                self.advance();
                Err(self.unexpected("名前"))
            }
        }
    }
}

/// 名前として読めるトークンか（キーワードを含む）
pub(crate) fn is_name_token(token: &Token) -> bool {
    matches!(token, Token::Identifier(_)) || token.keyword_text().is_some()
}
