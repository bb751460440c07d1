// 複雑な式の解析
//
// 構造体リテラル、配列リテラル、型を省略した列挙値、呼び出し引数を解析する。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::Token;
use crate::parser::{ParseResult, Parser};

use super::postfix_expr::is_name_token;

impl Parser {
    /// 先頭が `.` の式（`.Value`、`.{...}`、`.[...]`）を解析
    pub(crate) fn parse_leading_dot_expression(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;

        match self.peek(1) {
            Some(Token::LeftBrace) => {
                self.advance();
                self.parse_struct_literal(Vec::new(), start)
            }
            Some(Token::LeftBracket) => {
                self.advance();
                self.parse_array_literal(Vec::new(), start)
            }
            Some(token) if is_name_token(token) => {
                self.advance();
                let name = self.expect_name()?;
                Ok(Expression::EnumValue(EnumValue {
                    name,
                    span: self.span_from(start),
                }))
            }
            _ => {
                self.advance();
                Err(self.unexpected("名前、`{`、`[` のいずれか"))
            }
        }
    }

    /// 構造体リテラルの `{ ... }` を解析
    pub(crate) fn parse_struct_literal(
        &mut self,
        type_path: Vec<String>,
        start: usize,
    ) -> ParseResult<Expression> {
        self.expect(Token::LeftBrace)?;

        let body = if self.check(&Token::RightBrace) {
            StructLiteralBody::Positional(Vec::new())
        } else if self.at_named_initializer() {
            StructLiteralBody::Named(self.parse_field_initializers()?)
        } else {
            let mut values = Vec::new();
            loop {
                if self.at_named_initializer() {
                    return Err(self.mixed_initializer_error());
                }
                values.push(self.parse_expression_internal()?);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            StructLiteralBody::Positional(values)
        };

        self.expect(Token::RightBrace)?;
        Ok(Expression::StructLiteral(StructLiteral {
            type_path,
            body,
            span: self.span_from(start),
        }))
    }

    /// `name = value, ...`（末尾のカンマを許す）
    fn parse_field_initializers(&mut self) -> ParseResult<Vec<FieldInit>> {
        let mut fields = Vec::new();
        loop {
            if !self.at_named_initializer() {
                return Err(self.mixed_initializer_error());
            }
            let start = self.current_span().start;
            let name = self.expect_identifier()?;
            self.expect(Token::Assign)?;
            let value = self.parse_expression_internal()?;
            fields.push(FieldInit {
                name,
                value,
                span: self.span_from(start),
            });

            if !self.match_token(&Token::Comma) || self.check(&Token::RightBrace) {
                break;
            }
        }
        Ok(fields)
    }

    fn at_named_initializer(&self) -> bool {
        self.check_identifier() && self.check_at(1, &Token::Assign)
    }

    fn mixed_initializer_error(&self) -> ParserError {
        ParserError::AmbiguousConstruct {
            message: "構造体リテラルで位置指定と名前付きの初期化子は混在できません"
                .to_string(),
            span: self.current_span(),
        }
    }

    /// 配列リテラルの `[ ... ]` を解析（要素は0個か1個）
    pub(crate) fn parse_array_literal(
        &mut self,
        type_path: Vec<String>,
        start: usize,
    ) -> ParseResult<Expression> {
        self.expect(Token::LeftBracket)?;

        let element = if self.check(&Token::RightBracket) {
            None
        } else {
            Some(Box::new(self.parse_expression_internal()?))
        };

        if self.check(&Token::Comma) {
            return Err(self.error("配列リテラルには要素を1つまでしか書けません"));
        }

        self.expect(Token::RightBracket)?;
        Ok(Expression::ArrayLiteral(ArrayLiteral {
            type_path,
            element,
            span: self.span_from(start),
        }))
    }

    /// 引数リスト `( ... )` を解析
    ///
    /// 位置指定・名前付き引数は自由に並べられるが、`..name` は最後に限る。
    pub(crate) fn parse_argument_list(&mut self) -> ParseResult<Vec<Argument>> {
        self.expect(Token::LeftParen)?;

        let mut arguments = Vec::new();
        if !self.check(&Token::RightParen) {
            loop {
                let start = self.current_span().start;

                if self.match_token(&Token::DotDot) {
                    let name = self.expect_identifier()?;
                    arguments.push(Argument::Spread(SpreadArgument {
                        name,
                        span: self.span_from(start),
                    }));
                    if self.check(&Token::Comma) {
                        return Err(ParserError::AmbiguousConstruct {
                            message: "`..` による展開は最後の引数でなければなりません"
                                .to_string(),
                            span: self.span_from(start),
                        });
                    }
                    break;
                }

                if self.check_identifier() && self.check_at(1, &Token::Assign) {
                    let name = self.expect_identifier()?;
                    self.advance();
                    let value = self.parse_expression_internal()?;
                    arguments.push(Argument::Named(NamedArgument {
                        name,
                        value,
                        span: self.span_from(start),
                    }));
                } else {
                    arguments.push(Argument::Positional(self.parse_expression_internal()?));
                }

                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        self.expect(Token::RightParen)?;
        Ok(arguments)
    }
}
