//! 型の解析

use crate::ast::*;
use crate::lexer::Token;

use super::{ParseContext, ParseResult, Parser};

impl Parser {
    /// 型を解析
    pub(super) fn parse_type(&mut self) -> ParseResult<Type> {
        let start = self.current_span().start;

        match self.current_token() {
            // ポリモーフィック型 `$T`
            Some(Token::Dollar) => {
                self.advance();
                let name = self.expect_identifier()?;
                Ok(Type::Named(NamedType {
                    path: vec![name],
                    polymorphic: true,
                    span: self.span_from(start),
                }))
            }
            Some(Token::Identifier(_)) => self.parse_named_type(),
            Some(Token::LeftBracket) => self.parse_array_type(),
            Some(Token::Star) => {
                self.advance();
                let pointee = self.parse_type()?;
                Ok(Type::Pointer(PointerType {
                    pointee: Box::new(pointee),
                    span: self.span_from(start),
                }))
            }
            Some(Token::Struct) => {
                self.advance();
                let (body, _) =
                    self.parse_braced_items(ParseContext::StructBody, |p| p.parse_body_item())?;
                Ok(Type::InlineStruct(InlineStructType {
                    body,
                    span: self.span_from(start),
                }))
            }
            Some(Token::LeftParen) => self.parse_proc_type(),
            _ => Err(self.unexpected("型")),
        }
    }

    /// 基本型または `Module.Type` のような修飾名
    fn parse_named_type(&mut self) -> ParseResult<Type> {
        let start = self.current_span().start;
        let name = self.expect_identifier()?;

        if !self.check(&Token::Dot) {
            if let Some(kind) = PrimitiveKind::from_name(&name) {
                return Ok(Type::Primitive(PrimitiveType {
                    kind,
                    span: self.span_from(start),
                }));
            }
        }

        let mut path = vec![name];
        while self.check(&Token::Dot) && matches!(self.peek(1), Some(Token::Identifier(_))) {
            self.advance();
            path.push(self.expect_identifier()?);
        }

        Ok(Type::Named(NamedType {
            path,
            polymorphic: false,
            span: self.span_from(start),
        }))
    }

    /// `[N] T`、`[..] T`、`[] T`
    fn parse_array_type(&mut self) -> ParseResult<Type> {
        let start = self.current_span().start;
        self.expect(Token::LeftBracket)?;

        let size = if self.check(&Token::RightBracket) {
            ArraySize::View
        } else if self.check(&Token::DotDot) && self.check_at(1, &Token::RightBracket) {
            self.advance();
            ArraySize::Dynamic
        } else {
            ArraySize::Fixed(Box::new(self.parse_expression_internal()?))
        };
        self.expect(Token::RightBracket)?;

        let element = self.parse_type()?;
        Ok(Type::Array(ArrayType {
            size,
            element: Box::new(element),
            span: self.span_from(start),
        }))
    }

    /// 名前のないプロシージャ型 `(params) -> returns #modifiers`
    fn parse_proc_type(&mut self) -> ParseResult<Type> {
        let start = self.current_span().start;
        let parameters = self.parse_parameter_list()?;
        let returns = self.parse_return_clause()?;
        let directives = self.parse_modifiers();

        Ok(Type::Proc(ProcType {
            parameters,
            returns,
            directives,
            span: self.span_from(start),
        }))
    }
}
