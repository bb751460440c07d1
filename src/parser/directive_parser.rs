//! ディレクティブの解析
//!
//! ディレクティブは評価せず、構造だけを木に記録する。

use crate::ast::*;
use crate::lexer::Token;

use super::{ParseContext, ParseResult, Parser};

impl Parser {
    /// `#` で始まる定義を解析
    pub(super) fn parse_directive_definition(&mut self) -> ParseResult<Definition> {
        let start = self.current_span().start;
        let name = match self.current_token() {
            Some(Token::Directive(name)) => name.clone(),
            _ => return Err(self.unexpected("ディレクティブ")),
        };

        match DirectiveKind::classify(&name) {
            DirectiveKind::Import | DirectiveKind::Load => {
                Ok(Definition::Import(self.parse_import(None, start)?))
            }
            DirectiveKind::ScopeModule | DirectiveKind::ScopeFile | DirectiveKind::ScopeExport => {
                let kind = match DirectiveKind::classify(&name) {
                    DirectiveKind::ScopeFile => ScopeKind::File,
                    DirectiveKind::ScopeExport => ScopeKind::Export,
                    _ => ScopeKind::Module,
                };
                self.advance();
                self.match_token(&Token::Semicolon);
                Ok(Definition::Scope(ScopeMarker {
                    kind,
                    span: self.span_from(start),
                }))
            }
            DirectiveKind::If => self.parse_if_directive(),
            DirectiveKind::Run => {
                self.advance();
                let body = if self.check(&Token::LeftBrace) {
                    RunBody::Block(self.parse_block()?)
                } else {
                    RunBody::Expression(self.parse_expression_internal()?)
                };
                self.match_token(&Token::Semicolon);
                Ok(Definition::Run(RunDirective {
                    body,
                    span: self.span_from(start),
                }))
            }
            DirectiveKind::Insert => {
                self.advance();
                let name = self.expect_identifier()?;
                self.expect(Token::Semicolon)?;
                Ok(Definition::Insert(InsertDirective {
                    name,
                    span: self.span_from(start),
                }))
            }
            DirectiveKind::Assert => {
                self.advance();
                let arguments = self.parse_argument_list()?;
                self.expect(Token::Semicolon)?;
                Ok(Definition::Assert(AssertDirective {
                    arguments,
                    span: self.span_from(start),
                }))
            }
            _ => {
                self.advance();
                self.match_token(&Token::Semicolon);
                Ok(Definition::Directive(DirectiveNode {
                    name,
                    arguments: Vec::new(),
                    span: self.span_from(start),
                }))
            }
        }
    }

    /// 文の位置にあるディレクティブを解析
    pub(super) fn parse_directive_statement(&mut self) -> ParseResult<Statement> {
        self.parse_directive_definition().map(Statement::from)
    }

    /// `#if cond { ... } else { ... }` または `#if value == { ... }`
    fn parse_if_directive(&mut self) -> ParseResult<Definition> {
        let start = self.current_span().start;
        self.advance();

        let complete = self.check_directive("complete");
        if complete {
            self.advance();
        }

        let condition = self.parse_expression_internal()?;

        if self.check(&Token::EqEq) && self.check_at(1, &Token::LeftBrace) {
            self.advance();
            let body = self.parse_conditional_branch()?;
            return Ok(Definition::IfCase(IfCaseDirective {
                condition,
                complete,
                body,
                span: self.span_from(start),
            }));
        }

        if complete {
            return Err(self.error("#complete は `#if x == {` の形でのみ使えます"));
        }

        self.match_token(&Token::Then);
        let then_branch = self.parse_conditional_branch()?;

        let else_branch = if self.match_token(&Token::Else) {
            if self.check_directive("if") {
                Some(vec![Statement::from(self.parse_if_directive()?)])
            } else {
                Some(self.parse_conditional_branch()?)
            }
        } else {
            None
        };

        Ok(Definition::If(IfDirective {
            condition,
            then_branch,
            else_branch,
            span: self.span_from(start),
        }))
    }

    /// `#if` の分岐（波括弧で囲まれた並びか、単一の要素）
    ///
    /// 要素は囲んでいる文脈と同じ規則で読む。
    fn parse_conditional_branch(&mut self) -> ParseResult<Vec<Statement>> {
        if self.check(&Token::LeftBrace) {
            let context = self.context();
            let (items, _) = self.parse_braced_items(context, |p| p.parse_conditional_item())?;
            return Ok(items);
        }
        Ok(vec![self.parse_conditional_item()?])
    }

    fn parse_conditional_item(&mut self) -> ParseResult<Statement> {
        match self.context() {
            ParseContext::TopLevel | ParseContext::EnumBody if !self.check(&Token::Case) => {
                self.parse_definition().map(Statement::from)
            }
            _ => self.parse_statement_internal(),
        }
    }
}
