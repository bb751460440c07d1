//! 文の解析

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::Token;

use super::{ParseContext, ParseResult, Parser};

impl Parser {
    /// 文を解析（内部実装）
    pub(super) fn parse_statement_internal(&mut self) -> ParseResult<Statement> {
        match self.current_token() {
            Some(Token::Return) => self.parse_return_statement(),
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::For) => self.parse_for_statement(),
            Some(Token::Case) => self.parse_case_statement(),
            Some(Token::Break) => self.parse_break_statement(),
            Some(Token::Continue) => {
                let start = self.current_span().start;
                self.advance();
                self.expect(Token::Semicolon)?;
                Ok(Statement::Continue(ContinueStatement {
                    span: self.span_from(start),
                }))
            }
            Some(Token::Defer) => self.parse_defer_statement(),
            Some(Token::Using) => {
                let start = self.current_span().start;
                self.advance();
                let body = self.parse_statement_internal()?;
                Ok(Statement::Using(UsingStatement {
                    body: Box::new(body),
                    span: self.span_from(start),
                }))
            }
            Some(Token::LeftBrace) => Ok(Statement::Block(self.parse_block()?)),
            Some(Token::Directive(_)) => self.parse_directive_statement(),
            Some(Token::Identifier(_)) if self.at_binding() => self.parse_binding(),
            _ => self.parse_expression_statement(),
        }
    }

    /// ブロックを解析
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        let (statements, span) =
            self.parse_braced_items(ParseContext::Block, |p| p.parse_statement_internal())?;
        Ok(Block { statements, span })
    }

    /// 分岐やループの本体（ブロックまたは単文）
    fn parse_branch(&mut self) -> ParseResult<Statement> {
        if self.check(&Token::LeftBrace) {
            return Ok(Statement::Block(self.parse_block()?));
        }
        self.with_context(ParseContext::Block, |p| p.parse_statement_internal())
    }

    /// return文を解析
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::Return)?;

        let values = if self.check(&Token::Semicolon) {
            ReturnValues::Positional(Vec::new())
        } else if self.at_named_return() {
            let mut named = Vec::new();
            loop {
                if !self.at_named_return() {
                    return Err(self.error("return で位置指定と名前付きの値は混在できません"));
                }
                let value_start = self.current_span().start;
                let name = self.expect_identifier()?;
                self.advance();
                let value = self.parse_expression_internal()?;
                named.push(NamedReturn {
                    name,
                    value,
                    span: self.span_from(value_start),
                });
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            ReturnValues::Named(named)
        } else {
            let mut values = Vec::new();
            loop {
                if self.at_named_return() {
                    return Err(self.error("return で位置指定と名前付きの値は混在できません"));
                }
                values.push(self.parse_expression_internal()?);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            ReturnValues::Positional(values)
        };

        self.expect(Token::Semicolon)?;
        Ok(Statement::Return(ReturnStatement {
            values,
            span: self.span_from(start),
        }))
    }

    fn at_named_return(&self) -> bool {
        self.check_identifier() && self.check_at(1, &Token::Assign)
    }

    /// if文またはif-equality文を解析
    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::If)?;

        let complete = self.check_directive("complete");
        if complete {
            self.advance();
        }

        let condition = self.parse_expression_internal()?;

        // `if x == { case ...; }`
        if self.check(&Token::EqEq) && self.check_at(1, &Token::LeftBrace) {
            self.advance();
            let body = self.parse_block()?;
            return Ok(Statement::IfEquality(IfEqualityStatement {
                condition,
                complete,
                body,
                span: self.span_from(start),
            }));
        }

        if complete {
            return Err(self.error("#complete は `if x == {` の形でのみ使えます"));
        }

        let (condition, parenthesized) = Self::unwrap_parenthesized(condition);
        self.match_token(&Token::Then);
        let then_branch = self.parse_branch()?;

        let else_branch = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_branch()?))
        } else {
            None
        };

        Ok(Statement::If(IfStatement {
            condition,
            parenthesized,
            then_branch: Box::new(then_branch),
            else_branch,
            span: self.span_from(start),
        }))
    }

    /// ループの `label:`
    fn parse_loop_label(&mut self) -> ParseResult<Option<String>> {
        if self.check_identifier() && self.check_at(1, &Token::Colon) {
            let label = self.expect_identifier()?;
            self.advance();
            return Ok(Some(label));
        }
        Ok(None)
    }

    /// while文を解析
    fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::While)?;

        let label = self.parse_loop_label()?;
        let condition = self.parse_expression_internal()?;
        let body = self.parse_branch()?;

        Ok(Statement::While(WhileStatement {
            label,
            condition,
            body: Box::new(body),
            span: self.span_from(start),
        }))
    }

    /// for文を解析
    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::For)?;

        let label = self.parse_loop_label()?;
        let iterable = self.parse_expression_internal()?;
        let body = self.parse_branch()?;

        Ok(Statement::For(ForStatement {
            label,
            iterable,
            body: Box::new(body),
            span: self.span_from(start),
        }))
    }

    /// `case [#directive] [value];`
    fn parse_case_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::Case)?;

        let directive = match self.current_token() {
            Some(Token::Directive(name)) => {
                let node = DirectiveNode {
                    name: name.clone(),
                    arguments: Vec::new(),
                    span: self.current_span(),
                };
                self.advance();
                Some(node)
            }
            _ => None,
        };

        let value = if self.check(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression_internal()?)
        };
        self.expect(Token::Semicolon)?;

        Ok(Statement::Case(CaseStatement {
            directive,
            value,
            span: self.span_from(start),
        }))
    }

    /// `break;`、`break label;`、`break : label;`
    fn parse_break_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::Break)?;

        let label = if self.match_token(&Token::Colon) || self.check_identifier() {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        self.expect(Token::Semicolon)?;

        Ok(Statement::Break(BreakStatement {
            label,
            span: self.span_from(start),
        }))
    }

    /// defer文を解析
    ///
    /// 本体はブロックか、式文・代入文のいずれか。複数の defer は
    /// 登録順のまま木に並ぶ。
    fn parse_defer_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        self.expect(Token::Defer)?;

        let body = if self.check(&Token::LeftBrace) {
            Statement::Block(self.parse_block()?)
        } else {
            self.parse_expression_statement()?
        };

        Ok(Statement::Defer(DeferStatement {
            body: Box::new(body),
            span: self.span_from(start),
        }))
    }

    /// 式文または代入文を解析
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let start = self.current_span().start;
        let expression = self.parse_expression_internal()?;

        if let Some(op) = self.current_token().and_then(assign_op) {
            if !is_assignable(&expression) {
                return Err(ParserError::InvalidSyntax {
                    message: "代入先にできない式です".to_string(),
                    span: expression.span(),
                });
            }
            self.advance();
            let value = self.parse_expression_internal()?;
            self.expect(Token::Semicolon)?;
            return Ok(Statement::Assignment(AssignStatement {
                target: expression,
                annotation: None,
                op,
                value,
                span: self.span_from(start),
            }));
        }

        self.expect(Token::Semicolon)?;
        Ok(Statement::Expression(ExprStatement {
            expression,
            span: self.span_from(start),
        }))
    }
}

/// 代入演算子
pub(super) fn assign_op(token: &Token) -> Option<AssignOp> {
    let op = match token {
        Token::Assign => AssignOp::Assign,
        Token::PlusAssign => AssignOp::AddAssign,
        Token::MinusAssign => AssignOp::SubtractAssign,
        Token::StarAssign => AssignOp::MultiplyAssign,
        Token::SlashAssign => AssignOp::DivideAssign,
        Token::PercentAssign => AssignOp::ModuloAssign,
        _ => return None,
    };
    Some(op)
}

fn is_assignable(target: &Expression) -> bool {
    matches!(
        target,
        Expression::Identifier(_)
            | Expression::MemberAccess(_)
            | Expression::Dereference(_)
            | Expression::ArrayAccess(_)
    )
}
