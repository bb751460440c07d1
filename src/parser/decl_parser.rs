//! 定義（インポート、プロシージャ、構造体、列挙型、定数、変数）の解析

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::Token;

use super::stmt_parser::assign_op;
use super::{ParseContext, ParseResult, Parser};

impl Parser {
    /// トップレベルやコンテナ本体の定義を1つ解析
    pub(super) fn parse_definition(&mut self) -> ParseResult<Definition> {
        match self.current_token() {
            Some(Token::Directive(_)) => self.parse_directive_definition(),
            Some(Token::Identifier(_)) if self.at_binding() => match self.parse_binding()? {
                Statement::Declaration(definition) => Ok(definition),
                other => Err(ParserError::InvalidSyntax {
                    message: "定義が必要な位置に代入文があります".to_string(),
                    span: other.span(),
                }),
            },
            _ => Err(self.unexpected("定義")),
        }
    }

    /// `ident ::`、`ident :=`、`ident :` のいずれかで始まるか
    pub(super) fn at_binding(&self) -> bool {
        self.check_identifier()
            && (self.check_at(1, &Token::DoubleColon)
                || self.check_at(1, &Token::ColonAssign)
                || self.check_at(1, &Token::Colon))
    }

    /// 名前の束縛を解析する
    ///
    /// `name :: ...` は定数や型・プロシージャの定義、`name := v` と
    /// `name : T = v` は変数、`name : T : v` は型付き定数になる。
    /// `name : T += v` のような型注釈付きの複合代入は代入文として返す。
    pub(super) fn parse_binding(&mut self) -> ParseResult<Statement> {
        let name_span = self.current_span();
        let start = name_span.start;
        let name = self.expect_identifier()?;

        if self.match_token(&Token::DoubleColon) {
            let definition = self.parse_named_definition(name, start)?;
            return Ok(Statement::Declaration(definition));
        }

        if self.match_token(&Token::ColonAssign) {
            let value = self.parse_expression_internal()?;
            self.expect(Token::Semicolon)?;
            return Ok(Statement::Declaration(Definition::Variable(Variable {
                name,
                ty: None,
                value: Some(value),
                span: self.span_from(start),
            })));
        }

        self.expect(Token::Colon)?;
        let ty = self.parse_type()?;

        let compound = self
            .current_token()
            .and_then(assign_op)
            .filter(|op| *op != AssignOp::Assign);
        if let Some(op) = compound {
            self.advance();
            let value = self.parse_expression_internal()?;
            self.expect(Token::Semicolon)?;
            return Ok(Statement::Assignment(AssignStatement {
                target: Expression::Identifier(Identifier {
                    name,
                    span: name_span,
                }),
                annotation: Some(ty),
                op,
                value,
                span: self.span_from(start),
            }));
        }

        match self.current_token() {
            Some(Token::Colon) => {
                self.advance();
                let value = self.parse_expression_internal()?;
                self.expect(Token::Semicolon)?;
                Ok(Statement::Declaration(Definition::Constant(Constant {
                    name,
                    ty: Some(ty),
                    value: ConstantValue::Expression(value),
                    span: self.span_from(start),
                })))
            }
            Some(Token::Assign) => {
                self.advance();
                let value = self.parse_expression_internal()?;
                self.expect(Token::Semicolon)?;
                Ok(Statement::Declaration(Definition::Variable(Variable {
                    name,
                    ty: Some(ty),
                    value: Some(value),
                    span: self.span_from(start),
                })))
            }
            Some(Token::Semicolon) => {
                self.advance();
                Ok(Statement::Declaration(Definition::Variable(Variable {
                    name,
                    ty: Some(ty),
                    value: None,
                    span: self.span_from(start),
                })))
            }
            _ => Err(self.unexpected("`:`、`=`、`;` のいずれか")),
        }
    }

    /// `name ::` の後に続く定義を解析
    fn parse_named_definition(&mut self, name: String, start: usize) -> ParseResult<Definition> {
        match self.current_token() {
            Some(Token::Directive(directive))
                if directive == "import" || directive == "load" =>
            {
                Ok(Definition::Import(self.parse_import(Some(name), start)?))
            }
            Some(Token::Struct) => Ok(Definition::Struct(self.parse_struct_definition(name, start)?)),
            Some(Token::Enum) | Some(Token::EnumFlags) => {
                Ok(Definition::Enum(self.parse_enum_definition(name, start)?))
            }
            Some(Token::Inline) => Ok(Definition::Proc(self.parse_procedure(name, start)?)),
            Some(Token::LeftParen) if self.looks_like_procedure_at(0) => {
                Ok(Definition::Proc(self.parse_procedure(name, start)?))
            }
            Some(Token::Directive(directive))
                if directive == "code" && self.check_at(1, &Token::LeftBrace) =>
            {
                self.advance();
                let block = self.parse_block()?;
                self.match_token(&Token::Semicolon);
                Ok(Definition::Constant(Constant {
                    name,
                    ty: None,
                    value: ConstantValue::Code(block),
                    span: self.span_from(start),
                }))
            }
            _ => {
                let value = self.parse_expression_internal()?;
                self.expect(Token::Semicolon)?;
                Ok(Definition::Constant(Constant {
                    name,
                    ty: None,
                    value: ConstantValue::Expression(value),
                    span: self.span_from(start),
                }))
            }
        }
    }

    /// `offset` の位置の `(` がパラメータリストの始まりに見えるか
    ///
    /// `()`、`(using`、`($`、`(name :`、`(name :=` をパラメータリストと
    /// みなす。それ以外は括弧式。
    pub(super) fn looks_like_procedure_at(&self, offset: usize) -> bool {
        if !self.check_at(offset, &Token::LeftParen) {
            return false;
        }
        match self.peek(offset + 1) {
            Some(Token::RightParen) | Some(Token::Using) | Some(Token::Dollar) => true,
            Some(Token::Identifier(_)) => {
                self.check_at(offset + 2, &Token::Colon)
                    || self.check_at(offset + 2, &Token::ColonAssign)
            }
            _ => false,
        }
    }

    /// `name ::` の後が式ではなく定義の始まりか
    fn is_definition_head(&self, offset: usize) -> bool {
        match self.peek(offset) {
            Some(Token::Struct) | Some(Token::Enum) | Some(Token::EnumFlags) | Some(Token::Inline) => {
                true
            }
            Some(Token::Directive(name)) => {
                matches!(name.as_str(), "import" | "load" | "code")
            }
            Some(Token::LeftParen) => self.looks_like_procedure_at(offset),
            _ => false,
        }
    }

    /// インポートを解析
    pub(super) fn parse_import(
        &mut self,
        alias: Option<String>,
        start: usize,
    ) -> ParseResult<ImportDirective> {
        let kind = if self.check_directive("load") {
            ImportKind::Load
        } else {
            ImportKind::Import
        };
        self.advance();
        let path = self.expect_string()?;

        // 空の `()` は読み捨てる
        if self.check(&Token::LeftParen) && self.check_at(1, &Token::RightParen) {
            self.advance();
            self.advance();
        }

        let mut config = Vec::new();
        if self.match_token(&Token::LeftParen) {
            loop {
                let config_start = self.current_span().start;
                let name = self.expect_identifier()?;
                self.expect(Token::Assign)?;
                let value = self.parse_expression_internal()?;
                config.push(ImportConfig {
                    name,
                    value,
                    span: self.span_from(config_start),
                });
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            self.expect(Token::RightParen)?;
        }

        self.expect(Token::Semicolon)?;
        log::trace!("import {:?} as {:?}", path, alias);

        Ok(ImportDirective {
            alias,
            kind,
            path,
            config,
            span: self.span_from(start),
        })
    }

    /// プロシージャ定義を解析
    fn parse_procedure(&mut self, name: String, start: usize) -> ParseResult<ProcDefinition> {
        let is_inline = self.match_token(&Token::Inline);
        let parameters = self.parse_parameter_list()?;
        let returns = self.parse_return_clause()?;
        let directives = self.parse_modifiers();

        // 本体のない宣言（`#foreign` など）は `;` で終わる
        let body = if self.match_token(&Token::Semicolon) {
            None
        } else {
            Some(self.parse_block()?)
        };

        Ok(ProcDefinition {
            name,
            is_inline,
            parameters,
            returns,
            directives,
            body,
            span: self.span_from(start),
        })
    }

    /// パラメータリスト `( ... )` を解析
    pub(super) fn parse_parameter_list(&mut self) -> ParseResult<Vec<Parameter>> {
        self.expect(Token::LeftParen)?;

        let parameters = self.with_context(ParseContext::ParameterList, |p| {
            let mut parameters = Vec::new();
            while !p.check(&Token::RightParen) {
                parameters.push(p.parse_parameter()?);
                if !p.match_token(&Token::Comma) {
                    break;
                }
            }
            Ok::<_, ParserError>(parameters)
        })?;

        self.expect(Token::RightParen)?;
        Ok(parameters)
    }

    /// パラメータを解析
    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let start = self.current_span().start;
        let is_using = self.match_token(&Token::Using);
        let is_baked = self.match_token(&Token::Dollar);
        let name = self.expect_identifier()?;

        if self.match_token(&Token::ColonAssign) {
            let default = self.parse_expression_internal()?;
            return Ok(Parameter {
                name,
                ty: None,
                default: Some(default),
                is_using,
                is_baked,
                is_variadic: false,
                span: self.span_from(start),
            });
        }

        self.expect(Token::Colon)?;
        let is_variadic = self.match_token(&Token::DotDot);
        let ty = self.parse_type()?;
        let default = if self.match_token(&Token::Assign) {
            Some(self.parse_expression_internal()?)
        } else {
            None
        };

        Ok(Parameter {
            name,
            ty: Some(ty),
            default,
            is_using,
            is_baked,
            is_variadic,
            span: self.span_from(start),
        })
    }

    /// `-> T` または `-> (a: T, b: U = v)` を解析
    pub(super) fn parse_return_clause(&mut self) -> ParseResult<Vec<ReturnType>> {
        if !self.match_token(&Token::Arrow) {
            return Ok(Vec::new());
        }

        if !self.match_token(&Token::LeftParen) {
            return Ok(vec![self.parse_return_type()?]);
        }

        let mut returns = Vec::new();
        while !self.check(&Token::RightParen) {
            returns.push(self.parse_return_type()?);
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.expect(Token::RightParen)?;
        Ok(returns)
    }

    fn parse_return_type(&mut self) -> ParseResult<ReturnType> {
        let start = self.current_span().start;

        let name = if self.check_identifier() && self.check_at(1, &Token::Colon) {
            let name = self.expect_identifier()?;
            self.advance();
            Some(name)
        } else {
            None
        };

        let ty = self.parse_type()?;
        let default = if self.match_token(&Token::Assign) {
            Some(self.parse_expression_internal()?)
        } else {
            None
        };

        Ok(ReturnType {
            name,
            ty,
            default,
            span: self.span_from(start),
        })
    }

    /// 定義の後に続く `#directive [argument...]` の並び
    pub(super) fn parse_modifiers(&mut self) -> Vec<DirectiveNode> {
        let mut directives = Vec::new();

        while let Some(Token::Directive(name)) = self.current_token() {
            let name = name.clone();
            let start = self.current_span().start;
            self.advance();

            let mut arguments = Vec::new();
            while let Some(Token::Identifier(text) | Token::String(text)) = self.current_token() {
                arguments.push(text.clone());
                self.advance();
            }

            directives.push(DirectiveNode {
                name,
                arguments,
                span: self.span_from(start),
            });
        }

        directives
    }

    /// 構造体定義を解析
    fn parse_struct_definition(&mut self, name: String, start: usize) -> ParseResult<StructDefinition> {
        self.expect(Token::Struct)?;

        let parameters = if self.check(&Token::LeftParen) {
            self.parse_parameter_list()?
        } else {
            Vec::new()
        };

        let (body, _) = self.parse_braced_items(ParseContext::StructBody, |p| p.parse_body_item())?;
        self.match_token(&Token::Semicolon);

        Ok(StructDefinition {
            name,
            parameters,
            body,
            span: self.span_from(start),
        })
    }

    /// 構造体・共用体本体の要素を解析
    ///
    /// `name :` で始まればフィールド、それ以外は文として読む。
    pub(super) fn parse_body_item(&mut self) -> ParseResult<BodyItem> {
        if self.check_identifier() && self.check_at(1, &Token::Colon) {
            return self.parse_struct_field();
        }
        Ok(BodyItem::Statement(self.parse_statement_internal()?))
    }

    fn parse_struct_field(&mut self) -> ParseResult<BodyItem> {
        let start = self.current_span().start;
        let name = self.expect_identifier()?;
        self.expect(Token::Colon)?;

        if self.check(&Token::Union) {
            let union_start = self.current_span().start;
            self.advance();
            let (body, _) =
                self.parse_braced_items(ParseContext::UnionBody, |p| p.parse_body_item())?;
            let union = UnionDefinition {
                body,
                span: self.span_from(union_start),
            };
            self.match_token(&Token::Semicolon);
            return Ok(BodyItem::Field(StructField {
                name,
                ty: FieldType::Union(union),
                default: None,
                span: self.span_from(start),
            }));
        }

        let ty = self.parse_type()?;

        // `name : T : value;` は型付き定数
        if self.match_token(&Token::Colon) {
            let value = self.parse_expression_internal()?;
            self.expect(Token::Semicolon)?;
            return Ok(BodyItem::Statement(Statement::Declaration(
                Definition::Constant(Constant {
                    name,
                    ty: Some(ty),
                    value: ConstantValue::Expression(value),
                    span: self.span_from(start),
                }),
            )));
        }

        let default = if self.match_token(&Token::Assign) {
            Some(self.parse_expression_internal()?)
        } else {
            None
        };
        self.expect(Token::Semicolon)?;

        Ok(BodyItem::Field(StructField {
            name,
            ty: FieldType::Type(ty),
            default,
            span: self.span_from(start),
        }))
    }

    /// 列挙型定義を解析
    fn parse_enum_definition(&mut self, name: String, start: usize) -> ParseResult<EnumDefinition> {
        let is_flags = self.check(&Token::EnumFlags);
        self.advance();

        let directive = match self.current_token() {
            Some(Token::Directive(directive)) => {
                let node = DirectiveNode {
                    name: directive.clone(),
                    arguments: Vec::new(),
                    span: self.current_span(),
                };
                self.advance();
                Some(node)
            }
            _ => None,
        };

        let backing_type = match self.current_token() {
            Some(Token::Identifier(type_name)) => {
                let span = self.current_span();
                match PrimitiveKind::from_name(type_name) {
                    Some(kind) if kind.is_integer() => {
                        self.advance();
                        Some(PrimitiveType { kind, span })
                    }
                    _ => return Err(self.error("列挙型の基底型は整数型でなければなりません")),
                }
            }
            _ => None,
        };

        let (body, _) = self.parse_braced_items(ParseContext::EnumBody, |p| p.parse_enum_item())?;
        self.match_token(&Token::Semicolon);

        Ok(EnumDefinition {
            name,
            is_flags,
            directive,
            backing_type,
            body,
            span: self.span_from(start),
        })
    }

    /// 列挙子 `Name;` / `Name :: value;`、または入れ子の定義
    fn parse_enum_item(&mut self) -> ParseResult<EnumItem> {
        let start = self.current_span().start;

        if self.check_identifier() && self.check_at(1, &Token::Semicolon) {
            let name = self.expect_identifier()?;
            self.advance();
            return Ok(EnumItem::Value(Enumerator {
                name,
                value: None,
                span: self.span_from(start),
            }));
        }

        if self.check_identifier()
            && self.check_at(1, &Token::DoubleColon)
            && !self.is_definition_head(2)
        {
            let name = self.expect_identifier()?;
            self.advance();
            let value = self.parse_expression_internal()?;
            self.expect(Token::Semicolon)?;
            return Ok(EnumItem::Value(Enumerator {
                name,
                value: Some(value),
                span: self.span_from(start),
            }));
        }

        Ok(EnumItem::Definition(self.parse_definition()?))
    }
}
