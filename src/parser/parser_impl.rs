//! メインパーサー構造とユーティリティ

use crate::ast::*;
use crate::error::{Diagnostic, ErrorCollector, ParserError};
use crate::lexer::{Token, TokenWithPosition};

use super::{ParseContext, ParseError, ParseResult};

/// Jaiパーサー
pub struct Parser {
    pub(super) tokens: Vec<TokenWithPosition>,
    pub(super) current: usize,
    pub(super) contexts: Vec<ParseContext>,
    pub(super) errors: ErrorCollector,
    /// 入力の途中終了を報告済みか
    pub(super) truncated: bool,
    /// 入力末尾のバイト位置
    pub(super) end_offset: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPosition>) -> Self {
        let end_offset = tokens.last().map(|t| t.span.end).unwrap_or(0);
        // トリビアは意味を持たないのでフィルタリング。エラートークンは
        // レキサーが報告済み
        let tokens: Vec<_> = tokens
            .into_iter()
            .filter(|t| !t.token.is_trivia() && !matches!(t.token, Token::Error))
            .collect();
        Self {
            tokens,
            current: 0,
            contexts: vec![ParseContext::TopLevel],
            errors: ErrorCollector::new(),
            truncated: false,
            end_offset,
        }
    }

    /// ソースファイル全体を解析
    ///
    /// 構文エラーは診断として記録され、取得できた部分までのツリーが返る。
    pub fn parse(&mut self) -> SourceFile {
        log::debug!("parsing {} tokens", self.tokens.len());

        let mut definitions = Vec::new();
        while !self.is_at_end() {
            let start = self.current;
            match self.parse_definition() {
                Ok(definition) => definitions.push(definition),
                Err(e) => self.recover(e, start),
            }
        }

        log::debug!(
            "parsed {} definitions with {} diagnostics",
            definitions.len(),
            self.errors.error_count()
        );

        SourceFile {
            definitions,
            span: Span::new(0, self.end_offset),
        }
    }

    /// 単一の式を解析
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expression_internal()
    }

    /// 単一の文を解析
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.with_context(ParseContext::Block, |p| p.parse_statement_internal())
    }

    /// これまでに記録された診断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.errors.diagnostics()
    }

    /// 診断を位置順に取り出す
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.errors.into_sorted()
    }

    // ==================== ユーティリティメソッド ====================

    /// 現在のトークンを取得
    pub(super) fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|t| &t.token)
    }

    /// 特定のオフセット先のトークンを取得
    pub(super) fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.current + offset).map(|t| &t.token)
    }

    /// 現在のスパンを取得（終端では入力末尾の空スパン）
    pub(super) fn current_span(&self) -> Span {
        self.tokens
            .get(self.current)
            .map(|t| t.span.clone().into())
            .unwrap_or_else(|| Span::new(self.end_offset, self.end_offset))
    }

    /// 直前のトークンの終了位置
    pub(super) fn previous_end(&self) -> usize {
        if self.current == 0 {
            return 0;
        }
        self.tokens
            .get(self.current - 1)
            .map(|t| t.span.end)
            .unwrap_or(self.end_offset)
    }

    /// 開始位置から現在位置までのスパンを作成
    pub(super) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.previous_end().max(start))
    }

    /// 現在のトークンが直前のトークンより後の行にあるか
    pub(super) fn starts_new_line(&self) -> bool {
        match (
            self.current.checked_sub(1).and_then(|i| self.tokens.get(i)),
            self.tokens.get(self.current),
        ) {
            (Some(prev), Some(cur)) => cur.position.line > prev.position.line,
            _ => false,
        }
    }

    /// 次のトークンに進む
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// 終端に到達したかチェック
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// 特定のトークンをチェック（進まない）
    pub(super) fn check(&self, token_type: &Token) -> bool {
        matches!(self.current_token(), Some(token)
            if std::mem::discriminant(token) == std::mem::discriminant(token_type))
    }

    /// オフセット先のトークンの種類をチェック
    pub(super) fn check_at(&self, offset: usize, token_type: &Token) -> bool {
        matches!(self.peek(offset), Some(token)
            if std::mem::discriminant(token) == std::mem::discriminant(token_type))
    }

    pub(super) fn check_identifier(&self) -> bool {
        matches!(self.current_token(), Some(Token::Identifier(_)))
    }

    /// 指定した名前のディレクティブかチェック
    pub(super) fn check_directive(&self, name: &str) -> bool {
        matches!(self.current_token(), Some(Token::Directive(n)) if n == name)
    }

    /// 特定のトークンにマッチしたら進む
    pub(super) fn match_token(&mut self, token_type: &Token) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, token_type: Token) -> ParseResult<()> {
        if self.check(&token_type) {
            self.advance();
            return Ok(());
        }

        let expected = format!("`{}`", token_type);
        if self.is_at_end() {
            return Err(self.eof_error(expected));
        }

        match token_type {
            // 閉じ記号の欠落は直前のトークンの直後で報告する
            Token::Semicolon | Token::RightBrace | Token::RightParen | Token::RightBracket => {
                let end = self.previous_end();
                Err(ParserError::MissingToken {
                    expected,
                    span: Span::new(end, end),
                })
            }
            _ => Err(self.unexpected(&expected)),
        }
    }

    /// 識別子を期待
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.current_token() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("識別子")),
        }
    }

    /// 名前を期待（`.` の後ではキーワードも名前として扱う）
    pub(super) fn expect_name(&mut self) -> ParseResult<String> {
        if let Some(keyword) = self.current_token().and_then(Token::keyword_text) {
            self.advance();
            return Ok(keyword.to_string());
        }
        self.expect_identifier()
    }

    /// 文字列リテラルを期待
    pub(super) fn expect_string(&mut self) -> ParseResult<String> {
        match self.current_token() {
            Some(Token::String(value)) => {
                let value = value.clone();
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected("文字列リテラル")),
        }
    }

    /// 現在位置の不正な構文エラーを作成
    pub(super) fn error(&self, message: impl Into<String>) -> ParseError {
        ParserError::InvalidSyntax {
            message: message.into(),
            span: self.current_span(),
        }
    }

    /// 予期しないトークンエラーを作成
    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        match self.current_token() {
            Some(token) => ParserError::UnexpectedToken {
                expected: expected.to_string(),
                found: format!("`{}`", token),
                span: self.current_span(),
            },
            None => self.eof_error(expected.to_string()),
        }
    }

    pub(super) fn eof_error(&self, expected: String) -> ParseError {
        ParserError::UnexpectedEof {
            expected,
            span: Span::new(self.end_offset, self.end_offset),
        }
    }

    /// 文脈を積んで `f` を実行する
    pub(super) fn with_context<R>(
        &mut self,
        context: ParseContext,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.contexts.push(context);
        let result = f(self);
        self.contexts.pop();
        result
    }

    /// 最も内側の文脈
    pub(super) fn context(&self) -> ParseContext {
        self.contexts
            .last()
            .copied()
            .unwrap_or(ParseContext::TopLevel)
    }
}
