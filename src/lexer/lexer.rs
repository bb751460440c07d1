//! レキサーのメイン実装

use logos::{Logos, Span};
use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::error::LexerError;

/// エラー報告用の位置情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new() -> Self {
        Position { line: 1, column: 1 }
    }

    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// 位置情報付きトークン
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenWithPosition {
    pub token: Token,
    pub position: Position,
    pub span: Span,
}

impl TokenWithPosition {
    /// このトークンに対応するソースの切り出し
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.clone()).unwrap_or("")
    }
}

/// 字句解析全体の結果
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    /// トリビアとエラートークンを含む全トークン（出現順）
    pub tokens: Vec<TokenWithPosition>,
    pub errors: Vec<LexerError>,
}

/// Jaiのレキサー
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    position: Position,
    input: &'a str,
    errors: Vec<LexerError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            position: Position::new(),
            input,
            errors: Vec::new(),
        }
    }

    /// これまでに記録したエラー
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    /// すべてのトークンを収集（エラーの一覧は捨てる）
    pub fn collect_tokens(self) -> Vec<TokenWithPosition> {
        self.tokenize().tokens
    }

    /// 入力全体をトークン化
    pub fn tokenize(mut self) -> Lexed {
        let tokens: Vec<_> = self.by_ref().collect();
        log::trace!(
            "lexed {} tokens with {} errors",
            tokens.len(),
            self.errors.len()
        );
        Lexed {
            tokens,
            errors: self.errors,
        }
    }

    fn classify_error(&self, span: &Span) -> LexerError {
        let text = self.input.get(span.clone()).unwrap_or("").to_owned();
        let span = span.clone().into();
        if text.starts_with('"') {
            LexerError::UnterminatedString { span }
        } else if text.starts_with("/*") {
            LexerError::UnterminatedBlockComment { span }
        } else if text.starts_with(|c: char| c.is_ascii_digit()) {
            LexerError::InvalidNumber { text, span }
        } else {
            LexerError::InvalidCharacter { text, span }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TokenWithPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let position = self.position;

        for ch in self.input.get(span.clone()).unwrap_or("").chars() {
            self.position.advance(ch);
        }

        let token = match result {
            Ok(token) => token,
            Err(()) => {
                let error = self.classify_error(&span);
                log::debug!("lex error at {:?}: {}", span, error);
                self.errors.push(error);
                Token::Error
            }
        };

        Some(TokenWithPosition {
            token,
            position,
            span,
        })
    }
}

/// `input` を一度にトークン化
pub fn tokenize(input: &str) -> Lexed {
    Lexer::new(input).tokenize()
}
