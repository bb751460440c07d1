//! 統一的なエラーハンドリングモジュール
//!
//! 字句解析・構文解析のエラーはすべて診断情報として蓄積され、
//! 処理を中断させることはない。

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic as CodespanDiagnostic, Label};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 構文解析系の統一エラー型
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyntaxError {
    /// レキサーエラー
    #[error("字句解析エラー: {0}")]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error("構文解析エラー: {0}")]
    Parser(#[from] ParserError),

    /// ファイルI/Oエラー
    #[error("ファイル操作エラー: {0}")]
    Io(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

impl SyntaxError {
    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::Lexer(e) => Some(e.span()),
            SyntaxError::Parser(e) => Some(e.span()),
            SyntaxError::Io(_) | SyntaxError::Other(_) => None,
        }
    }
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LexerError {
    #[error("認識できない文字: '{text}'")]
    InvalidCharacter { text: String, span: Span },

    #[error("未終了の文字列リテラル")]
    UnterminatedString { span: Span },

    #[error("未終了のブロックコメント")]
    UnterminatedBlockComment { span: Span },

    #[error("不正な数値リテラル: {text}")]
    InvalidNumber { text: String, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::InvalidCharacter { span, .. }
            | LexerError::UnterminatedString { span }
            | LexerError::UnterminatedBlockComment { span }
            | LexerError::InvalidNumber { span, .. } => *span,
        }
    }
}

/// パーサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParserError {
    #[error("予期しないトークン: {expected}を期待しましたが、{found}が見つかりました")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("{expected}がありません")]
    MissingToken { expected: String, span: Span },

    #[error("予期しない入力の終了: {expected}を期待していました")]
    UnexpectedEof { expected: String, span: Span },

    #[error("曖昧または認識できない構文: {message}")]
    AmbiguousConstruct { message: String, span: Span },

    #[error("不正な構文: {message}")]
    InvalidSyntax { message: String, span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::MissingToken { span, .. }
            | ParserError::UnexpectedEof { span, .. }
            | ParserError::AmbiguousConstruct { span, .. }
            | ParserError::InvalidSyntax { span, .. } => *span,
        }
    }
}

/// 診断の重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// 字句エラー、または入力が途中で終わった
    Error,
    /// 構文エラーの後、同期点から解析を再開した
    Recovered,
}

/// スパンと重大度を伴うエラー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub error: SyntaxError,
    pub severity: Severity,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(error: impl Into<SyntaxError>, severity: Severity) -> Self {
        let error = error.into();
        let span = error.span().unwrap_or_else(Span::dummy);
        Self {
            error,
            severity,
            span,
        }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_codespan(&self, file_id: usize) -> CodespanDiagnostic<usize> {
        let label = match &self.error {
            SyntaxError::Lexer(LexerError::InvalidCharacter { .. }) => {
                Some("ここに不正な文字があります")
            }
            SyntaxError::Lexer(LexerError::UnterminatedString { .. }) => {
                Some("文字列が閉じられていません")
            }
            SyntaxError::Lexer(LexerError::UnterminatedBlockComment { .. }) => {
                Some("コメントが閉じられていません")
            }
            SyntaxError::Parser(ParserError::MissingToken { .. }) => Some("ここに必要です"),
            _ => None,
        };

        let mut primary = Label::primary(file_id, self.span.start..self.span.end);
        if let Some(label) = label {
            primary = primary.with_message(label);
        }

        let diagnostic = CodespanDiagnostic::error()
            .with_message(self.message())
            .with_labels(vec![primary]);

        match self.severity {
            Severity::Error => diagnostic,
            Severity::Recovered => {
                diagnostic.with_notes(vec!["以降の解析は同期点から再開しました".to_string()])
            }
        }
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: impl Into<SyntaxError>, severity: Severity) {
        self.diagnostics.push(Diagnostic::new(error, severity));
    }

    /// 別のコレクターの内容を取り込む
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// すべての診断を取得
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 開始位置順に並べた診断を取り出す
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| (d.span.start, d.span.end));
        self.diagnostics
    }
}

/// Result型のエイリアス
pub type SyntaxResult<T> = Result<T, SyntaxError>;

impl From<std::io::Error> for SyntaxError {
    fn from(e: std::io::Error) -> Self {
        SyntaxError::Io(e.to_string())
    }
}
