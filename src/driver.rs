//! 解析パイプラインを管理するモジュール
//!
//! 1つのソースを字句解析・構文解析し、構文木と位置順に並んだ診断を
//! まとめて返す。ファイルごとに状態は独立しているので、別々の
//! ファイルを並行して解析してもよい。

use crate::ast::SourceFile;
use crate::error::{Diagnostic, ErrorCollector, Severity, SyntaxError, SyntaxResult};
use crate::lexer::{tokenize, TokenWithPosition};
use crate::parser::Parser;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 1回の解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutput {
    pub tree: SourceFile,
    /// 開始位置順の診断
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// ソーステキストを解析する
///
/// 失敗はすべて診断として返り、取得できた部分までの木が必ず得られる。
pub fn parse_source(source: &str) -> ParseOutput {
    let lexed = tokenize(source);
    log::debug!(
        "lexed {} tokens, {} lexical errors",
        lexed.tokens.len(),
        lexed.errors.len()
    );

    let mut collector = ErrorCollector::new();
    for error in lexed.errors {
        collector.add_error(error, Severity::Error);
    }

    let mut parser = Parser::new(lexed.tokens);
    let tree = parser.parse();
    collector.extend(parser.into_diagnostics());

    ParseOutput {
        tree,
        diagnostics: collector.into_sorted(),
    }
}

/// 名前付きのソースと、診断を表示するためのファイル表
pub struct SourceUnit {
    pub name: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
}

impl SourceUnit {
    /// ファイルから読み込む
    pub fn from_path<P: AsRef<Path>>(path: P) -> SyntaxResult<Self> {
        let name = path.as_ref().display().to_string();
        let source = fs::read_to_string(path.as_ref()).map_err(|e| {
            SyntaxError::Io(format!("ソースファイルを読み込めません: {}: {}", name, e))
        })?;
        Ok(Self::from_string(&name, source))
    }

    /// 文字列から作成
    pub fn from_string(name: &str, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(name.to_string(), source.clone());
        Self {
            name: name.to_string(),
            source,
            files,
            file_id,
        }
    }

    pub fn parse(&self) -> ParseOutput {
        log::debug!("parsing {}", self.name);
        parse_source(&self.source)
    }

    /// トリビアを含むトークン列
    pub fn tokens(&self) -> Vec<TokenWithPosition> {
        tokenize(&self.source).tokens
    }

    /// 診断情報を標準エラー出力に表示
    pub fn report_diagnostics(&self, diagnostics: &[Diagnostic]) -> SyntaxResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        for diagnostic in diagnostics {
            let rendered = diagnostic.to_codespan(self.file_id);
            codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &rendered)
                .map_err(|e| SyntaxError::Io(format!("診断を出力できません: {}", e)))?;
        }

        Ok(())
    }
}
