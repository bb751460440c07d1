//! ソースファイル構造

use serde::{Deserialize, Serialize};

use super::{Definition, Span};

/// ASTのルートノード（1つの翻訳単位を表す）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// ソース順に並んだトップレベル定義
    pub definitions: Vec<Definition>,
    pub span: Span,
}
