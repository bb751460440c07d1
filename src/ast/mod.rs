//! Jai ソースの抽象構文木（AST）定義
//!
//! すべてのノードはスパンを持ち、子ノードは名前付きフィールドで保持する。
//! 構文解析が完了した後のツリーは呼び出し側が単独で所有する。

use serde::{Deserialize, Serialize};

mod declarations;
mod directives;
mod expressions;
mod program;
mod statements;
mod types;

pub use declarations::*;
pub use directives::*;
pub use expressions::*;
pub use program::*;
pub use statements::*;
pub use types::*;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    /// `self` の開始から `other` の終了までを覆うスパン
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
