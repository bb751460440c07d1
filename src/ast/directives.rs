//! ディレクティブの定義
//!
//! ディレクティブは構造として記録するだけで評価はしない。

use serde::{Deserialize, Serialize};

use super::{Argument, Block, Expression, Span, Statement};

/// ディレクティブ名の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectiveKind {
    Import,
    Load,
    ScopeModule,
    ScopeFile,
    ScopeExport,
    If,
    Run,
    Insert,
    Assert,
    Code,
    Char,
    CallerLocation,
    Complete,
    Other,
}

impl DirectiveKind {
    /// `#` を除いた名前から分類する
    pub fn classify(name: &str) -> Self {
        match name {
            "import" => DirectiveKind::Import,
            "load" => DirectiveKind::Load,
            "scope_module" => DirectiveKind::ScopeModule,
            "scope_file" => DirectiveKind::ScopeFile,
            "scope_export" => DirectiveKind::ScopeExport,
            "if" => DirectiveKind::If,
            "run" => DirectiveKind::Run,
            "insert" => DirectiveKind::Insert,
            "assert" => DirectiveKind::Assert,
            "code" => DirectiveKind::Code,
            "char" => DirectiveKind::Char,
            "caller_location" => DirectiveKind::CallerLocation,
            "complete" => DirectiveKind::Complete,
            _ => DirectiveKind::Other,
        }
    }
}

/// 汎用ディレクティブ `#name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveNode {
    pub name: String,
    /// `#foreign libc` の `libc` のような後続の名前や文字列
    pub arguments: Vec<String>,
    pub span: Span,
}

impl DirectiveNode {
    pub fn kind(&self) -> DirectiveKind {
        DirectiveKind::classify(&self.name)
    }
}

/// `#if cond { ... } else { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfDirective {
    pub condition: Expression,
    pub then_branch: Vec<Statement>,
    /// `else #if ...` は1要素の `IfDirective` として入る
    pub else_branch: Option<Vec<Statement>>,
    pub span: Span,
}

/// `#if value == { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfCaseDirective {
    pub condition: Expression,
    pub complete: bool,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// `#run`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDirective {
    pub body: RunBody,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunBody {
    Block(Block),
    Expression(Expression),
}

/// `#insert name;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertDirective {
    pub name: String,
    pub span: Span,
}

/// `#assert(args);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertDirective {
    pub arguments: Vec<Argument>,
    pub span: Span,
}
