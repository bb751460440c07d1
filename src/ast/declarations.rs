//! 定義の定義

use serde::{Deserialize, Serialize};

use super::{
    AssertDirective, Block, DirectiveNode, Expression, IfCaseDirective, IfDirective,
    InsertDirective, PrimitiveType, RunDirective, Span, Statement, Type,
};

/// トップレベルおよびコンテナ本体に現れる定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Definition {
    Import(ImportDirective),
    Proc(ProcDefinition),
    Struct(StructDefinition),
    Enum(EnumDefinition),
    Constant(Constant),
    Variable(Variable),
    Scope(ScopeMarker),
    If(IfDirective),
    IfCase(IfCaseDirective),
    Run(RunDirective),
    Assert(AssertDirective),
    Insert(InsertDirective),
    Directive(DirectiveNode),
}

impl Definition {
    pub fn span(&self) -> Span {
        match self {
            Definition::Import(d) => d.span,
            Definition::Proc(d) => d.span,
            Definition::Struct(d) => d.span,
            Definition::Enum(d) => d.span,
            Definition::Constant(d) => d.span,
            Definition::Variable(d) => d.span,
            Definition::Scope(d) => d.span,
            Definition::If(d) => d.span,
            Definition::IfCase(d) => d.span,
            Definition::Run(d) => d.span,
            Definition::Assert(d) => d.span,
            Definition::Insert(d) => d.span,
            Definition::Directive(d) => d.span,
        }
    }

    /// 名前を束縛する定義ならその名前
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Import(d) => d.alias.as_deref(),
            Definition::Proc(d) => Some(&d.name),
            Definition::Struct(d) => Some(&d.name),
            Definition::Enum(d) => Some(&d.name),
            Definition::Constant(d) => Some(&d.name),
            Definition::Variable(d) => Some(&d.name),
            _ => None,
        }
    }
}

/// `#import` / `#load`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDirective {
    /// `Name :: #import "..."` の `Name`
    pub alias: Option<String>,
    pub kind: ImportKind,
    pub path: String,
    pub config: Vec<ImportConfig>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportKind {
    Import,
    Load,
}

/// `#import "Module"(NAME = value)` の設定項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    pub name: String,
    pub value: Expression,
    pub span: Span,
}

/// プロシージャ定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcDefinition {
    pub name: String,
    pub is_inline: bool,
    pub parameters: Vec<Parameter>,
    pub returns: Vec<ReturnType>,
    /// `#expand` や `#foreign libc` などの修飾
    pub directives: Vec<DirectiveNode>,
    /// 本体を持たない宣言（`#foreign` など）では `None`
    pub body: Option<Block>,
    pub span: Span,
}

/// パラメータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// `name := default` の形では `None`
    pub ty: Option<Type>,
    pub default: Option<Expression>,
    pub is_using: bool,
    /// `$name`
    pub is_baked: bool,
    /// `name: .. T`
    pub is_variadic: bool,
    pub span: Span,
}

/// 戻り値の型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnType {
    pub name: Option<String>,
    pub ty: Type,
    pub default: Option<Expression>,
    pub span: Span,
}

/// 構造体定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDefinition {
    pub name: String,
    /// `Name :: struct ($T: Type) { ... }` のパラメータ
    pub parameters: Vec<Parameter>,
    pub body: Vec<BodyItem>,
    pub span: Span,
}

/// 構造体・共用体本体の要素（ソース順を保持）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyItem {
    Field(StructField),
    Statement(Statement),
}

impl BodyItem {
    pub fn span(&self) -> Span {
        match self {
            BodyItem::Field(field) => field.span,
            BodyItem::Statement(stmt) => stmt.span(),
        }
    }
}

/// 構造体のフィールド
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    pub ty: FieldType,
    pub default: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    Type(Type),
    Union(UnionDefinition),
}

/// `union { ... }`（フィールドの型としてのみ現れる）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionDefinition {
    pub body: Vec<BodyItem>,
    pub span: Span,
}

/// 列挙型定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,
    /// `enum_flags`
    pub is_flags: bool,
    pub directive: Option<DirectiveNode>,
    pub backing_type: Option<PrimitiveType>,
    pub body: Vec<EnumItem>,
    pub span: Span,
}

/// 列挙型本体の要素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnumItem {
    Value(Enumerator),
    Definition(Definition),
}

/// 列挙子 `Name;` / `Name :: value;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumerator {
    pub name: String,
    pub value: Option<Expression>,
    pub span: Span,
}

/// 定数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub ty: Option<Type>,
    pub value: ConstantValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValue {
    Expression(Expression),
    /// `name :: #code { ... }`
    Code(Block),
}

/// 変数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub ty: Option<Type>,
    /// `name : T;` では `None`
    pub value: Option<Expression>,
    pub span: Span,
}

/// `#scope_module` / `#scope_file` / `#scope_export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeMarker {
    pub kind: ScopeKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeKind {
    Module,
    File,
    Export,
}
