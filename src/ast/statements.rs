//! 文の定義

use serde::{Deserialize, Serialize};

use super::{
    AssertDirective, Definition, DirectiveNode, Expression, IfCaseDirective, IfDirective,
    InsertDirective, RunDirective, Span, Type,
};

/// 文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Return(ReturnStatement),
    If(IfStatement),
    IfEquality(IfEqualityStatement),
    While(WhileStatement),
    For(ForStatement),
    Case(CaseStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Defer(DeferStatement),
    Using(UsingStatement),
    Expression(ExprStatement),
    Assignment(AssignStatement),
    /// ブロック内に置かれた定数・変数・プロシージャなどの定義
    Declaration(Definition),
    Block(Block),
    Assert(AssertDirective),
    Insert(InsertDirective),
    Run(RunDirective),
    /// `#name;`
    Directive(DirectiveNode),
    IfDirective(IfDirective),
    IfCaseDirective(IfCaseDirective),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Return(s) => s.span,
            Statement::If(s) => s.span,
            Statement::IfEquality(s) => s.span,
            Statement::While(s) => s.span,
            Statement::For(s) => s.span,
            Statement::Case(s) => s.span,
            Statement::Break(s) => s.span,
            Statement::Continue(s) => s.span,
            Statement::Defer(s) => s.span,
            Statement::Using(s) => s.span,
            Statement::Expression(s) => s.span,
            Statement::Assignment(s) => s.span,
            Statement::Declaration(d) => d.span(),
            Statement::Block(b) => b.span,
            Statement::Assert(d) => d.span,
            Statement::Insert(d) => d.span,
            Statement::Run(d) => d.span,
            Statement::Directive(d) => d.span,
            Statement::IfDirective(d) => d.span,
            Statement::IfCaseDirective(d) => d.span,
        }
    }
}

impl From<Definition> for Statement {
    fn from(definition: Definition) -> Self {
        match definition {
            Definition::If(d) => Statement::IfDirective(d),
            Definition::IfCase(d) => Statement::IfCaseDirective(d),
            Definition::Run(d) => Statement::Run(d),
            Definition::Assert(d) => Statement::Assert(d),
            Definition::Insert(d) => Statement::Insert(d),
            Definition::Directive(d) => Statement::Directive(d),
            other => Statement::Declaration(other),
        }
    }
}

/// ブロック
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// return文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub values: ReturnValues,
    pub span: Span,
}

/// return の値。位置指定と名前付きは混在しない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReturnValues {
    Positional(Vec<Expression>),
    Named(Vec<NamedReturn>),
}

/// `name = value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedReturn {
    pub name: String,
    pub value: Expression,
    pub span: Span,
}

/// if文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    /// 条件全体が括弧で囲まれていた場合（括弧は `condition` から外される）
    pub parenthesized: bool,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// `if value == { case ...; }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfEqualityStatement {
    pub condition: Expression,
    /// `#complete`
    pub complete: bool,
    pub body: Block,
    pub span: Span,
}

/// while文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub label: Option<String>,
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// for文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    pub label: Option<String>,
    pub iterable: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// `case [#directive] [value];`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStatement {
    pub directive: Option<DirectiveNode>,
    pub value: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub label: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub span: Span,
}

/// defer文。本体は式文・代入文・ブロックのいずれか
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferStatement {
    pub body: Box<Statement>,
    pub span: Span,
}

/// `using <statement>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsingStatement {
    pub body: Box<Statement>,
    pub span: Span,
}

/// 式文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStatement {
    pub expression: Expression,
    pub span: Span,
}

/// 代入文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStatement {
    pub target: Expression,
    /// `x : T += 1` のような型注釈
    pub annotation: Option<Type>,
    pub op: AssignOp,
    pub value: Expression,
    pub span: Span,
}

/// 代入演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
}
