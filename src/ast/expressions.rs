//! 式の定義

use serde::{Deserialize, Serialize};

use super::Span;

/// 式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Identifier(Identifier),
    Int(IntLiteral),
    Float(FloatLiteral),
    String(StringLiteral),
    Char(CharLiteral),
    Bool(BoolLiteral),
    Null(NullLiteral),
    Undefined(UndefinedLiteral),
    Call(ProcCall),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Parenthesized(ParenthesizedExpr),
    StructLiteral(StructLiteral),
    ArrayLiteral(ArrayLiteral),
    EnumValue(EnumValue),
    MemberAccess(MemberAccess),
    Range(RangeExpr),
    Dereference(DereferenceExpr),
    AutoCast(AutoCastExpr),
    ArrayAccess(ArrayAccess),
    Conditional(ConditionalExpr),
    Directive(DirectiveExpr),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(e) => e.span,
            Expression::Int(e) => e.span,
            Expression::Float(e) => e.span,
            Expression::String(e) => e.span,
            Expression::Char(e) => e.span,
            Expression::Bool(e) => e.span,
            Expression::Null(e) => e.span,
            Expression::Undefined(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::Binary(e) => e.span,
            Expression::Unary(e) => e.span,
            Expression::Parenthesized(e) => e.span,
            Expression::StructLiteral(e) => e.span,
            Expression::ArrayLiteral(e) => e.span,
            Expression::EnumValue(e) => e.span,
            Expression::MemberAccess(e) => e.span,
            Expression::Range(e) => e.span,
            Expression::Dereference(e) => e.span,
            Expression::AutoCast(e) => e.span,
            Expression::ArrayAccess(e) => e.span,
            Expression::Conditional(e) => e.span,
            Expression::Directive(e) => e.span,
        }
    }

    /// `a` や `a.b.c` のような識別子だけからなる名前パスを取り出す
    pub fn name_path(&self) -> Option<Vec<String>> {
        match self {
            Expression::Identifier(id) => Some(vec![id.name.clone()]),
            Expression::MemberAccess(access) => {
                let mut path = access.object.name_path()?;
                path.push(access.property.clone());
                Some(path)
            }
            _ => None,
        }
    }
}

/// 識別子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// 整数リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntLiteral {
    pub value: u64,
    pub span: Span,
}

/// 浮動小数点リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatLiteral {
    pub value: f64,
    pub span: Span,
}

/// 文字列リテラル（エスケープはそのまま保持）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

/// `#char "x"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharLiteral {
    pub value: String,
    pub span: Span,
}

/// 真偽値リテラル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolLiteral {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullLiteral {
    pub span: Span,
}

/// `---`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndefinedLiteral {
    pub span: Span,
}

/// プロシージャ呼び出し
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcCall {
    pub callee: Box<Expression>,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

/// 呼び出し引数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Argument {
    Positional(Expression),
    Named(NamedArgument),
    /// 末尾の `..name`
    Spread(SpreadArgument),
}

impl Argument {
    pub fn span(&self) -> Span {
        match self {
            Argument::Positional(expr) => expr.span(),
            Argument::Named(arg) => arg.span,
            Argument::Spread(arg) => arg.span,
        }
    }
}

/// `name = value` 形式の引数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedArgument {
    pub name: String,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadArgument {
    pub name: String,
    pub span: Span,
}

/// 二項演算式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub op: BinaryOp,
    pub right: Box<Expression>,
    pub span: Span,
}

/// 二項演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

/// 単項演算式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expression>,
    pub span: Span,
}

/// 単項演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `-`
    Negate,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `*`
    Pointer,
    /// `&`
    Reference,
}

/// 括弧式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpr {
    pub inner: Box<Expression>,
    pub span: Span,
}

/// 構造体リテラル `Type.{ ... }` / `.{ ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructLiteral {
    /// 型の修飾名。匿名リテラルでは空
    pub type_path: Vec<String>,
    pub body: StructLiteralBody,
    pub span: Span,
}

/// 構造体リテラルの中身。位置指定と名前付きは混在しない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructLiteralBody {
    Positional(Vec<Expression>),
    Named(Vec<FieldInit>),
}

/// 構造体フィールド初期化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInit {
    pub name: String,
    pub value: Expression,
    pub span: Span,
}

/// 配列リテラル `Type.[ x ]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub type_path: Vec<String>,
    pub element: Option<Box<Expression>>,
    pub span: Span,
}

/// 型を省略した列挙値 `.Name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub span: Span,
}

/// メンバーアクセス `object.property`
///
/// 修飾付きの列挙値 `Enum.Value` も同じ形になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberAccess {
    pub object: Box<Expression>,
    pub property: String,
    pub span: Span,
}

/// 範囲式 `start..end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeExpr {
    pub start: Box<Expression>,
    pub end: Box<Expression>,
    pub span: Span,
}

/// 参照外し `object.*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DereferenceExpr {
    pub object: Box<Expression>,
    pub span: Span,
}

/// 自動キャスト `xx value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoCastExpr {
    pub value: Box<Expression>,
    pub span: Span,
}

/// 添字アクセス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayAccess {
    pub object: Box<Expression>,
    pub index: Box<Expression>,
    pub span: Span,
}

/// `ifx cond then a else b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub condition: Box<Expression>,
    pub then_value: Box<Expression>,
    pub else_value: Option<Box<Expression>>,
    pub span: Span,
}

/// 式の位置に現れるディレクティブ（`#run expr` など）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveExpr {
    pub name: String,
    pub operand: Option<Box<Expression>>,
    pub span: Span,
}
