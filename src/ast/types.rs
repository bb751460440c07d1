//! 型式の定義

use serde::{Deserialize, Serialize};

use super::{BodyItem, DirectiveNode, Expression, Parameter, ReturnType, Span};

/// 型の表現
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Primitive(PrimitiveType),
    Named(NamedType),
    Array(ArrayType),
    Pointer(PointerType),
    InlineStruct(InlineStructType),
    Proc(ProcType),
}

impl Type {
    pub fn span(&self) -> Span {
        match self {
            Type::Primitive(t) => t.span,
            Type::Named(t) => t.span,
            Type::Array(t) => t.span,
            Type::Pointer(t) => t.span,
            Type::InlineStruct(t) => t.span,
            Type::Proc(t) => t.span,
        }
    }
}

/// 組み込み型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveType {
    pub kind: PrimitiveKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Bool,
    String,
    Int,
    Float,
    Float64,
    Float32,
    S8,
    S16,
    S32,
    S64,
    U8,
    U16,
    U32,
    U64,
    Void,
    Any,
    Type,
    Context,
}

impl PrimitiveKind {
    /// 名前から組み込み型を引く
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => PrimitiveKind::Bool,
            "string" => PrimitiveKind::String,
            "int" => PrimitiveKind::Int,
            "float" => PrimitiveKind::Float,
            "float64" => PrimitiveKind::Float64,
            "float32" => PrimitiveKind::Float32,
            "s8" => PrimitiveKind::S8,
            "s16" => PrimitiveKind::S16,
            "s32" => PrimitiveKind::S32,
            "s64" => PrimitiveKind::S64,
            "u8" => PrimitiveKind::U8,
            "u16" => PrimitiveKind::U16,
            "u32" => PrimitiveKind::U32,
            "u64" => PrimitiveKind::U64,
            "void" => PrimitiveKind::Void,
            "Any" => PrimitiveKind::Any,
            "Type" => PrimitiveKind::Type,
            "Context" => PrimitiveKind::Context,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::String => "string",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Float64 => "float64",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::S8 => "s8",
            PrimitiveKind::S16 => "s16",
            PrimitiveKind::S32 => "s32",
            PrimitiveKind::S64 => "s64",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::Void => "void",
            PrimitiveKind::Any => "Any",
            PrimitiveKind::Type => "Type",
            PrimitiveKind::Context => "Context",
        }
    }

    /// 列挙型の基底型として使える整数型か
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int
                | PrimitiveKind::S8
                | PrimitiveKind::S16
                | PrimitiveKind::S32
                | PrimitiveKind::S64
                | PrimitiveKind::U8
                | PrimitiveKind::U16
                | PrimitiveKind::U32
                | PrimitiveKind::U64
        )
    }
}

/// ユーザー定義型（`Vector3`、`Math.Matrix4`、`$T`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    pub path: Vec<String>,
    /// `$T` のように型引数を導入する場合
    pub polymorphic: bool,
    pub span: Span,
}

/// 配列型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub size: ArraySize,
    pub element: Box<Type>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArraySize {
    /// `[N]T`
    Fixed(Box<Expression>),
    /// `[..]T`
    Dynamic,
    /// `[]T`
    View,
}

/// ポインタ型 `*T`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerType {
    pub pointee: Box<Type>,
    pub span: Span,
}

/// `struct { ... }` を型として直接書いたもの
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineStructType {
    pub body: Vec<BodyItem>,
    pub span: Span,
}

/// 名前のないプロシージャ型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcType {
    pub parameters: Vec<Parameter>,
    pub returns: Vec<ReturnType>,
    pub directives: Vec<DirectiveNode>,
    pub span: Span,
}
