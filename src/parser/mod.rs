//! パーサーモジュール
//!
//! トークン列を抽象構文木（AST）に変換する。再帰下降構文解析で、
//! 重なり合う構文（呼び出し・列挙値・構造体リテラル・参照外し、
//! 代入と宣言など）は有限の先読みで決定的に振り分ける。
//!
//! 構文エラーが起きても解析は止まらない。トップレベル・コンテナ本体・
//! ブロック・`#if` の各ループがエラーを診断として記録し、次の `;` か
//! 対応する `}` まで読み飛ばしてから再開する。
//!
//! ```jai
//! Vector3 :: struct {
//!     x: float;
//!     y: float;
//!     z: float = 1.0;
//! }
//!
//! main :: () {
//!     v := Vector3.{1, 2, 3};
//!     defer print("done\n");
//! }
//! ```

mod decl_parser;
mod directive_parser;
mod expr;
mod expr_parser;
mod parser_impl;
mod recovery;
mod stmt_parser;
mod type_parser;

// 公開API
pub use parser_impl::Parser;

use crate::error::ParserError;
pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;

/// 解析中の入れ子の文脈
///
/// 本体の要素を定義として読むか文として読むか、`#caller_location` を
/// 許すかどうかの判断に使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseContext {
    TopLevel,
    StructBody,
    UnionBody,
    EnumBody,
    Block,
    ParameterList,
}
