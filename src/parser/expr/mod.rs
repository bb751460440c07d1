//! 式の解析モジュール
//!
//! 優先順位の段ごとにサブモジュールへ分割している。低い方から
//! 二項演算（乗除算とそれ以外のフラットな段）、単項、範囲、後置、一次式。

mod binary_expr;
mod complex_expr;
mod control_expr;
mod literal_expr;
mod postfix_expr;
mod unary_expr;
