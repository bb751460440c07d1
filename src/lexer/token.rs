//! トークン定義

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::literal_parser::{lex_block_comment, lex_string, parse_binary, parse_decimal, parse_float, parse_hex};

/// Jaiのトークン型
///
/// 空白とコメントは読み飛ばさずトリビアトークンとして出すので、
/// トークンの切り出しを連結すると常に入力と一致する。
#[derive(Logos, Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Token {
    // トリビア
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", lex_block_comment)]
    BlockComment,

    // キーワード
    #[token("if")]
    If,
    #[token("ifx")]
    Ifx,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("case")]
    Case,
    #[token("defer")]
    Defer,
    #[token("using")]
    Using,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("enum_flags")]
    EnumFlags,
    #[token("union")]
    Union,
    #[token("inline")]
    Inline,
    #[token("xx")]
    AutoCast,

    // リテラルのキーワード
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("---")]
    Undefined,

    // 識別子（同じ長さならキーワードが優先）
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned(), priority = 1)]
    Identifier(String),

    // `#name`（値に `#` は含まない）
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice()[1..].to_owned())]
    Directive(String),

    // 数値リテラル
    #[regex(r"[0-9][0-9_]*", parse_decimal)]
    #[regex(r"0x[0-9a-fA-F_]+", parse_hex)]
    #[regex(r"0b[01_]+", parse_binary)]
    Integer(u64),

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*", parse_float)]
    Float(f64),

    // 文字列リテラル（エスケープはそのまま保持）
    #[token("\"", lex_string)]
    String(String),

    // 演算子
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token("%=")]
    PercentAssign,
    #[token("$")]
    Dollar,

    // デリミタ
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("::")]
    DoubleColon,
    #[token(":=")]
    ColonAssign,
    #[token(":")]
    Colon,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("->")]
    Arrow,

    // どの規則にも一致しない入力。理由はレキサーが別に記録する
    Error,
}

impl Token {
    /// 空白とコメント
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::LineComment | Token::BlockComment)
    }

    /// キーワードトークンのソース上の綴り。`.` の後ではキーワードも名前になる
    pub fn keyword_text(&self) -> Option<&'static str> {
        let text = match self {
            Token::If => "if",
            Token::Ifx => "ifx",
            Token::Then => "then",
            Token::Else => "else",
            Token::While => "while",
            Token::For => "for",
            Token::Return => "return",
            Token::Break => "break",
            Token::Continue => "continue",
            Token::Case => "case",
            Token::Defer => "defer",
            Token::Using => "using",
            Token::Struct => "struct",
            Token::Enum => "enum",
            Token::EnumFlags => "enum_flags",
            Token::Union => "union",
            Token::Inline => "inline",
            Token::AutoCast => "xx",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keyword) = self.keyword_text() {
            return write!(f, "{}", keyword);
        }
        match self {
            Token::Whitespace => write!(f, "whitespace"),
            Token::LineComment | Token::BlockComment => write!(f, "comment"),
            Token::Undefined => write!(f, "---"),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Directive(s) => write!(f, "#{}", s),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Float(n) => write!(f, "{}", n),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::LtEq => write!(f, "<="),
            Token::GtEq => write!(f, ">="),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::Bang => write!(f, "!"),
            Token::Ampersand => write!(f, "&"),
            Token::Pipe => write!(f, "|"),
            Token::Caret => write!(f, "^"),
            Token::Tilde => write!(f, "~"),
            Token::LtLt => write!(f, "<<"),
            Token::GtGt => write!(f, ">>"),
            Token::Assign => write!(f, "="),
            Token::PlusAssign => write!(f, "+="),
            Token::MinusAssign => write!(f, "-="),
            Token::StarAssign => write!(f, "*="),
            Token::SlashAssign => write!(f, "/="),
            Token::PercentAssign => write!(f, "%="),
            Token::Dollar => write!(f, "$"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::DoubleColon => write!(f, "::"),
            Token::ColonAssign => write!(f, ":="),
            Token::Colon => write!(f, ":"),
            Token::DotDot => write!(f, ".."),
            Token::Dot => write!(f, "."),
            Token::Arrow => write!(f, "->"),
            Token::Error => write!(f, "error"),
            // キーワードは上で処理済み
            _ => write!(f, "{:?}", self),
        }
    }
}
