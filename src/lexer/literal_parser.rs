//! トークン定義から呼ばれるリテラル読み取り用コールバック

use logos::Lexer as LogosLexer;

use super::token::Token;

/// 開き引用符の直後から始まる `s` の中の閉じ引用符のバイト位置。
/// バックスラッシュは直後の1文字をエスケープする。
pub(crate) fn find_string_end(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in s.char_indices() {
        match ch {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(idx),
            _ => escaped = false,
        }
    }
    None
}

/// 開き引用符の後の文字列リテラルを読む
///
/// 閉じていないリテラルは入力の残りをすべて消費して失敗する。エラー
/// トークンは引用符から入力末尾までになる。
pub(crate) fn lex_string(lex: &mut LogosLexer<Token>) -> Option<String> {
    match find_string_end(lex.remainder()) {
        Some(end) => {
            let content = lex.remainder()[..end].to_owned();
            lex.bump(end + 1);
            Some(content)
        }
        None => {
            let rest = lex.remainder().len();
            lex.bump(rest);
            None
        }
    }
}

/// `/*` の後のブロックコメントを読む。入れ子にはならず、最初の `*/` で閉じる
pub(crate) fn lex_block_comment(lex: &mut LogosLexer<Token>) -> bool {
    match lex.remainder().find("*/") {
        Some(idx) => {
            lex.bump(idx + 2);
            true
        }
        None => {
            let rest = lex.remainder().len();
            lex.bump(rest);
            false
        }
    }
}

fn strip_separators(digits: &str) -> String {
    digits.chars().filter(|c| *c != '_').collect()
}

pub(crate) fn parse_decimal(lex: &mut LogosLexer<Token>) -> Option<u64> {
    strip_separators(lex.slice()).parse::<u64>().ok()
}

pub(crate) fn parse_hex(lex: &mut LogosLexer<Token>) -> Option<u64> {
    let digits = strip_separators(&lex.slice()[2..]);
    u64::from_str_radix(&digits, 16).ok()
}

pub(crate) fn parse_binary(lex: &mut LogosLexer<Token>) -> Option<u64> {
    let digits = strip_separators(&lex.slice()[2..]);
    u64::from_str_radix(&digits, 2).ok()
}

pub(crate) fn parse_float(lex: &mut LogosLexer<Token>) -> Option<f64> {
    strip_separators(lex.slice()).parse::<f64>().ok()
}
