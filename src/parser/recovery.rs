//! エラー回復
//!
//! 回復点はトップレベルの定義ループ、コンテナ本体のループ、ブロックの
//! 文ループ、`#if` の分岐リストの4か所。

use crate::ast::Span;
use crate::error::{ParserError, Severity};
use crate::lexer::Token;

use super::{ParseContext, ParseResult, Parser};

impl Parser {
    /// エラーを記録し、次の同期点まで読み飛ばす
    ///
    /// `start` は失敗した要素の先頭のトークン位置。`;` の書き忘れで、
    /// 要素内の括弧がすべて閉じていて、現在のトークンが新しい行にあれば
    /// 読み飛ばさずにそこから再開する。壊れた要素自体は捨てる。
    pub(super) fn recover(&mut self, error: ParserError, start: usize) {
        if matches!(error, ParserError::UnexpectedEof { .. }) {
            self.report_eof(error);
            return;
        }

        let missing_semicolon =
            matches!(&error, ParserError::MissingToken { expected, .. } if expected == "`;`");
        log::debug!("recovering from: {}", error);
        self.errors.add_error(error, Severity::Recovered);

        let open = self.open_delimiters_since(start);
        if missing_semicolon && open == (0, 0) && self.current > start && self.starts_new_line() {
            return;
        }

        let skipped_from = self.current;
        self.synchronize(open);
        // 入れ子の本体で `}` に止まった場合は呼び出し側のループが `}` を見て終わる
        if self.current == start && !self.is_at_end() && !self.check(&Token::RightBrace) {
            self.advance();
        }
        log::debug!(
            "skipped tokens {}..{} while recovering",
            skipped_from,
            self.current
        );
    }

    /// 入力の途中終了を一度だけ報告する
    pub(super) fn report_eof(&mut self, error: ParserError) {
        if self.truncated {
            return;
        }
        self.truncated = true;
        log::debug!("input ended early: {}", error);
        self.errors.add_error(error, Severity::Error);
    }

    /// `start` から現在位置までに開いたまま閉じていない `{` と `(`/`[` の数
    fn open_delimiters_since(&self, start: usize) -> (usize, usize) {
        let (mut braces, mut parens) = (0usize, 0usize);
        for t in self.tokens.get(start..self.current).unwrap_or(&[]) {
            match t.token {
                Token::LeftBrace => braces += 1,
                Token::RightBrace => braces = braces.saturating_sub(1),
                Token::LeftParen | Token::LeftBracket => parens += 1,
                Token::RightParen | Token::RightBracket => parens = parens.saturating_sub(1),
                _ => {}
            }
        }
        (braces, parens)
    }

    /// `{` の外で `;` を読むか、読み飛ばし中に開いた `{` が閉じるまで進む
    ///
    /// `open` は壊れた要素の中で開いたままの括弧。その `{` を閉じる `}` では
    /// 止まらず、後続の `;` まで読む。外側のブロックを閉じる `}` は消費しない。
    /// ただし最も外側の定義ループに迷い込んだ `}` は消費する。
    fn synchronize(&mut self, open: (usize, usize)) {
        let (mut braces, mut parens) = open;
        let mut opened_block = false;
        while let Some(token) = self.current_token() {
            match token {
                Token::LeftBrace => {
                    opened_block |= braces == 0;
                    braces += 1;
                }
                Token::LeftParen | Token::LeftBracket => parens += 1,
                Token::RightParen | Token::RightBracket => parens = parens.saturating_sub(1),
                Token::RightBrace if braces == 0 => {
                    if self.contexts.len() == 1 {
                        self.advance();
                    }
                    return;
                }
                Token::RightBrace => {
                    braces -= 1;
                    if braces == 0 && parens == 0 && opened_block {
                        self.advance();
                        return;
                    }
                }
                Token::Semicolon if braces == 0 => {
                    self.advance();
                    return;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// `{ item* }` を解析する。要素ごとにエラーから回復し、入力が途中で
    /// 終わった場合はそこまでの要素を返す。
    pub(super) fn parse_braced_items<T>(
        &mut self,
        context: ParseContext,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<(Vec<T>, Span)> {
        let start = self.current_span().start;
        self.expect(Token::LeftBrace)?;

        let items = self.with_context(context, |p| {
            let mut items = Vec::new();
            while !p.check(&Token::RightBrace) && !p.is_at_end() {
                let begin = p.current;
                match item(p) {
                    Ok(value) => items.push(value),
                    Err(e) => p.recover(e, begin),
                }
            }
            items
        });

        self.close_brace();
        Ok((items, self.span_from(start)))
    }

    /// 閉じ括弧を消費する。終端なら途中終了として報告する
    fn close_brace(&mut self) {
        if self.is_at_end() {
            let error = self.eof_error("`}`".to_string());
            self.report_eof(error);
        } else {
            self.advance();
        }
    }
}
