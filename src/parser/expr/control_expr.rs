// 制御式とディレクティブ式の解析
//
// `ifx` 条件式と、式の位置に現れる `#char`・`#run` などを解析する。

use crate::ast::*;
use crate::lexer::Token;
use crate::parser::{ParseContext, ParseResult, Parser};

impl Parser {
    /// `ifx cond [then] a [else b]` を解析
    pub(crate) fn parse_conditional_expression(&mut self) -> ParseResult<Expression> {
        let start = self.current_span().start;
        self.expect(Token::Ifx)?;

        let condition = self.parse_expression_internal()?;
        self.match_token(&Token::Then);
        let then_value = self.parse_expression_internal()?;

        let else_value = if self.match_token(&Token::Else) {
            Some(Box::new(self.parse_expression_internal()?))
        } else {
            None
        };

        Ok(Expression::Conditional(ConditionalExpr {
            condition: Box::new(condition),
            then_value: Box::new(then_value),
            else_value,
            span: self.span_from(start),
        }))
    }

    /// 式の位置にあるディレクティブを解析
    pub(crate) fn parse_directive_expression(&mut self, name: String) -> ParseResult<Expression> {
        let start = self.current_span().start;

        match DirectiveKind::classify(&name) {
            DirectiveKind::Char => {
                self.advance();
                let value = self.expect_string()?;
                Ok(Expression::Char(CharLiteral {
                    value,
                    span: self.span_from(start),
                }))
            }
            DirectiveKind::CallerLocation if self.context() != ParseContext::ParameterList => {
                Err(self.error("#caller_location はパラメータのデフォルト値にしか使えません"))
            }
            DirectiveKind::Run | DirectiveKind::Code => {
                self.advance();
                let operand = self.parse_unary_expression()?;
                Ok(Expression::Directive(DirectiveExpr {
                    name,
                    operand: Some(Box::new(operand)),
                    span: self.span_from(start),
                }))
            }
            _ => {
                self.advance();
                Ok(Expression::Directive(DirectiveExpr {
                    name,
                    operand: None,
                    span: self.span_from(start),
                }))
            }
        }
    }
}
