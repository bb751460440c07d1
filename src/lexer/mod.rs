//! Lexical analysis module for Jai source text.
//!
//! This module turns source text into a stream of tokens. Whitespace and
//! comments are kept as trivia tokens so that token spans cover the whole
//! input; the parser drops them before it starts.

mod lexer;
mod literal_parser;
mod token;

pub use lexer::{tokenize, Lexed, Lexer, Position, TokenWithPosition};
pub use token::Token;
