//! Jai Syntax Library
//!
//! This library turns Jai source text into a span-annotated syntax tree,
//! recovering from syntax errors so one run reports every diagnostic.

pub mod ast;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{Definition, Expression, SourceFile, Statement};
pub use driver::{parse_source, ParseOutput, SourceUnit};
pub use error::{Diagnostic, ErrorCollector, Severity, SyntaxError, SyntaxResult};
pub use lexer::{Lexer, Token, TokenWithPosition};
pub use parser::{ParseContext, ParseError, ParseResult, Parser};
