//! Toklex Core - Lexer core (pure logic, no IO)
//!
//! Contains the character classifier, the scanner and the two-token lookahead cursor.
//! Only operates on in-memory strings, no file IO or terminal output.

pub mod lexer;

// Re-export common types
pub use lexer::{
    next_token, tokenize, tokenize_all, CharClass, Scanner, SourcePosition, SourceSpan, Token,
    TokenKind, Tokens,
};
