//! Toklex - A character-stream lexer
//!
//! Splits source text into identifiers, numbers, punctuation, operator runs and
//! single-character fallbacks, exposed through a cursor with one token of lookahead.
//!
//! # Architecture
//!
//! ```text
//! toklex-config/  - Pure configuration data (no logic)
//! toklex-core/    - Classifier, scanner and token cursor (no IO)
//! toklex-cli/     - Command line tool (`toklex`)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use toklex::tokenize;
//!
//! let mut tokens = tokenize("while (i<=n) i = i+1;");
//! while tokens.has_next() {
//!     let token = tokens.consume();
//!     println!("{} ({})", token, token.kind);
//! }
//! ```

pub use toklex_core::lexer;
pub use toklex_core::{
    next_token, tokenize, tokenize_all, CharClass, Scanner, SourcePosition, SourceSpan, Token,
    TokenKind, Tokens,
};
