//! Toklex Lexer
//!
//! 字符流词法分析器，由三部分组成：
//! - classify：无状态的字符分类谓词
//! - scanner：按最长同类字符串切分 token
//! - cursor：双槽预读（current + lookahead），支持 peek 而不消费
//!
//! 词法分析器永不失败：无法识别的字符作为单字符 token 输出，
//! 输入耗尽后返回空字符串哨兵。

pub mod classify;
pub mod cursor;
pub mod position;
pub mod scanner;
pub mod token;

pub use classify::CharClass;
pub use cursor::{tokenize, tokenize_all, Tokens};
pub use position::{SourcePosition, SourceSpan};
pub use scanner::{next_token, Scanner};
pub use token::{Token, TokenKind};
