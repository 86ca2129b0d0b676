//! Token 游标
//!
//! 在扫描器之上维护两个槽位：`current`（下一次 peek/consume 看到的 token）
//! 和 `lookahead`（紧随其后的 token）。构造时即扫描两次，
//! 因此 `has_next`/`peek` 为 O(1) 且无副作用。
//!
//! # 示例
//!
//! ```
//! use toklex_core::tokenize;
//!
//! let mut tokens = tokenize("if (a<=b) x;");
//! assert_eq!(tokens.peek(), "if");
//! assert_eq!(tokens.peek_next(), "(");
//! assert_eq!(tokens.consume(), "if");
//! assert_eq!(tokens.peek(), "(");
//! ```

use std::iter::FusedIterator;

use super::position::SourcePosition;
use super::scanner::Scanner;
use super::token::Token;

use tracing::{debug, trace};

/// 带一个 token 预读的拉取式 token 流
///
/// 耗尽状态是粘滞的：一旦 `current` 为结束哨兵，之后的 `consume`
/// 都返回哨兵，扫描位置不再后退。
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    current: Token<'a>,
    lookahead: Token<'a>,
}

impl<'a> Tokens<'a> {
    /// 创建游标并预读前两个 token
    pub fn new(input: &'a str) -> Self {
        trace!(target: "toklex::lexer", len = input.len(), "Creating token cursor");
        let mut scanner = Scanner::new(input);
        let current = scanner.next_token();
        let lookahead = scanner.next_token();
        Self {
            scanner,
            current,
            lookahead,
        }
    }

    /// 是否还有未消费的 token
    pub fn has_next(&self) -> bool {
        !self.current.is_end()
    }

    /// 返回当前 token（不消费）
    pub fn peek(&self) -> Token<'a> {
        self.current
    }

    /// 返回当前 token 之后的 token（不消费）
    pub fn peek_next(&self) -> Token<'a> {
        self.lookahead
    }

    /// 消费并返回当前 token
    ///
    /// 耗尽后调用不是错误，总是返回结束哨兵。
    pub fn consume(&mut self) -> Token<'a> {
        let token = self.current;
        self.current = self.lookahead;
        self.lookahead = self.scanner.next_token();

        if !token.is_end() && self.current.is_end() {
            debug!(
                target: "toklex::lexer",
                offset = self.scanner.offset(),
                "Token stream exhausted"
            );
        }
        trace!(target: "toklex::lexer", text = token.text, "Consumed token");
        token
    }

    /// 扫描器当前字节偏移（已越过 lookahead）
    pub fn offset(&self) -> usize {
        self.scanner.offset()
    }

    /// 扫描器当前位置（已越过 lookahead）
    pub fn position(&self) -> SourcePosition {
        self.scanner.position()
    }

    pub fn input(&self) -> &'a str {
        self.scanner.input()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.consume())
        } else {
            None
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// 为 `input` 创建 token 游标
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens::new(input)
}

/// 扫描全部 token（不含结束哨兵）
pub fn tokenize_all(input: &str) -> Vec<Token<'_>> {
    tokenize(input).collect()
}
