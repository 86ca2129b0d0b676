//! 扫描器
//!
//! 跳过空白后，根据当前字符的类别消费一段最长同类字符串，作为一个 token 返回。
//! 分派顺序：特殊符号 > 数字 > 标识符 > 运算符 > 单字符兜底。
//!
//! 输入未耗尽时每次调用至少前进一个字符；耗尽后重复返回结束哨兵，位置不变。

use super::classify::{self, CharClass};
use super::position::{SourcePosition, SourceSpan};
use super::token::{Token, TokenKind};

use tracing::trace;

/// 字符串扫描器，独占扫描位置
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    position: SourcePosition,
}

impl<'a> Scanner<'a> {
    /// 从输入起始处开始扫描
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: SourcePosition::start(),
        }
    }

    /// 从字节偏移 `offset` 处继续扫描（偏移规整规则见 [`SourcePosition::of_offset`]）
    pub fn resume(input: &'a str, offset: usize) -> Self {
        Self {
            input,
            position: SourcePosition::of_offset(input, offset),
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// 当前字节偏移
    pub fn offset(&self) -> usize {
        self.position.byte_offset
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 扫描下一个 token
    pub fn next_token(&mut self) -> Token<'a> {
        self.eat_while(classify::is_whitespace);

        let start = self.position;
        let Some(c) = self.first() else {
            trace!(target: "toklex::lexer::scanner", offset = start.byte_offset, "End of input");
            return Token::end(start);
        };

        let kind = match classify::classify(c) {
            CharClass::Special => {
                self.bump();
                TokenKind::Special
            }
            CharClass::Digit => {
                self.eat_while(classify::is_digit);
                TokenKind::Number
            }
            CharClass::IdentifierStart => {
                self.bump();
                self.eat_while(classify::is_identifier_continue);
                TokenKind::Identifier
            }
            CharClass::Operator => {
                self.eat_while(classify::is_operator);
                TokenKind::Operator
            }
            // 空白已在上面跳过
            CharClass::Other | CharClass::Whitespace => {
                self.bump();
                TokenKind::Other
            }
        };

        let token = Token::new(
            kind,
            &self.input[start.byte_offset..self.position.byte_offset],
            SourceSpan::range(start, self.position),
        );
        trace!(
            target: "toklex::lexer::scanner",
            kind = %token.kind,
            text = token.text,
            line = start.line,
            column = start.column,
            "Produced token"
        );
        token
    }

    /// 预读当前字符（不消费）
    fn first(&self) -> Option<char> {
        self.input[self.position.byte_offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.first()?;
        self.position.advance(c);
        Some(c)
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.first() {
            if !predicate(c) {
                break;
            }
            self.position.advance(c);
        }
    }
}

/// 从字节偏移 `position` 扫描一个 token，返回 token 与其后的新偏移
///
/// 到达末尾时返回结束哨兵，偏移保持不变（被截断到输入长度）。
///
/// 每次调用都要从输入开头重新计算行列号，循环调用整体为 O(n²)；
/// 顺序扫描整个输入请用 [`Scanner`] 或 [`tokenize`](super::tokenize)。
pub fn next_token(input: &str, position: usize) -> (Token<'_>, usize) {
    let mut scanner = Scanner::resume(input, position);
    let token = scanner.next_token();
    (token, scanner.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(input: &str) -> Vec<(TokenKind, &str)> {
        let mut scanner = Scanner::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.is_end() {
                break;
            }
            tokens.push((token.kind, token.text));
        }
        tokens
    }

    #[test]
    fn test_basic_tokens() {
        let tokens = scan_all("var x = 1;");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "var"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "1"),
                (TokenKind::Special, ";"),
            ]
        );
    }

    #[test]
    fn test_special_never_merges() {
        let tokens = scan_all("((;;,,))");
        assert_eq!(tokens.len(), 8);
        assert!(tokens.iter().all(|(kind, _)| *kind == TokenKind::Special));
    }

    #[test]
    fn test_decimal_splits() {
        let tokens = scan_all("3.14");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Number, "3"),
                (TokenKind::Other, "."),
                (TokenKind::Number, "14"),
            ]
        );
    }

    #[test]
    fn test_operator_runs() {
        let texts: Vec<_> = scan_all("a+-b == c!==d").into_iter().map(|t| t.1).collect();
        assert_eq!(texts, vec!["a", "+-", "b", "==", "c", "!==", "d"]);
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        let tokens = scan_all("_tmp1 x2y 9lives");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "_tmp1"),
                (TokenKind::Identifier, "x2y"),
                (TokenKind::Number, "9"),
                (TokenKind::Identifier, "lives"),
            ]
        );
    }

    #[test]
    fn test_unicode_identifier_and_fallback() {
        let tokens = scan_all("café €5");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "café"),
                (TokenKind::Other, "€"),
                (TokenKind::Number, "5"),
            ]
        );
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut scanner = Scanner::new("  x  ");
        assert_eq!(scanner.next_token().text, "x");
        let end = scanner.next_token();
        assert!(end.is_end());
        assert_eq!(scanner.offset(), 5);
        for _ in 0..3 {
            assert!(scanner.next_token().is_end());
            assert_eq!(scanner.offset(), 5);
        }
    }

    #[test]
    fn test_spans_track_lines() {
        let mut scanner = Scanner::new("a\n  bc");
        let a = scanner.next_token();
        let bc = scanner.next_token();
        assert_eq!((a.span.start.line, a.span.start.column), (1, 1));
        assert_eq!((bc.span.start.line, bc.span.start.column), (2, 3));
        assert_eq!(bc.span.byte_range(), 4..6);
    }

    #[test]
    fn test_next_token_free_function() {
        let input = "foo(bar)";
        let (token, pos) = next_token(input, 0);
        assert_eq!((token.text, pos), ("foo", 3));
        let (token, pos) = next_token(input, pos);
        assert_eq!((token.text, pos), ("(", 4));
        let (token, pos) = next_token(input, 8);
        assert!(token.is_end());
        assert_eq!(pos, 8);
    }

    #[test]
    fn test_next_token_progress() {
        let input = " a<=b ? 12 ;x\t.";
        let mut pos = 0;
        loop {
            let (token, next) = next_token(input, pos);
            if token.is_end() {
                assert_eq!(next, pos);
                break;
            }
            assert!(next > pos, "no progress at {pos}");
            pos = next;
        }
    }
}
