//! Token 定义

use super::position::{SourcePosition, SourceSpan};
use std::fmt;

/// 产生 token 的扫描规则
///
/// 仅记录规则，不做语法判断：关键字与普通标识符同为 `Identifier`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 单字符特殊符号 `( ) { } [ ] ; ,`
    Special,
    /// 连续数字
    Number,
    /// 标识符或关键字
    Identifier,
    /// 连续运算符字符
    Operator,
    /// 未分类的单个字符
    Other,
    /// 结束哨兵
    End,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Special => "special",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Other => "other",
            TokenKind::End => "end",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 词法单元，文本借用自输入
///
/// 除结束哨兵外 `text` 永不为空。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: SourceSpan,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: SourceSpan) -> Self {
        Self { kind, text, span }
    }

    /// 位于 `at` 的结束哨兵
    pub fn end(at: SourcePosition) -> Self {
        Self {
            kind: TokenKind::End,
            text: "",
            span: SourceSpan::at(at),
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn start(&self) -> SourcePosition {
        self.span.start
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_token() {
        let pos = SourcePosition::new(2, 4, 7);
        let token = Token::end(pos);
        assert!(token.is_end());
        assert_eq!(token.text, "");
        assert!(token.span.is_empty());
        assert_eq!(token.start(), pos);
    }

    #[test]
    fn test_token_compares_with_str() {
        let span = SourceSpan::range(SourcePosition::start(), SourcePosition::new(1, 4, 3));
        let token = Token::new(TokenKind::Identifier, "foo", span);
        assert_eq!(token, "foo");
        assert!(token != "bar");
        assert_eq!(token.to_string(), "foo");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Operator.to_string(), "operator");
        assert_eq!(TokenKind::End.as_str(), "end");
    }
}
