//! 字符分类
//!
//! 纯函数，无状态。各谓词对应的字符集互不相交：
//!
//! | 类别 | 字符 |
//! |------|------|
//! | 空白 | `char::is_whitespace`（Unicode White_Space） |
//! | 特殊符号 | `( ) { } [ ] ; ,` |
//! | 数字 | 通用类别 Nd（十进制数字，含非 ASCII 数字） |
//! | 标识符 | 字母（通用类别 L*）或 `_` 开头，后续可含 Nd |
//! | 运算符 | `+ - * / = < > ! & \| ^` |
//!
//! 不属于任何类别的字符（如 `.`、`?`、字母数字 `Ⅻ`（Nl））归为 [`CharClass::Other`]。

use unicode_general_category::{get_general_category, GeneralCategory};

/// 字符类别，按扫描器的分派顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Whitespace,
    Special,
    Digit,
    IdentifierStart,
    Operator,
    Other,
}

/// 按分派顺序返回第一个匹配的类别
pub fn classify(c: char) -> CharClass {
    if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_special(c) {
        CharClass::Special
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_identifier_start(c) {
        CharClass::IdentifierStart
    } else if is_operator(c) {
        CharClass::Operator
    } else {
        CharClass::Other
    }
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// 特殊符号总是单独成 token，即使与同一字符相邻
pub fn is_special(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',')
}

/// 十进制数字（Nd）
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
        || (!c.is_ascii() && get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// 字母：Lu、Ll、Lt、Lm、Lo
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

pub fn is_identifier_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || is_digit(c)
}

pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '^'
    )
}
