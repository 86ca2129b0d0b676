//! 测试辅助工具

#![allow(dead_code)]

use toklex_core::{tokenize, Token};

/// 扫描全部 token 的文本
pub fn lex_texts(input: &str) -> Vec<&str> {
    tokenize(input).map(|t| t.text).collect()
}

/// 扫描全部 token
pub fn lex_all(input: &str) -> Vec<Token<'_>> {
    tokenize(input).collect()
}

/// 覆盖各分派规则的样例输入
pub const SAMPLES: &[&str] = &[
    "",
    "   ",
    "  a   b  ",
    "(a,b)",
    "123abc",
    "a<=b",
    "a<>=b",
    "a.b",
    "3.14",
    "a+-b",
    "if (x != 10) { y = y + 1; } else { y -= 2; }",
    "foo_bar(baz[0], qux);\n\treturn !flag && other || ^mask;",
    "??..##@@",
    "naïve café 数据 = 42;",
    "\u{00A0}x\u{2003}=\u{3000}1",
    "a\r\nb\r\nc",
    "===!==<=>=>>=",
    "x1_2__3 9_9",
    "٣٤ mixed",
    "x٣ ⅫⅫ ７７",
];
