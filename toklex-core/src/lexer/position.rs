//! 源代码位置追踪
//!
//! - line/column: 人类可读的显示（1-based，column 按 Unicode 码点计数）
//! - byte_offset: 输入字符串中的字节偏移（0-based），即扫描器的 Position

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based，UTF-8编码
    pub byte_offset: usize,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 输入起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
        }
    }

    /// 计算 `text` 中字节偏移 `offset` 处的位置
    ///
    /// 超出末尾的偏移被截断到 `text.len()`；
    /// 落在多字节字符内部的偏移被移到下一个字符边界。
    pub fn of_offset(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset += 1;
        }

        let prefix = &text[..offset];
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: 1 + prefix.matches('\n').count(),
            column: 1 + prefix[line_start..].chars().count(),
            byte_offset: offset,
        }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte_offset += c.len_utf8();
    }
}

/// 源代码区间，`end` 为开区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    /// 空区间（用于结束哨兵）
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// 区间覆盖的字节数
    pub fn len(&self) -> usize {
        self.end.byte_offset - self.start.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 字节区间，可直接用于切片原始输入
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.byte_offset..self.end.byte_offset
    }
}
