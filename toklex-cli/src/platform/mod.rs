//! 平台相关的输入输出

pub mod output;

pub use output::render_tokens;
