//! Token 输出格式化

use serde_json::json;
use toklex_config::{OutputConfig, OutputFormat};
use toklex_core::Token;

use crate::error::CliError;

/// 按配置渲染 token 列表（不含结束哨兵）
pub fn render_tokens(tokens: &[Token<'_>], output: &OutputConfig) -> Result<String, CliError> {
    let rendered = match output.format {
        OutputFormat::Plain => tokens
            .iter()
            .map(|t| {
                if output.show_spans {
                    format!("{}@{}:{}", t.as_str(), t.start().line, t.start().column)
                } else {
                    t.as_str().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        OutputFormat::Lines => tokens
            .iter()
            .map(|t| {
                if output.show_spans {
                    format!(
                        "{}:{}\t{}\t{}",
                        t.start().line, t.start().column, t.kind, t.as_str()
                    )
                } else {
                    t.as_str().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&build_json_output(tokens))?,
    };
    Ok(rendered)
}

/// 构建 JSON 数组
fn build_json_output(tokens: &[Token<'_>]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = tokens
        .iter()
        .map(|t| {
            json!({
                "kind": t.kind.as_str(),
                "text": t.as_str(),
                "start": t.span.start.byte_offset,
                "end": t.span.end.byte_offset,
                "line": t.span.start.line,
                "column": t.span.start.column,
            })
        })
        .collect();
    json!(items)
}
