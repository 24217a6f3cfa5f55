//! Rendering contributed environment entries for the host.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::CoreResult;

/// Output format for environment entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvFormat {
    /// `export KEY='value'`, suitable for `eval` or `source`.
    #[default]
    Shell,
    /// `KEY="value"` with C-style escapes.
    Dotenv,
    /// A JSON object.
    Json,
}

/// Renders environment entries in the given format.
///
/// Keys appear in sorted order. Every line-based format ends each entry with
/// a newline; an empty map renders as an empty string (or `{}` for JSON).
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_env(env: &BTreeMap<String, String>, format: EnvFormat) -> CoreResult<String> {
    let rendered = match format {
        EnvFormat::Shell => env.iter().fold(String::new(), |mut out, (key, value)| {
            let _ = writeln!(out, "export {key}='{}'", value.replace('\'', r"'\''"));
            out
        }),
        EnvFormat::Dotenv => env.iter().fold(String::new(), |mut out, (key, value)| {
            let _ = writeln!(out, "{key}=\"{}\"", escape_dotenv(value));
            out
        }),
        EnvFormat::Json => serde_json::to_string_pretty(env)?,
    };
    Ok(rendered)
}

fn escape_dotenv(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str(r"\n"),
            '\r' => escaped.push_str(r"\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
