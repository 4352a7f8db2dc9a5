use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::errors::{EnvRenderError, Result};
use crate::core::models::env_file::{EnvEntry, EnvFile};
use crate::core::traits::parser::EnvParser;

/// `$NAME`, `${NAME}` and their `\$` escaped forms.
static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\)?\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("variable pattern is valid")
});

/// Parses `.env` files.
///
/// Supports:
/// - `KEY=value` and `KEY: value` entries, with an optional `export ` prefix
/// - Single-quoted values, taken literally
/// - Double-quoted values with `\n`, `\r`, `\t`, `\"` and `\\` escapes
/// - Quoted values spanning several lines, up to the closing quote
/// - Inline `# comments` after unquoted or quoted values
/// - `$NAME` / `${NAME}` expansion in unquoted and double-quoted values,
///   looked up in earlier entries first and then the process environment
/// - Comment lines (`# ...`) and blank lines
pub struct DotenvParser {
    file: PathBuf,
}

impl DotenvParser {
    /// A parser that reports errors against `file`.
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    fn error(&self, line_number: usize, detail: impl std::fmt::Display) -> EnvRenderError {
        EnvRenderError::ParseError {
            file: self.file.clone(),
            detail: format!("line {line_number}: {detail}"),
        }
    }

    /// Parse a single line. Returns `None` for blanks and comments.
    fn parse_line(
        &self,
        raw: &str,
        line_number: usize,
        known: &HashMap<String, String>,
    ) -> Result<Option<EnvEntry>> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let trimmed = trimmed
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(trimmed);

        // Key/value separator: whichever of '=' or ':' comes first
        let Some(sep_pos) = trimmed.find(['=', ':']) else {
            return Err(self.error(
                line_number,
                format!("expected KEY=value, got: {trimmed}"),
            ));
        };

        let key = trimmed[..sep_pos].trim();
        if key.is_empty() {
            return Err(self.error(line_number, "empty key"));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(self.error(line_number, format!("invalid key: {key}")));
        }

        let value = self.parse_value(&trimmed[sep_pos + 1..], line_number, known)?;

        Ok(Some(EnvEntry {
            key: key.to_string(),
            value,
            line_number,
        }))
    }

    fn parse_value(
        &self,
        raw: &str,
        line_number: usize,
        known: &HashMap<String, String>,
    ) -> Result<String> {
        let value = raw.trim_start();
        let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            return Ok(expand_variables(strip_inline_comment(raw), known));
        };

        let body = &value[1..];
        let Some(end) = find_closing_quote(body, quote) else {
            return Err(self.error(line_number, format!("unterminated {quote} quoted value")));
        };

        let rest = body[end + 1..].trim_start();
        if !rest.is_empty() && !rest.starts_with('#') {
            return Err(self.error(
                line_number,
                format!("unexpected characters after closing quote: {rest}"),
            ));
        }

        let inner = &body[..end];
        if quote == '\'' {
            Ok(inner.to_string())
        } else {
            Ok(expand_variables(&unescape(inner), known))
        }
    }
}

/// Drop a ` # comment` from an unquoted value and trim it.
///
/// A `#` only starts a comment when preceded by whitespace, so
/// `COLOR=#fff` keeps its value.
fn strip_inline_comment(raw: &str) -> &str {
    match raw.find(" #").or_else(|| raw.find("\t#")) {
        Some(pos) => raw[..pos].trim(),
        None => raw.trim(),
    }
}

/// Byte offset of the closing quote in `body`, skipping backslash escapes
/// inside double quotes.
fn find_closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' && quote == '"' {
            escaped = true;
            continue;
        }
        if c == quote {
            return Some(idx);
        }
    }
    None
}

/// Process double-quote escapes. `\$` is left in place for expansion.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn expand_variables(value: &str, known: &HashMap<String, String>) -> String {
    if !value.contains('$') {
        return value.to_string();
    }

    VARIABLE
        .replace_all(value, |caps: &Captures| {
            let name = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();

            if caps.get(1).is_some() {
                // Escaped: keep the reference text without the backslash
                return caps[0][1..].to_string();
            }

            known
                .get(name)
                .cloned()
                .or_else(|| std::env::var(name).ok())
                .unwrap_or_default()
        })
        .into_owned()
}

/// The quote a definition leaves open, if any.
fn open_quote(raw: &str) -> Option<char> {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        return None;
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let sep_pos = trimmed.find(['=', ':'])?;
    let value = trimmed[sep_pos + 1..].trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    find_closing_quote(&value[1..], quote)
        .is_none()
        .then_some(quote)
}

impl EnvParser for DotenvParser {
    fn parse(&self, content: &str) -> Result<EnvFile> {
        let mut entries = Vec::new();
        let mut known = HashMap::new();
        let lines: Vec<&str> = content.lines().collect();

        let mut idx = 0;
        while idx < lines.len() {
            let line_number = idx + 1;
            let mut logical = lines[idx].to_string();
            idx += 1;

            // Quoted values may span lines up to the closing quote
            while idx < lines.len() && open_quote(&logical).is_some() {
                logical.push('\n');
                logical.push_str(lines[idx]);
                idx += 1;
            }

            if let Some(entry) = self.parse_line(&logical, line_number, &known)? {
                known.insert(entry.key.clone(), entry.value.clone());
                entries.push(entry);
            }
        }

        Ok(EnvFile {
            entries,
            source_path: Some(self.file.clone()),
        })
    }
}
