//! # Literal Escaping
//!
//! Every piece of free text that ends up inside generated TypeScript passes
//! through [`escape_for_literal`] first. Generators then splice the result into
//! one of three literal forms:
//!
//! - template literals (`` `...` ``), used for page constants and prompts
//! - single-quoted strings (`'...'`)
//! - double-quoted strings (`"..."`)
//!
//! The substitutions run in a fixed order. Backslash has to go first, otherwise
//! the backslashes introduced by the later steps would be doubled again:
//!
//! | step | input | output |
//! |------|-------|--------|
//! | 1    | `\`   | `\\`   |
//! | 2    | `` ` `` | `` \` `` |
//! | 3    | `$`   | `\$`   |
//! | 4    | `'`   | `\'`   |
//! | 5    | `"`   | `\"`   |
//!
//! Line terminators are rewritten to escape sequences afterwards so that a
//! multi-line pain statement cannot break a quoted string either.
//!
//! `package.json` is JSON, where `\$` and `\'` are invalid escapes, so manifest
//! fields use [`escape_json_string`] instead.

use std::fmt;

/// Escape `s` so it can sit inside a JS template literal or quoted string.
///
/// Total: every input has an output, nothing fails.
///
/// ```
/// use mvpgen::escape::escape_for_literal;
///
/// assert_eq!(escape_for_literal("My `Tool` ${x}"), "My \\`Tool\\` \\${x}");
/// assert_eq!(escape_for_literal(r"a\b"), r"a\\b");
/// ```
pub fn escape_for_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    // One pass over the input is equivalent to the ordered replace chain: each
    // source character is rewritten once and output is never rescanned.
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

/// Escape `s` for the inside of a JSON string literal (no surrounding quotes).
pub fn escape_json_string(s: &str) -> String {
    // serde_json never fails on a &str; fall back to an empty value regardless.
    let quoted = serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""));
    quoted
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Free text that has already been through [`escape_for_literal`].
///
/// Template fields that land inside TypeScript literals use this type, so a
/// raw `String` cannot reach a literal by accident.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LiteralText(String);

impl LiteralText {
    pub fn new(raw: &str) -> Self {
        LiteralText(escape_for_literal(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LiteralText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free text escaped for the inside of a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonText(String);

impl JsonText {
    pub fn new(raw: &str) -> Self {
        JsonText(escape_json_string(raw))
    }
}

impl fmt::Display for JsonText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Count backticks that are not escaped by a preceding odd run of backslashes.
///
/// An even count means every template literal opened in `source` is closed.
pub fn unescaped_backticks(source: &str) -> usize {
    let mut count = 0;
    let mut backslashes = 0usize;
    for ch in source.chars() {
        match ch {
            '\\' => backslashes += 1,
            '`' => {
                if backslashes % 2 == 0 {
                    count += 1;
                }
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
    }
    count
}
