//! Printf-style message formatting
//!
//! Log operations take a list of typed values. When the first value is a
//! string containing a recognized format directive, it acts as the template
//! and the remaining values are substituted left-to-right; otherwise all
//! values are rendered and joined with single spaces.
//!
//! Recognized directives: `%s` (string), `%d`/`%i` (integer), `%f` (float),
//! `%j` (JSON), `%%` (literal percent). A directive with no remaining value
//! stays literal, and values left over after substitution are appended,
//! space-separated. Formatting is total: malformed input degrades to literal
//! rendering instead of failing.

use std::fmt;

/// A typed substitution value
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Json(serde_json::Value),
}

impl LogValue {
    fn integer_text(&self) -> String {
        match self {
            // %d truncates fractional values
            LogValue::Float(x) => (x.trunc() as i64).to_string(),
            other => other.to_string(),
        }
    }

    fn json_text(&self) -> String {
        let value = match self {
            LogValue::Str(s) => serde_json::Value::from(s.as_str()),
            LogValue::Int(i) => serde_json::Value::from(*i),
            LogValue::Uint(u) => serde_json::Value::from(*u),
            LogValue::Float(x) => serde_json::Value::from(*x),
            LogValue::Bool(b) => serde_json::Value::from(*b),
            LogValue::Json(v) => v.clone(),
        };
        serde_json::to_string(&value).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Str(s) => f.write_str(s),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Uint(u) => write!(f, "{}", u),
            LogValue::Float(x) => write!(f, "{}", x),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Str(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Str(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Int(value.into())
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Int(value)
    }
}

impl From<u32> for LogValue {
    fn from(value: u32) -> Self {
        LogValue::Uint(value.into())
    }
}

impl From<u64> for LogValue {
    fn from(value: u64) -> Self {
        LogValue::Uint(value)
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        LogValue::Json(value)
    }
}

/// Check if the template contains at least one recognized directive
pub fn has_directives(template: &str) -> bool {
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some('s' | 'd' | 'i' | 'f' | 'j' | '%') = chars.peek().copied() {
                return true;
            }
        }
    }
    false
}

/// Render a value list into the message body
pub fn format_values(values: &[LogValue]) -> String {
    let Some((first, rest)) = values.split_first() else {
        return String::new();
    };
    match first {
        LogValue::Str(template) if has_directives(template) => expand(template, rest),
        _ => join_values(values),
    }
}

fn join_values(values: &[LogValue]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand(template: &str, values: &[LogValue]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut used = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(d @ ('s' | 'd' | 'i' | 'f' | 'j')) => {
                chars.next();
                match values.get(used) {
                    Some(value) => {
                        used += 1;
                        match d {
                            'd' | 'i' => out.push_str(&value.integer_text()),
                            'j' => out.push_str(&value.json_text()),
                            _ => out.push_str(&value.to_string()),
                        }
                    }
                    // out of substitution values, the directive stays literal
                    None => {
                        out.push('%');
                        out.push(d);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for value in &values[used..] {
        out.push(' ');
        out.push_str(&value.to_string());
    }
    out
}
