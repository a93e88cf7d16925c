//! Canonical JSON encoding.
//!
//! Two values with the same logical content always encode to the same
//! bytes: object keys are sorted at every depth and numbers print the way
//! a browser's `JSON.stringify` prints them (`25.0` becomes `25`). The plot
//! URL is built from this encoding so it can be cached and bookmarked.

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Integral numbers below this magnitude are written out in full.
const DECIMAL_LIMIT: f64 = 1e21;

/// Rebuild `value` with object keys sorted at every depth.
///
/// `serde_json::Map` keeps insertion order when `preserve_order` is enabled
/// anywhere in the dependency graph, so keys are sorted here explicitly.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, inner) in entries {
                sorted.insert(key, canonicalize(inner));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serialize `value` to compact canonical JSON.
///
/// Types whose `Serialize` impl cannot produce a JSON value (maps with
/// non-string keys) encode as `null`.
pub fn to_canonical_string<T: Serialize>(value: &T) -> String {
    let value = canonicalize(serde_json::to_value(value).unwrap_or_default());
    let mut out = String::new();
    write_value(&value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            out.push('{');
            for (i, (key, inner)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(inner, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, inner) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(inner, out);
            }
            out.push(']');
        }
        Value::String(s) => write_string(s, out),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::Bool(_) | Value::Null => out.push_str(&value.to_string()),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push_str(&serde_json::to_string(s).unwrap_or_default());
}

/// Format `n` as JavaScript does: integral values below 1e21 in full
/// decimal, larger exponents with an explicit `+`.
fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < DECIMAL_LIMIT => integral_to_decimal(f),
        _ => {
            let text = n.to_string();
            if text.contains('e') && !text.contains("e-") {
                text.replacen('e', "e+", 1)
            } else {
                text
            }
        }
    }
}

/// Shortest round-trip digits of an integral `f`, padded with zeros.
fn integral_to_decimal(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:e}", f);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: usize = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let zeros = (exponent + 1).saturating_sub(digits.len());
    let sign = if f < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, digits, "0".repeat(zeros))
}

/// Percent-encode `raw` the way `encodeURIComponent` does: every byte
/// outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
pub fn percent_encode(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
