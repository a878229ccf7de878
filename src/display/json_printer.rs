//! Colorized JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in cyan
//! - Strings in green
//! - Numbers in yellow
//! - Booleans in magenta
//! - Null in red

use serde_json::Value;

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const INDENT: &str = "  ";

/// Render a JSON value with 2-space indentation.
///
/// When `use_color` is false the output is identical to
/// `serde_json::to_string_pretty`, suitable for piping.
pub fn render_json(value: &Value, use_color: bool) -> String {
    if !use_color {
        return serde_json::to_string_pretty(value).unwrap_or_default();
    }

    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => paint(out, RED, "null"),
        Value::Bool(b) => paint(out, MAGENTA, &b.to_string()),
        Value::Number(n) => paint(out, YELLOW, &n.to_string()),
        Value::String(s) => paint(out, GREEN, &quote(s)),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                separator(out, i, depth + 1);
                write_value(out, item, depth + 1);
            }
            closing(out, ']', depth);
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                separator(out, i, depth + 1);
                paint(out, CYAN, &quote(key));
                out.push_str(": ");
                write_value(out, item, depth + 1);
            }
            closing(out, '}', depth);
        }
    }
}

fn paint(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

fn separator(out: &mut String, index: usize, depth: usize) {
    if index > 0 {
        out.push(',');
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn closing(out: &mut String, bracket: char, depth: usize) {
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push(bracket);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Remove ANSI escape sequences from colored output.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_plain_output_matches_pretty_json() {
        let value = json!({"alg": "HS256", "typ": "JWT"});
        assert_eq!(
            render_json(&value, false),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }

    #[test]
    fn test_colored_output_has_same_layout() {
        let value = json!({
            "sub": "1234567890",
            "admin": true,
            "iat": 1516239022,
            "roles": ["a", "b"],
            "meta": {"nested": null, "empty": {}, "list": []}
        });
        let colored = render_json(&value, true);
        assert_eq!(
            strip_ansi(&colored),
            serde_json::to_string_pretty(&value).unwrap()
        );
    }

    #[test]
    fn test_colored_output_uses_color_per_type() {
        let colored = render_json(&json!({"s": "x", "n": 1, "b": false, "z": null}), true);
        assert!(colored.contains(&format!("{CYAN}\"s\"{RESET}")));
        assert!(colored.contains(&format!("{GREEN}\"x\"{RESET}")));
        assert!(colored.contains(&format!("{YELLOW}1{RESET}")));
        assert!(colored.contains(&format!("{MAGENTA}false{RESET}")));
        assert!(colored.contains(&format!("{RED}null{RESET}")));
    }

    #[test]
    fn test_strings_are_escaped() {
        let colored = render_json(&json!({"q": "say \"hi\"\n"}), true);
        assert!(strip_ansi(&colored).contains(r#""say \"hi\"\n""#));
    }

    #[test]
    fn test_paint_appends_color_text_and_reset() {
        let mut out = String::from("x");
        paint(&mut out, GREEN, "\"ok\"");
        assert_eq!(out, "x\x1b[32m\"ok\"\x1b[0m");
    }
}
