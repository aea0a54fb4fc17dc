//! XML output.
//!
//! Records become `<item>` children of a `<root>` element. Every element
//! carries a `type` attribute naming the runtime type of its value (`str`,
//! `int`, `float`, `bool`, `null`, `list`, `dict`). Dict keys become element
//! names; keys that are not valid XML names are written as
//! `<key name="...">` instead.

use greynoise::Value;

const DECLARATION: &str = "<?xml version=\"1.0\" ?>";
const INDENT: &str = "\t";

/// Render records as a tab-indented XML document.
pub fn render(records: &[Value]) -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push('\n');

    if records.is_empty() {
        out.push_str("<root/>");
        return out;
    }

    out.push_str("<root>\n");
    for record in records {
        write_element(&mut out, 1, "item", None, record);
    }
    out.push_str("</root>");
    out
}

fn write_element(out: &mut String, depth: usize, tag: &str, name: Option<&str>, value: &Value) {
    push_indent(out, depth);
    out.push('<');
    out.push_str(tag);
    if let Some(name) = name {
        push_attr(out, "name", name);
    }
    push_attr(out, "type", value.type_name());

    match value {
        Value::List(items) if !items.is_empty() => {
            out.push_str(">\n");
            for item in items {
                write_element(out, depth + 1, "item", None, item);
            }
            push_close(out, depth, tag);
        }
        Value::Dict(record) if !record.is_empty() => {
            out.push_str(">\n");
            for (key, child) in record.iter() {
                if is_valid_name(key) {
                    write_element(out, depth + 1, key, None, child);
                } else {
                    write_element(out, depth + 1, "key", Some(key), child);
                }
            }
            push_close(out, depth, tag);
        }
        scalar => match scalar_text(scalar) {
            Some(text) if !text.is_empty() => {
                out.push('>');
                push_escaped(out, &text);
                out.push_str("</");
                out.push_str(tag);
                out.push_str(">\n");
            }
            _ => out.push_str("/>\n"),
        },
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::List(_) | Value::Dict(_) => None,
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_close(out: &mut String, depth: usize, tag: &str) {
    push_indent(out, depth);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

/// Whether `key` can be used verbatim as an element name.
fn is_valid_name(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if key.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml")) {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
