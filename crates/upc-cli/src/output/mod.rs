use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let max_width = table::terminal_width();
    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) => render_rows(&items, max_width),
        Value::Object(map) => render_object(&map, max_width),
        scalar => table::render_table(&["value"], &[vec![value_to_cell(&scalar)]], max_width),
    };
    Ok(rendered)
}

/// Scalar fields become a key/value table. Fields holding rows (entries,
/// broken links) are rendered after it as their own titled tables.
fn render_object(map: &Map<String, Value>, max_width: Option<usize>) -> String {
    let mut fields = Vec::new();
    let mut sections = Vec::new();

    for (key, value) in flatten(map, "") {
        match value {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                sections.push(format!("{key}:\n{}", render_rows(items, max_width)));
            }
            other => fields.push(vec![key, value_to_cell(other)]),
        }
    }

    let mut blocks = Vec::with_capacity(1 + sections.len());
    if !fields.is_empty() {
        blocks.push(table::render_table(&["key", "value"], &fields, max_width));
    }
    blocks.extend(sections);
    blocks.join("\n\n")
}

/// Nested objects are inlined with dotted keys (`report.broken`).
fn flatten<'a>(map: &'a Map<String, Value>, prefix: &str) -> Vec<(String, &'a Value)> {
    let mut out = Vec::new();
    for (key, value) in map {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => out.extend(flatten(inner, &key)),
            other => out.push((key, other)),
        }
    }
    out
}

fn render_rows(items: &[Value], max_width: Option<usize>) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, max_width);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, max_width)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => {
            if items.is_empty() {
                String::from("-")
            } else {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
