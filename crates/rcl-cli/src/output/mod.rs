use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become a `key / value` table with nested fields flattened to
/// dotted keys; arrays of objects inside them follow as their own sections.
fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_array_table(items),
        Value::Object(map) => {
            let mut fields = Vec::new();
            let mut sections = Vec::new();
            flatten(None, map, &mut fields, &mut sections);

            let rows = fields
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            let mut out = table::render_table(&["key", "value"], &rows, options());
            for (name, items) in sections {
                out.push_str(&format!("\n\n{name}:\n"));
                out.push_str(&render_array_table(&items));
            }
            out
        }
        scalar => table::render_table(&["value"], &[vec![value_to_cell(scalar)]], options()),
    }
}

fn flatten(
    prefix: Option<&str>,
    map: &Map<String, Value>,
    fields: &mut Vec<(String, Value)>,
    sections: &mut Vec<(String, Vec<Value>)>,
) {
    for (key, value) in map {
        let path = prefix.map_or_else(|| key.clone(), |prefix| format!("{prefix}.{key}"));
        match value {
            Value::Object(inner) => flatten(Some(&path), inner, fields, sections),
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                sections.push((path, items.clone()));
            }
            other => fields.push((path, other.clone())),
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    // Columns keep first-seen order so related fields stay adjacent.
    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            let mut fields = Vec::new();
            let mut nested = Vec::new();
            flatten(None, map, &mut fields, &mut nested);
            for (name, rows) in nested {
                fields.push((name, Value::from(rows.len())));
            }
            fields
        })
        .collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for fields in &flattened {
        for (key, _) in fields {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = flattened
        .iter()
        .map(|fields| {
            headers
                .iter()
                .map(|header| {
                    fields
                        .iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, value)| value_to_cell(value))
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace(['\n', '\r'], " "),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}
