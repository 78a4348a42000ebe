use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputMode;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn print_json(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }
    let table = Table::new(data).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Print a command result. Table mode shows a flat object as field/value rows.
pub fn print_output(value: &Value, mode: OutputMode) {
    match (mode, value) {
        (OutputMode::Table, Value::Object(fields)) => print_table(&field_rows(fields)),
        _ => print_json(value),
    }
}

fn field_rows(fields: &serde_json::Map<String, Value>) -> Vec<FieldRow> {
    fields
        .iter()
        .map(|(field, value)| FieldRow {
            field: field.clone(),
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
        .collect()
}

pub fn print_error(err: &crate::error::AppError) {
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
    );
}
