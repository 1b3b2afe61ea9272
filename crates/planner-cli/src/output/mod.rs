use planner_core::responses::StatusBar;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Task fields in the order a reader scans them; other keys follow, sorted.
const COLUMN_ORDER: [&str; 7] = [
    "id",
    "title",
    "date",
    "time",
    "status",
    "category",
    "description",
];

/// Characters in a full-width dashboard bar.
const BAR_CELLS: usize = 20;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Dashboard bars as a table with a drawn bar column.
#[must_use]
pub fn render_bars(bars: &[StatusBar]) -> String {
    let rows = bars
        .iter()
        .map(|bar| {
            vec![
                bar.status.to_string(),
                bar.count.to_string(),
                format!("{:.0}%", bar.width),
                draw_bar(bar.width),
            ]
        })
        .collect::<Vec<_>>();
    table::render_table(
        &["status", "count", "width", "bar"],
        &rows,
        table_options(),
    )
}

fn draw_bar(width: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((width.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_CELLS - filled))
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    let options = table_options();
    match value {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let objects = items
                .iter()
                .filter_map(Value::as_object)
                .collect::<Vec<_>>();
            let headers = ordered_headers(&objects);
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            let rows = objects
                .iter()
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            Ok(table::render_table(&header_refs, &rows, options))
        }
        Value::Array(items) => {
            let rows = items
                .iter()
                .map(|item| vec![cell(item)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["value"], &rows, options))
        }
        Value::Object(map) => {
            let headers = ordered_headers(&[map]);
            let rows = headers
                .iter()
                .map(|key| vec![key.clone(), map.get(key).map_or_else(String::new, cell)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![cell(scalar)]], options)),
    }
}

fn ordered_headers(objects: &[&Map<String, Value>]) -> Vec<String> {
    let mut known = COLUMN_ORDER
        .iter()
        .filter(|column| objects.iter().any(|map| map.contains_key(**column)))
        .map(|column| (*column).to_string())
        .collect::<Vec<_>>();
    let mut extra = objects
        .iter()
        .flat_map(|map| map.keys())
        .filter(|key| !COLUMN_ORDER.contains(&key.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    extra.sort();
    extra.dedup();
    known.extend(extra);
    known
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}
