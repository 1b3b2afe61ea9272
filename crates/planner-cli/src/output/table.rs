use planner_core::enums::TaskStatus;

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table: header line, dashed divider, one line per row.
///
/// Missing cells render as `-`. Columns wider than the terminal allows are
/// shrunk widest-first and their cells truncated with `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, None))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let color = if options.color { status_color(cell) } else { None };
                pad(&truncate(cell, *width), *width, color)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, color: Option<&str>) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m{fill}"),
        None => format!("{value}{fill}"),
    }
}

/// ANSI color for a cell that holds a task status.
fn status_color(cell: &str) -> Option<&'static str> {
    let status: TaskStatus = serde_json::from_value(serde_json::Value::from(cell)).ok()?;
    Some(match status {
        TaskStatus::Open => "36",
        TaskStatus::InProgress => "34",
        TaskStatus::Pending => "33",
        TaskStatus::Completed => "32",
    })
}
