//! Result rendering for the `table`, `json` and `csv` output formats.

use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// One output row.
///
/// JSON and CSV go through `Serialize`; the table uses `HEADERS` and `cells`.
pub trait Record: Serialize {
    /// Column titles for table output.
    const HEADERS: &'static [&'static str];

    /// Cell text for table output, floats printed with `precision` decimals.
    fn cells(&self, precision: usize) -> Vec<String>;
}

/// Format a float with a fixed number of decimals.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Write `records` to `out` in `format`.
pub fn render<R, W>(records: &[R], format: OutputFormat, precision: usize, out: &mut W) -> Result<()>
where
    R: Record,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = records.iter().map(|r| r.cells(precision)).collect();
            write_table(R::HEADERS, &rows, out)?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(headers: &[&str], rows: &[Vec<String>], out: &mut W) -> Result<()> {
    let placeholder;
    let rows = if rows.is_empty() {
        placeholder = vec![vec!["(no data)".to_string()]];
        &placeholder[..]
    } else {
        rows
    };

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(out, "{}", table_line(&widths, headers))?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        writeln!(out, "{}", table_line(&widths, &cells))?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

fn table_line(widths: &[usize], cells: &[&str]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| format!(" {:<w$} ", cells.get(i).copied().unwrap_or(""), w = w))
        .collect();
    format!("│{}│", padded.join("│"))
}
