//! Rendering of command results as a box-drawn table, JSON or CSV.

use std::io::Write;

use serde_json::{Map, Value};

use crate::config::OutputFormat;
use crate::Result;

/// Rows of values under named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Empty table with the given column names.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render empty.
    pub fn push(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Write the table to `out` in `format`.
    pub fn write<W: Write>(&self, format: OutputFormat, out: W) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    fn cells(&self, row: &[Value]) -> Vec<String> {
        (0..self.columns.len())
            .map(|i| row.get(i).map(cell).unwrap_or_default())
            .collect()
    }

    fn write_table<W: Write>(&self, mut out: W) -> Result<()> {
        let rendered: Vec<Vec<String>> = self.rows.iter().map(|r| self.cells(r)).collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                rendered
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let bars: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, bars.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!(" {:<width$} ", c, width = *w))
                .collect();
            format!("│{}│", padded.join("│"))
        };

        writeln!(out, "{}", rule("┌", "┬", "┐"))?;
        writeln!(out, "{}", line(&self.columns))?;
        writeln!(out, "{}", rule("├", "┼", "┤"))?;
        for cells in &rendered {
            writeln!(out, "{}", line(cells))?;
        }
        writeln!(out, "{}", rule("└", "┴", "┘"))?;
        Ok(())
    }

    fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        let records: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let record: Map<String, Value> = self
                    .columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                Value::Object(record)
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(self.cells(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Plain-text rendering of a single value.
fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(" "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> Table {
        let mut table = Table::new(["index", "value"]);
        table.push(vec![json!(0), json!("alpha")]);
        table.push(vec![json!(1), json!(2.5)]);
        table
    }

    fn render(table: &Table, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        table.write(format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_table_format() {
        let text = render(&sample_table(), OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌───────┬───────┐");
        assert_eq!(lines[1], "│ index │ value │");
        assert_eq!(lines[3], "│ 0     │ alpha │");
        assert_eq!(lines[4], "│ 1     │ 2.5   │");
        assert_eq!(lines[5], "└───────┴───────┘");
    }

    #[test]
    fn test_json_format() {
        let text = render(&sample_table(), OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            json!([{"index": 0, "value": "alpha"}, {"index": 1, "value": 2.5}])
        );
    }

    #[test]
    fn test_csv_format() {
        let text = render(&sample_table(), OutputFormat::Csv);
        assert_eq!(text, "index,value\n0,alpha\n1,2.5\n");
    }

    #[test]
    fn test_short_rows_render_empty_cells() {
        let mut table = Table::new(["a", "b"]);
        table.push(vec![json!([1.0, 2.0])]);
        assert_eq!(render(&table, OutputFormat::Csv), "a,b\n1.0 2.0,\n");
        assert_eq!(table.len(), 1);
    }
}
