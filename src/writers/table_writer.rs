use crate::error::Result;
use crate::models::{Column, Record};
use crate::table::Table;
use std::io::Write;

/// Aligned plain-text table.
///
/// Column names sit on the first line, index names on the second; index
/// values are left-aligned and data values right-aligned. Repeated outer
/// index values are blanked, so a state's counties list the state once.
/// Tables without an index show row numbers and no index-name line.
pub struct TableWriter {
    sparsify: bool,
}

impl TableWriter {
    pub fn new() -> Self {
        Self { sparsify: true }
    }

    pub fn with_sparsify(mut self, sparsify: bool) -> Self {
        self.sparsify = sparsify;
        self
    }

    pub fn write_table<R: Record, W: Write>(&self, table: &Table<R>, mut out: W) -> Result<()> {
        for line in self.render(table) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render the table as lines, without trailing whitespace.
    pub fn render<R: Record>(&self, table: &Table<R>) -> Vec<String> {
        let data_columns = table.data_columns();
        let named_index = !table.index().is_empty();
        let index_names: Vec<&str> = if named_index {
            table.index().iter().map(|c| c.name()).collect()
        } else {
            vec![""]
        };

        let mut index_cells: Vec<Vec<String>> = Vec::with_capacity(table.len());
        let mut data_cells: Vec<Vec<String>> = Vec::with_capacity(table.len());
        let mut previous: Vec<String> = Vec::new();

        for (position, row) in table.iter().enumerate() {
            let key: Vec<String> = if named_index {
                table.index_key(row).iter().map(|v| v.to_string()).collect()
            } else {
                vec![position.to_string()]
            };

            index_cells.push(self.sparsified(&key, &previous));
            data_cells.push(
                data_columns
                    .iter()
                    .map(|c| row.value(*c).to_string())
                    .collect(),
            );
            previous = key;
        }

        let index_widths: Vec<usize> = index_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                index_cells
                    .iter()
                    .map(|cells| cells[i].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let data_widths: Vec<usize> = data_columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                data_cells
                    .iter()
                    .map(|cells| cells[i].len())
                    .chain(std::iter::once(column.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let blank_index: Vec<String> = vec![String::new(); index_widths.len()];
        let mut lines = Vec::with_capacity(table.len() + 2);

        let names: Vec<String> = data_columns.iter().map(|c| c.name().to_string()).collect();
        lines.push(line(&blank_index, &index_widths, &names, &data_widths));

        if named_index {
            let names: Vec<String> = index_names.iter().map(|n| n.to_string()).collect();
            lines.push(line(&names, &index_widths, &[], &[]));
        }

        for (index, data) in index_cells.iter().zip(&data_cells) {
            lines.push(line(index, &index_widths, data, &data_widths));
        }

        lines
    }

    fn sparsified(&self, key: &[String], previous: &[String]) -> Vec<String> {
        if !self.sparsify || key.len() < 2 {
            return key.to_vec();
        }

        let mut cells = key.to_vec();
        for level in 0..key.len() - 1 {
            if previous.get(..=level) == key.get(..=level) {
                cells[level] = String::new();
            } else {
                break;
            }
        }
        cells
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn line(index: &[String], index_widths: &[usize], data: &[String], data_widths: &[usize]) -> String {
    let mut parts: Vec<String> = index
        .iter()
        .zip(index_widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    parts.extend(
        data.iter()
            .zip(data_widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width)),
    );
    parts.join("  ").trim_end().to_string()
}
