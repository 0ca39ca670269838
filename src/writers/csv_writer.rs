use crate::error::Result;
use crate::models::{Column, Record};
use crate::table::Table;
use std::io::Write;

/// CSV output with optional header row and index columns.
///
/// With the index enabled the index columns come first; a table without an
/// index gets a leading row-number column with an empty header instead.
pub struct CsvWriter {
    header: bool,
    index: bool,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            header: true,
            index: true,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn write_table<R: Record, W: Write>(&self, table: &Table<R>, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        let data_columns = table.data_columns();
        let positional = self.index && table.index().is_empty();

        if self.header {
            let mut header: Vec<&str> = Vec::new();
            if positional {
                header.push("");
            } else if self.index {
                header.extend(table.index().iter().map(|c| c.name()));
            }
            header.extend(data_columns.iter().map(|c| c.name()));
            writer.write_record(&header)?;
        }

        for (position, row) in table.iter().enumerate() {
            let mut fields: Vec<String> = Vec::new();
            if positional {
                fields.push(position.to_string());
            } else if self.index {
                fields.extend(table.index_key(row).iter().map(|v| v.to_string()));
            }
            fields.extend(data_columns.iter().map(|c| row.value(*c).to_string()));
            writer.write_record(&fields)?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{Counties, States};
    use crate::models::Value;

    fn render<R: Record>(writer: &CsvWriter, table: &Table<R>) -> String {
        let mut buffer = Vec::new();
        writer.write_table(table, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_state_row_with_index() -> Result<()> {
        let table = States::new().use_index(["ST"]).load()?;
        let california = table.loc(&[Value::from("CA")])?;

        assert_eq!(
            render(&CsvWriter::new(), &california),
            "ST,STATE,FIPS,TZOFFSET,DST,SYSTEM,RO\nCA,California,06,-8,1,WECC,WECC\n"
        );
        Ok(())
    }

    #[test]
    fn test_without_header_or_index() -> Result<()> {
        let table = States::new().use_index(["ST"]).load()?;
        let illinois = table.loc(&[Value::from("IL")])?;

        let writer = CsvWriter::new().with_header(false).with_index(false);
        assert_eq!(
            render(&writer, &illinois),
            "Illinois,17,-6,1,EAST,SERC|RF|MRO\n"
        );
        Ok(())
    }

    #[test]
    fn test_positional_index() -> Result<()> {
        let table = Counties::new().state("DC").load()?;
        let text = render(&CsvWriter::new(), &table);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(",ST,FIPS,COUNTY,LAT,LON,GEOHASH,TZOFFSET,DST,SYSTEM,RO")
        );
        assert!(lines.next().unwrap().starts_with("0,DC,11001,District of Columbia,"));
        Ok(())
    }

    #[test]
    fn test_multi_word_names_are_not_quoted() -> Result<()> {
        let table = States::new().use_index(["ST"]).load()?;
        let dc = table.loc(&[Value::from("DC")])?;
        let text = render(&CsvWriter::new().with_header(false), &dc);
        assert!(text.starts_with("DC,District of Columbia,11,"));
        Ok(())
    }
}
