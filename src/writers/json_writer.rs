use crate::error::Result;
use crate::models::Record;
use crate::table::Table;
use std::io::Write;

/// JSON array of row objects keyed by column name.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_table<R: Record, W: Write>(&self, table: &Table<R>, mut out: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut out, table.records())?;
        } else {
            serde_json::to_writer(&mut out, table.records())?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::Counties;
    use crate::models::Value;

    #[test]
    fn test_county_json() -> Result<()> {
        let table = Counties::new().use_index(["ST", "COUNTY"]).load()?;
        let alameda = table.loc(&[Value::from("CA"), Value::from("Alameda")])?;

        let mut buffer = Vec::new();
        JsonWriter::new().with_pretty(false).write_table(&alameda, &mut buffer)?;
        let parsed: serde_json::Value = serde_json::from_slice(&buffer)?;

        let row = &parsed[0];
        assert_eq!(row["FIPS"], "06001");
        assert_eq!(row["GEOHASH"], "9q9q1v");
        assert_eq!(row["DST"], 1);
        assert_eq!(row["TZOFFSET"], -8.0);
        Ok(())
    }
}
