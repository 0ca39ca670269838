use crate::error::{FipsError, Result};
use crate::utils::constants::COUNTY_FIPS_WIDTH;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// County centroid table compiled into the crate.
const COUNTY_DATA: &str = include_str!("../../data/counties.csv");

/// A raw row of the county centroid table, before it is joined with its
/// state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountyRow {
    #[serde(rename = "ST")]
    pub st: String,

    #[serde(rename = "FIPS")]
    pub fips: String,

    #[serde(rename = "COUNTY")]
    pub county: String,

    #[serde(rename = "LAT")]
    pub lat: f64,

    #[serde(rename = "LON")]
    pub lon: f64,
}

/// A row of the Census Bureau county Gazetteer file
/// (`*_Gaz_counties_national.txt`, tab separated).
#[derive(Debug, Deserialize)]
struct GazetteerRow {
    #[serde(rename = "USPS")]
    usps: String,

    #[serde(rename = "GEOID")]
    geoid: String,

    #[serde(rename = "NAME")]
    name: String,

    #[serde(rename = "INTPTLAT")]
    lat: f64,

    #[serde(rename = "INTPTLONG")]
    lon: f64,
}

/// Legal/statistical area descriptions dropped from Gazetteer names.
/// Longer qualifiers come first; a lowercase " city" is kept so that
/// independent cities stay distinct from counties of the same name.
const NAME_QUALIFIERS: &[&str] = &[
    " City and Borough",
    " Census Area",
    " Planning Region",
    " Municipality",
    " Borough",
    " County",
    " Parish",
];

pub struct CountyReader {
    trim: bool,
}

impl CountyReader {
    pub fn new() -> Self {
        Self { trim: true }
    }

    pub fn with_trim(trim: bool) -> Self {
        Self { trim }
    }

    /// Read the county table bundled with the crate
    pub fn read_embedded(&self) -> Result<Vec<CountyRow>> {
        self.read_counties(COUNTY_DATA.as_bytes())
    }

    /// Read county rows from CSV with an `ST,FIPS,COUNTY,LAT,LON` header
    pub fn read_counties<R: Read>(&self, source: R) -> Result<Vec<CountyRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(source);

        let mut rows = Vec::new();
        for (line, result) in reader.deserialize::<CountyRow>().enumerate() {
            let row = result?;
            Self::check_row(&row, line + 2)?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Read county rows from a Census Gazetteer county file.
    ///
    /// Names lose their qualifier (`"Alameda County"` becomes `"Alameda"`)
    /// and the internal point is used as the centroid.
    pub fn read_gazetteer<R: Read>(&self, source: R) -> Result<Vec<CountyRow>> {
        // Gazetteer headers carry trailing padding, so always trim here
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut rows = Vec::new();
        for (line, result) in reader.deserialize::<GazetteerRow>().enumerate() {
            let gazetteer = result?;
            let row = CountyRow {
                st: gazetteer.usps,
                fips: gazetteer.geoid,
                county: strip_qualifier(&gazetteer.name).to_string(),
                lat: gazetteer.lat,
                lon: gazetteer.lon,
            };
            Self::check_row(&row, line + 2)?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Read a county file, detecting the Gazetteer layout by its `USPS`
    /// header.
    pub fn read_path(&self, path: &Path) -> Result<Vec<CountyRow>> {
        let text = std::fs::read_to_string(path)?;
        let body = text.trim_start_matches('\u{feff}');
        let gazetteer = body.starts_with("USPS");
        debug!(path = %path.display(), gazetteer, "reading county file");

        if gazetteer {
            self.read_gazetteer(body.as_bytes())
        } else {
            self.read_counties(body.as_bytes())
        }
    }

    fn check_row(row: &CountyRow, line: usize) -> Result<()> {
        // FIPS codes stay text; a numeric parse upstream would drop the leading zero
        if row.fips.len() != COUNTY_FIPS_WIDTH || !row.fips.chars().all(|c| c.is_ascii_digit()) {
            return Err(FipsError::InvalidCountyData(format!(
                "line {}: FIPS '{}' is not a {}-digit code",
                line, row.fips, COUNTY_FIPS_WIDTH
            )));
        }

        if row.county.is_empty() {
            return Err(FipsError::InvalidCountyData(format!(
                "line {}: empty county name for FIPS {}",
                line, row.fips
            )));
        }

        Ok(())
    }
}

fn strip_qualifier(name: &str) -> &str {
    NAME_QUALIFIERS
        .iter()
        .find_map(|qualifier| name.strip_suffix(qualifier))
        .unwrap_or(name)
}

impl Default for CountyReader {
    fn default() -> Self {
        Self::new()
    }
}
