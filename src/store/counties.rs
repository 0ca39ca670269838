use crate::error::{FipsError, Result};
use crate::models::{CountyRecord, StateRecord};
use crate::readers::{CountyReader, CountyRow};
use crate::store::states::{state_records, StateSet};
use crate::utils::constants::GEOHASH_PRECISION;
use crate::utils::geohash;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tracing::{debug, warn};
use validator::Validate;

/// Where county centroid rows come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountySource {
    /// The table compiled into the crate.
    #[default]
    Embedded,
    /// A five-column CSV or a Census Gazetteer county file.
    File(PathBuf),
}

/// Build the county table from the bundled centroid data, joined with the
/// base state table.
pub fn county_records() -> Result<Vec<CountyRecord>> {
    county_records_from(&CountySource::Embedded)
}

/// Build the county table from `source`.
///
/// Rows of an external file outside the base states (Puerto Rico's
/// municipios in the national Gazetteer file) are skipped.
pub fn county_records_from(source: &CountySource) -> Result<Vec<CountyRecord>> {
    let rows = match source {
        CountySource::Embedded => CountyReader::new().read_embedded()?,
        CountySource::File(path) => {
            let mut rows = CountyReader::new().read_path(path)?;
            let base: HashSet<String> = state_records(StateSet::base())
                .into_iter()
                .map(|state| state.st)
                .collect();

            let before = rows.len();
            rows.retain(|row| base.contains(&row.st));
            if rows.len() < before {
                warn!(
                    skipped = before - rows.len(),
                    path = %path.display(),
                    "skipped counties outside the base states"
                );
            }
            rows
        }
    };
    join_states(rows)
}

/// Join raw county rows with their owning states.
///
/// Every row must reference a base state, and its FIPS code must begin with
/// that state's FIPS code. FIPS codes and (ST, COUNTY) pairs must be unique.
pub fn join_states(rows: Vec<CountyRow>) -> Result<Vec<CountyRecord>> {
    let states: HashMap<String, StateRecord> = state_records(StateSet::base())
        .into_iter()
        .map(|state| (state.st.clone(), state))
        .collect();

    check_unique(&rows)?;

    let records = rows
        .into_iter()
        .map(|row| join_row(row, &states))
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = records.len(), "built county table");
    Ok(records)
}

fn check_unique(rows: &[CountyRow]) -> Result<()> {
    let mut fips = HashSet::with_capacity(rows.len());
    let mut names = HashSet::with_capacity(rows.len());

    for row in rows {
        if !fips.insert(row.fips.as_str()) {
            return Err(FipsError::InvalidCountyData(format!(
                "duplicate county FIPS {}",
                row.fips
            )));
        }
        if !names.insert((row.st.as_str(), row.county.as_str())) {
            return Err(FipsError::InvalidCountyData(format!(
                "duplicate county {} {}",
                row.st, row.county
            )));
        }
    }

    Ok(())
}

fn join_row(row: CountyRow, states: &HashMap<String, StateRecord>) -> Result<CountyRecord> {
    let state = states.get(&row.st).ok_or_else(|| FipsError::OrphanCounty {
        fips: row.fips.clone(),
        st: row.st.clone(),
    })?;

    if !row.fips.starts_with(&state.fips) {
        return Err(FipsError::InvalidCountyData(format!(
            "FIPS {} of {} {} does not start with state FIPS {}",
            row.fips, row.county, row.st, state.fips
        )));
    }

    let geohash = geohash::encode(row.lat, row.lon, GEOHASH_PRECISION)?;
    let record = CountyRecord::with_state(state, row.fips, row.county, row.lat, row.lon, geohash);
    record.validate()?;

    Ok(record)
}
