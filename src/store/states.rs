use crate::models::StateRecord;
use tracing::debug;

/// Which extended jurisdictions to append to the 50 states and DC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StateSet {
    /// Puerto Rico and the Virgin Islands
    pub with_territories: bool,
    /// Canadian provinces, coded `C0`..`C9`
    pub with_canada: bool,
    /// The Mexico aggregate, coded `M0`
    pub with_mexico: bool,
}

impl StateSet {
    pub fn base() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            with_territories: true,
            with_canada: true,
            with_mexico: true,
        }
    }
}

/// Compiled-in state row; converted to an owned [`StateRecord`] on every
/// table construction so no caller ever shares storage with another.
struct StateRow {
    state: &'static str,
    st: &'static str,
    fips: &'static str,
    tzoffset: f64,
    dst: bool,
    system: &'static str,
    ro: &'static [&'static str],
}

impl StateRow {
    const fn new(
        state: &'static str,
        st: &'static str,
        fips: &'static str,
        tzoffset: f64,
        dst: bool,
        system: &'static str,
        ro: &'static [&'static str],
    ) -> Self {
        Self {
            state,
            st,
            fips,
            tzoffset,
            dst,
            system,
            ro,
        }
    }

    fn to_record(&self) -> StateRecord {
        StateRecord::new(
            self.state.to_string(),
            self.st.to_string(),
            self.fips.to_string(),
            self.tzoffset,
            self.dst,
            self.system.to_string(),
            self.ro.iter().map(|ro| ro.to_string()).collect(),
        )
    }
}

// Where a state spans several systems or time zones, the values cover its
// major population center; all reliability organizations are listed.
const BASE_STATES: &[StateRow] = &[
    StateRow::new("Alabama", "AL", "01", -6.0, true, "EAST", &["SERC"]),
    StateRow::new("Alaska", "AK", "02", -9.0, true, "AK", &["NERC"]),
    StateRow::new("Arizona", "AZ", "04", -7.0, false, "WECC", &["WECC"]),
    StateRow::new("Arkansas", "AR", "05", -6.0, true, "EAST", &["SERC"]),
    StateRow::new("California", "CA", "06", -8.0, true, "WECC", &["WECC"]),
    StateRow::new("Colorado", "CO", "08", -7.0, true, "WECC", &["WECC"]),
    StateRow::new("Connecticut", "CT", "09", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("Delaware", "DE", "10", -5.0, true, "EAST", &["RF"]),
    StateRow::new("District of Columbia", "DC", "11", -5.0, true, "EAST", &["RF"]),
    StateRow::new("Florida", "FL", "12", -5.0, true, "EAST", &["SERC"]),
    StateRow::new("Georgia", "GA", "13", -5.0, true, "EAST", &["SERC"]),
    StateRow::new("Hawaii", "HI", "15", -9.0, false, "HI", &["NERC"]),
    StateRow::new("Idaho", "ID", "16", -7.0, true, "WECC", &["WECC"]),
    StateRow::new("Illinois", "IL", "17", -6.0, true, "EAST", &["SERC", "RF", "MRO"]),
    StateRow::new("Indiana", "IN", "18", -5.0, true, "EAST", &["RF"]),
    StateRow::new("Iowa", "IA", "19", -6.0, true, "EAST", &["MRO"]),
    StateRow::new("Kansas", "KS", "20", -6.0, true, "EAST", &["MRO"]),
    StateRow::new("Kentucky", "KY", "21", -6.0, true, "EAST", &["SERC"]),
    StateRow::new("Louisiana", "LA", "22", -6.0, true, "EAST", &["SERC"]),
    StateRow::new("Maine", "ME", "23", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("Maryland", "MD", "24", -5.0, true, "EAST", &["RF"]),
    StateRow::new("Massachusetts", "MA", "25", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("Michigan", "MI", "26", -5.0, true, "EAST", &["RF", "MRO"]),
    StateRow::new("Minnesota", "MN", "27", -6.0, true, "EAST", &["MRO"]),
    StateRow::new("Mississippi", "MS", "28", -6.0, true, "EAST", &["SERC"]),
    StateRow::new("Missouri", "MO", "29", -6.0, true, "EAST", &["SERC", "MRO"]),
    StateRow::new("Montana", "MT", "30", -7.0, true, "WECC", &["WECC", "MRO"]),
    StateRow::new("Nebraska", "NE", "31", -6.0, true, "EAST", &["MRO"]),
    StateRow::new("Nevada", "NV", "32", -7.0, true, "WECC", &["WECC"]),
    StateRow::new("New Hampshire", "NH", "33", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("New Jersey", "NJ", "34", -5.0, true, "EAST", &["RF"]),
    StateRow::new("New Mexico", "NM", "35", -7.0, true, "WECC", &["WECC", "MRO"]),
    StateRow::new("New York", "NY", "36", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("North Carolina", "NC", "37", -5.0, true, "EAST", &["SERC"]),
    StateRow::new("North Dakota", "ND", "38", -6.0, true, "EAST", &["MRO"]),
    StateRow::new("Ohio", "OH", "39", -5.0, true, "EAST", &["RF"]),
    StateRow::new("Oklahoma", "OK", "40", -6.0, true, "EAST", &["MRO", "SERC"]),
    StateRow::new("Oregon", "OR", "41", -8.0, true, "WECC", &["WECC"]),
    StateRow::new("Pennsylvania", "PA", "42", -5.0, true, "EAST", &["RF"]),
    StateRow::new("Rhode Island", "RI", "44", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("South Carolina", "SC", "45", -5.0, true, "EAST", &["SERC"]),
    StateRow::new("South Dakota", "SD", "46", -6.0, true, "EAST", &["MRO", "WECC"]),
    StateRow::new("Tennessee", "TN", "47", -6.0, true, "EAST", &["SERC"]),
    StateRow::new("Texas", "TX", "48", -6.0, true, "ERCOT", &["TRE", "MRO", "WECC"]),
    StateRow::new("Utah", "UT", "49", -7.0, true, "WECC", &["WECC"]),
    StateRow::new("Vermont", "VT", "50", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("Virginia", "VA", "51", -5.0, true, "EAST", &["SERC", "RF"]),
    StateRow::new("Washington", "WA", "53", -8.0, true, "WECC", &["WECC"]),
    StateRow::new("West Virginia", "WV", "54", -5.0, true, "EAST", &["RF"]),
    StateRow::new("Wisconsin", "WI", "55", -6.0, true, "EAST", &["MRO", "RF"]),
    StateRow::new("Wyoming", "WY", "56", -7.0, true, "WECC", &["WECC"]),
];

const TERRITORIES: &[StateRow] = &[
    StateRow::new("Puerto Rico", "PR", "72", -4.0, false, "PR", &["PR"]),
    StateRow::new("Virgin Islands", "VI", "78", -4.0, false, "VI", &["VI"]),
];

const CANADA: &[StateRow] = &[
    StateRow::new("Alberta", "AB", "C0", -7.0, true, "WECC", &["WECC"]),
    StateRow::new("British Columbia", "BC", "C1", -8.0, true, "WECC", &["WECC"]),
    StateRow::new("Manitoba", "MB", "C2", -6.0, true, "EAST", &["MRO"]),
    StateRow::new("New Brunswick", "NB", "C3", -4.0, true, "EAST", &["NPCC"]),
    StateRow::new("Newfoundland", "NL", "C4", -3.5, true, "EAST", &["NPCC"]),
    StateRow::new("Nova Scotia", "NS", "C5", -4.0, true, "EAST", &["NPCC"]),
    StateRow::new("Ontario", "ON", "C6", -5.0, true, "EAST", &["NPCC"]),
    StateRow::new("Prince Edward Island", "PE", "C7", -4.0, true, "EAST", &["NPCC"]),
    StateRow::new("Quebec", "QC", "C8", -5.0, true, "QUEBEC", &["NPCC"]),
    StateRow::new("Saskatchewan", "SK", "C9", -6.0, true, "EAST", &["MRO"]),
];

const MEXICO: &[StateRow] = &[
    StateRow::new("Mexico", "MX", "M0", -8.0, true, "WECC", &["WECC", "MFEC"]),
];

/// Build the state table for `set`, in canonical order: base states, then
/// territories, Canada and Mexico.
pub fn state_records(set: StateSet) -> Vec<StateRecord> {
    let mut rows: Vec<&StateRow> = BASE_STATES.iter().collect();
    if set.with_territories {
        rows.extend(TERRITORIES);
    }
    if set.with_canada {
        rows.extend(CANADA);
    }
    if set.with_mexico {
        rows.extend(MEXICO);
    }

    let records: Vec<StateRecord> = rows.into_iter().map(StateRow::to_record).collect();
    debug!(rows = records.len(), ?set, "built state table");
    records
}
