use crate::writers::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

pub const LONG_ABOUT: &str = "\
Gets US state and county information based on Census Bureau FIPS codes.

State data:
  STATE     state name, e.g. \"California\"
  ST        state abbreviation, e.g. \"CA\"
  FIPS      state FIPS code, e.g. \"06\"
  TZOFFSET  timezone offset of the largest population center
  DST       1 if summer time is observed
  SYSTEM    grid interconnection, e.g. \"WECC\"
  RO        reliability organizations, separated by \"|\"

County data adds:
  COUNTY    county name without qualifiers such as \"County\" or \"Parish\"
  LAT, LON  county centroid, e.g. 37.647139, -121.912488
  GEOHASH   centroid geohash, e.g. \"9q9q1v\"

Examples:
  fips CA               California
  fips CA Alameda       Alameda County, California
  fips -f csv QC        Quebec as CSV
  fips --counties 2020_Gaz_counties_national.txt TX Harris
                        Harris County, Texas, from the Census Gazetteer
";

#[derive(Parser, Debug)]
#[command(name = "fips")]
#[command(about = "US state and county data accessor")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    #[arg(
        required = true,
        num_args = 1..=2,
        value_name = "LOCALE",
        help = "State abbreviation and optional county name ('help' for details)"
    )]
    pub locale: Vec<String>,

    #[arg(short, long, value_enum, help = "Output format [default: table]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Disable CSV header output")]
    pub no_header: bool,

    #[arg(long, help = "Disable CSV index output")]
    pub no_index: bool,

    #[arg(short, long, value_name = "OUTPUT", help = "Output file [default: stdout]")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "County file (ST,FIPS,COUNTY,LAT,LON CSV or Census Gazetteer) [default: bundled]"
    )]
    pub counties: Option<PathBuf>,

    #[arg(long, help = "Print the full error chain on failure")]
    pub debug: bool,

    #[arg(long, help = "Disable warning messages")]
    pub no_warning: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

impl Cli {
    pub fn wants_help(&self) -> bool {
        self.locale.first().is_some_and(|token| token == "help")
    }
}
