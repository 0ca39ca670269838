/// FIPS code widths
pub const STATE_FIPS_WIDTH: usize = 2;
pub const COUNTY_FIPS_WIDTH: usize = 5;

/// Separator between reliability organizations in the RO column
pub const RO_SEPARATOR: &str = "|";

/// Geohash alphabet and the precision stored for county centroids
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";
pub const GEOHASH_PRECISION: usize = 6;

/// Settings
pub const SETTINGS_FILE: &str = "fips.toml";
pub const ENV_PREFIX: &str = "FIPS";

/// Process exit codes
pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_SYNTAX: u8 = 2;
