use crate::error::{FipsError, Result};
use crate::utils::constants::GEOHASH_ALPHABET;

/// Encode a latitude/longitude pair as a base-32 geohash
///
/// Bits alternate longitude, latitude, starting with longitude; every five
/// bits select one character.
///
/// # Examples
/// ```
/// use fips::utils::geohash_encode;
///
/// assert_eq!(geohash_encode(37.647139, -121.912488, 6).unwrap(), "9q9q1v");
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(FipsError::InvalidCoordinate(format!(
            "Latitude {} is outside [-90, 90]",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(FipsError::InvalidCoordinate(format!(
            "Longitude {} is outside [-180, 180]",
            longitude
        )));
    }

    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);
    let mut hash = String::with_capacity(precision);
    let mut even_bit = true;
    let mut bits = 0usize;
    let mut bit_count = 0;

    while hash.len() < precision {
        let (range, value) = if even_bit {
            (&mut lon_range, longitude)
        } else {
            (&mut lat_range, latitude)
        };

        let mid = (range.0 + range.1) / 2.0;
        if value >= mid {
            bits = (bits << 1) | 1;
            range.0 = mid;
        } else {
            bits <<= 1;
            range.1 = mid;
        }

        even_bit = !even_bit;
        bit_count += 1;

        if bit_count == 5 {
            hash.push(GEOHASH_ALPHABET[bits] as char);
            bits = 0;
            bit_count = 0;
        }
    }

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_county_centroids() {
        assert_eq!(encode(37.647139, -121.912488, 6).unwrap(), "9q9q1v"); // Alameda
        assert_eq!(encode(32.532237, -86.646440, 6).unwrap(), "djf3h6"); // Autauga
        assert_eq!(encode(43.846213, -104.570020, 6).unwrap(), "9xv9km"); // Weston
    }

    #[test]
    fn test_precision() {
        assert_eq!(encode(37.647139, -121.912488, 3).unwrap(), "9q9");
        assert_eq!(encode(37.647139, -121.912488, 0).unwrap(), "");
        assert_eq!(encode(37.647139, -121.912488, 9).unwrap().len(), 9);
    }

    #[test]
    fn test_out_of_range() {
        assert!(encode(91.0, 0.0, 6).is_err());
        assert!(encode(0.0, -181.0, 6).is_err());
    }
}
