use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A single cell of a reference table.
///
/// Text cells hold names and codes (FIPS codes stay text so leading zeros
/// survive), `Real` holds offsets and coordinates, and `Flag` holds the
/// daylight-saving indicator, which displays and serializes as `1`/`0`.
#[derive(Debug, Clone)]
pub enum Value {
    Text(String),
    Real(f64),
    Flag(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(real) => Some(*real),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Text(_) => 0,
            Value::Real(_) => 1,
            Value::Flag(_) => 2,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Real(a), Value::Real(b)) => a.total_cmp(b),
            (Value::Flag(a), Value::Flag(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.pad(text),
            Value::Real(real) => f.pad(&real.to_string()),
            Value::Flag(flag) => f.pad(if *flag { "1" } else { "0" }),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Real(real) => serializer.serialize_f64(*real),
            Value::Flag(flag) => serializer.serialize_u8(u8::from(*flag)),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

impl From<f64> for Value {
    fn from(real: f64) -> Self {
        Value::Real(real)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Flag(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::from("06").to_string(), "06");
        assert_eq!(Value::from(-8.0).to_string(), "-8");
        assert_eq!(Value::from(-3.5).to_string(), "-3.5");
        assert_eq!(Value::from(37.647139).to_string(), "37.647139");
        assert_eq!(Value::from(true).to_string(), "1");
        assert_eq!(Value::from(false).to_string(), "0");
    }

    #[test]
    fn test_padding_respects_width() {
        assert_eq!(format!("{:>5}", Value::from("CA")), "   CA");
        assert_eq!(format!("{:<4}|", Value::from(-8.0)), "-8  |");
    }

    #[test]
    fn test_ordering_within_and_across_variants() {
        assert!(Value::from("AK") < Value::from("AL"));
        assert!(Value::from(-9.0) < Value::from(-8.0));
        assert!(Value::from("ZZ") < Value::from(0.0));
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn test_text_never_equals_number() {
        assert_ne!(Value::from("1"), Value::from(1.0));
        assert_ne!(Value::from("1"), Value::from(true));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&vec![
            Value::from("CA"),
            Value::from(-8.0),
            Value::from(true),
        ])
        .unwrap();
        assert_eq!(json, r#"["CA",-8.0,1]"#);
    }
}
