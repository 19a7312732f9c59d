use heatdash_table::Scalar;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A group discriminant.
///
/// Compared by value and totally ordered (null, then numbers, then text)
/// so aggregates can live in ordered maps; numbers use `f64::total_cmp`.
#[derive(Debug, Clone)]
pub enum Key {
    Null,
    Number(f64),
    Text(String),
}

impl Key {
    /// Create a numeric key. Negative zero is normalized so `0` and `-0`
    /// land in the same group.
    #[must_use]
    pub fn number(n: f64) -> Self {
        Key::Number(if n == 0.0 { 0.0 } else { n })
    }

    /// Create a text key
    #[must_use]
    pub fn text<S: Into<String>>(s: S) -> Self {
        Key::Text(s.into())
    }
}

impl From<&Scalar> for Key {
    fn from(value: &Scalar) -> Self {
        match value {
            Scalar::Null => Key::Null,
            Scalar::Int(i) => Key::number(*i as f64),
            Scalar::Float(f) => Key::number(*f),
            Scalar::Text(s) => Key::Text(s.clone()),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::number(i as f64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Null, Key::Null) => Ordering::Equal,
            (Key::Null, _) => Ordering::Less,
            (_, Key::Null) => Ordering::Greater,
            (Key::Number(a), Key::Number(b)) => a.total_cmp(b),
            (Key::Number(_), Key::Text(_)) => Ordering::Less,
            (Key::Text(_), Key::Number(_)) => Ordering::Greater,
            (Key::Text(a), Key::Text(b)) => a.cmp(b),
        }
    }
}

/// True when the float is exactly representable as an `i64`.
fn as_integral(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Some(n as i64)
    } else {
        None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, ""),
            Key::Number(n) => match as_integral(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            Key::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Key::Null => serializer.serialize_unit(),
            Key::Number(n) => match as_integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Key::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Key::from(&Scalar::Int(2019)), Key::from(&Scalar::Float(2019.0)));
        assert_eq!(Key::text("ICD-10"), Key::from("ICD-10"));
        assert_eq!(Key::number(-0.0), Key::number(0.0));
    }

    #[test]
    fn test_total_order() {
        let mut keys = vec![
            Key::text("B"),
            Key::from(2020),
            Key::Null,
            Key::text("A"),
            Key::from(2019),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                Key::Null,
                Key::from(2019),
                Key::from(2020),
                Key::text("A"),
                Key::text("B"),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::from(2019).to_string(), "2019");
        assert_eq!(Key::number(3.5).to_string(), "3.5");
        assert_eq!(Key::text("Heat stroke").to_string(), "Heat stroke");
    }

    #[test]
    fn test_serialize() {
        let keys = vec![Key::Null, Key::from(2019), Key::number(3.5), Key::text("x")];
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"[null,2019,3.5,"x"]"#);
    }
}
