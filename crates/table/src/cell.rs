use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully resolved cell value: the only shapes a canonical row may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Check if the value is null or whitespace-only text.
    ///
    /// Rows where every cell is blank are dropped during extraction.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.trim().is_empty(),
            Scalar::Int(_) | Scalar::Float(_) => false,
        }
    }

    /// Parse a CSV field into a `Scalar` with type inference.
    ///
    /// Empty fields become `Null`; fields that are entirely an integer or a
    /// finite decimal literal (optionally signed, surrounding whitespace
    /// tolerated) become numbers; everything else stays text. Spellings such
    /// as `nan` or `inf` are deliberately kept as text so aggregation never
    /// sees a non-finite number.
    #[must_use]
    pub fn parse(field: &str) -> Scalar {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Scalar::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Scalar::Int(i);
        }
        if trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+' || c == '.') {
            if let Ok(f) = trimmed.parse::<f64>() {
                if f.is_finite() {
                    return Scalar::Float(f);
                }
            }
        }
        Scalar::Text(field.to_string())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Null
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, ""),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(fl) => write!(f, "{fl}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Scalar::Null,
        }
    }
}

/// One spreadsheet cell as ingested, before resolution.
///
/// Spreadsheet libraries hand back structured values for rich text,
/// hyperlinks and formulas; resolution reduces each of them to the
/// display-equivalent scalar and nothing else survives.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Rich text as its runs, in document order.
    RichText(Vec<String>),
    Hyperlink {
        text: Option<String>,
        target: String,
    },
    /// A formula together with its already-computed result.
    Formula(Box<RawCell>),
    /// A cell-level error code such as `#DIV/0!`.
    Error(String),
}

impl RawCell {
    /// Reduce the cell to a scalar.
    ///
    /// Resolution never fails: shapes with no dedicated rule fall back to
    /// their string rendering rather than aborting the row.
    #[must_use]
    pub fn resolve(&self) -> Scalar {
        match self {
            RawCell::Empty => Scalar::Null,
            RawCell::Text(s) => Scalar::Text(s.clone()),
            RawCell::Number(n) => Scalar::Float(*n),
            RawCell::RichText(runs) => Scalar::Text(runs.concat()),
            RawCell::Formula(result) => result.resolve(),
            RawCell::Hyperlink {
                text: Some(text), ..
            } => Scalar::Text(text.clone()),
            other => Scalar::Text(other.to_string()),
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Empty => write!(f, ""),
            RawCell::Text(s) => write!(f, "{s}"),
            RawCell::Number(n) => write!(f, "{n}"),
            RawCell::Bool(b) => write!(f, "{b}"),
            RawCell::RichText(runs) => write!(f, "{}", runs.concat()),
            RawCell::Hyperlink { text, target } => {
                write!(f, "{}", text.as_deref().unwrap_or(target))
            }
            RawCell::Formula(result) => write!(f, "{result}"),
            RawCell::Error(code) => write!(f, "{code}"),
        }
    }
}
