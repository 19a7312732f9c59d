use crate::key::Key;
use heatdash_table::{Row, Scalar};
use std::collections::BTreeMap;

/// Coerce a scalar to a number for summation.
///
/// Numbers pass through, text is parsed as a decimal literal, everything
/// else (and any non-finite result) coerces to zero. A single malformed
/// field must never abort or poison a whole report, so this never fails
/// and never yields NaN.
#[must_use]
pub fn coerce_number(value: &Scalar) -> f64 {
    let n = match value {
        Scalar::Null => 0.0,
        Scalar::Int(i) => *i as f64,
        Scalar::Float(f) => *f,
        Scalar::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Per-key running totals, rebuilt from scratch on every call site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedAggregate {
    totals: BTreeMap<Key, f64>,
}

impl GroupedAggregate {
    /// Create an empty aggregate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one contribution to a key's total, initializing unseen keys to
    /// zero first.
    pub fn add(&mut self, key: Key, value: f64) {
        *self.totals.entry(key).or_insert(0.0) += value;
    }

    /// Get the total for a key
    #[must_use]
    pub fn total(&self, key: &Key) -> Option<f64> {
        self.totals.get(key).copied()
    }

    /// Get the number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if the aggregate has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterate (key, total) pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, f64)> {
        self.totals.iter().map(|(k, v)| (k, *v))
    }
}

/// Group rows by a derived key and sum a derived value per group.
///
/// The value goes through [`coerce_number`], so malformed fields contribute
/// zero. Summation is commutative: any permutation of the same rows yields
/// the same totals.
pub fn group_sum<'a, I, K, V>(rows: I, key_fn: K, value_fn: V) -> GroupedAggregate
where
    I: IntoIterator<Item = &'a Row>,
    K: Fn(&'a Row) -> Key,
    V: Fn(&'a Row) -> Scalar,
{
    let mut aggregate = GroupedAggregate::new();
    for row in rows {
        aggregate.add(key_fn(row), coerce_number(&value_fn(row)));
    }
    aggregate
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatdash_table::Table;

    fn cases() -> Table {
        let mut table = Table::new(vec!["Year".to_string(), "TotalDiag".to_string()]);
        table.push_values(vec![Scalar::Int(2019), Scalar::Int(100)]);
        table.push_values(vec![Scalar::Int(2019), Scalar::Int(50)]);
        table.push_values(vec![Scalar::Int(2020), Scalar::Int(80)]);
        table
    }

    fn year(row: &Row) -> Key {
        Key::from(&row["Year"])
    }

    fn total_diag(row: &Row) -> Scalar {
        row["TotalDiag"].clone()
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&Scalar::Int(7)), 7.0);
        assert_eq!(coerce_number(&Scalar::Float(2.5)), 2.5);
        assert_eq!(coerce_number(&Scalar::Text(" 12.5 ".to_string())), 12.5);
        assert_eq!(coerce_number(&Scalar::Text("n/a".to_string())), 0.0);
        assert_eq!(coerce_number(&Scalar::Null), 0.0);
        assert_eq!(coerce_number(&Scalar::Float(f64::NAN)), 0.0);
        assert_eq!(coerce_number(&Scalar::Float(f64::INFINITY)), 0.0);
    }

    #[test]
    fn test_group_sum_totals() {
        let table = cases();
        let aggregate = group_sum(table.rows(), year, total_diag);

        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate.total(&Key::from(2019)), Some(150.0));
        assert_eq!(aggregate.total(&Key::from(2020)), Some(80.0));
        assert_eq!(aggregate.total(&Key::from(2021)), None);
    }

    #[test]
    fn test_group_sum_order_independent() {
        let table = cases();
        let forward = group_sum(table.rows(), year, total_diag);

        let mut reversed: Vec<Row> = table.rows().to_vec();
        reversed.reverse();
        let backward = group_sum(reversed.iter(), year, total_diag);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_group_sum_malformed_values_contribute_zero() {
        let mut table = Table::new(vec!["Year".to_string(), "TotalDiag".to_string()]);
        table.push_values(vec![Scalar::Int(2019), Scalar::Text("n/a".to_string())]);
        table.push_values(vec![Scalar::Int(2019), Scalar::Int(10)]);
        table.push_values(vec![Scalar::Int(2019), Scalar::Null]);

        let aggregate = group_sum(table.rows(), year, total_diag);
        assert_eq!(aggregate.total(&Key::from(2019)), Some(10.0));
    }

    #[test]
    fn test_int_and_float_years_share_a_group() {
        let mut table = Table::new(vec!["Year".to_string(), "TotalDiag".to_string()]);
        table.push_values(vec![Scalar::Int(2019), Scalar::Int(1)]);
        table.push_values(vec![Scalar::Float(2019.0), Scalar::Int(2)]);

        let aggregate = group_sum(table.rows(), year, total_diag);
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate.total(&Key::from(2019)), Some(3.0));
    }
}
