use crate::group::GroupedAggregate;
use crate::key::Key;
use serde::Serialize;

/// A chart-ready time series: parallel key/total sequences in ascending
/// key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub keys: Vec<Key>,
    pub totals: Vec<f64>,
}

/// One entry of a ranked series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub key: Key,
    pub total: f64,
}

/// A descending-by-total, size-bounded view over a grouped aggregate.
///
/// Entries are in rank order (largest first); a caller presenting a
/// horizontal ranking reverses them before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSeries {
    pub entries: Vec<RankEntry>,
}

impl RankedSeries {
    /// Keys in rank order
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Totals in rank order
    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.total).collect()
    }
}

impl GroupedAggregate {
    /// Project the aggregate onto a time axis: (key, total) pairs in
    /// ascending key order.
    #[must_use]
    pub fn project(&self) -> TimeSeries {
        let mut keys = Vec::with_capacity(self.len());
        let mut totals = Vec::with_capacity(self.len());
        for (key, total) in self.iter() {
            keys.push(key.clone());
            totals.push(total);
        }
        TimeSeries { keys, totals }
    }

    /// Rank the aggregate by total, descending, truncated to `n` entries.
    ///
    /// The sort is stable over the aggregate's ascending-key iteration, so
    /// tied totals keep ascending key order and repeated calls on the same
    /// input produce identical output.
    #[must_use]
    pub fn rank(&self, n: usize) -> RankedSeries {
        let mut entries: Vec<RankEntry> = self
            .iter()
            .map(|(key, total)| RankEntry {
                key: key.clone(),
                total,
            })
            .collect();
        entries.sort_by(|a, b| b.total.total_cmp(&a.total));
        entries.truncate(n);
        RankedSeries { entries }
    }
}
