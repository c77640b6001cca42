//! Aggregate statistics over a parsed sequence collection.
//!
//! All statistics require global knowledge of the length distribution
//! (extremes, NXX), so aggregation happens once over the complete record
//! collection rather than streaming.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::core::record::SequenceRecord;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("no sequences found in input")]
    EmptyInput,
}

/// One cumulative-length threshold statistic (N25/N50/N75).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nxx {
    /// Length of the sequence at which the running sum over the
    /// descending-sorted lengths first reaches the threshold.
    pub length: u64,

    /// How many of the longest sequences were needed to reach it.
    pub sequences: usize,
}

/// Summary statistics for one assembly, computed once and immutable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total_length: u64,
    pub sequence_count: usize,
    /// Truncating integer average (`total_length / sequence_count`).
    pub average_length: u64,
    pub largest_contig: u64,
    pub shortest_contig: u64,
    pub n25: Nxx,
    pub n50: Nxx,
    pub n75: Nxx,
    pub total_gc: u64,
    pub gc_percent: f64,
    pub total_n: u64,
    pub n_percent: f64,
}

impl AggregateReport {
    /// Compute the aggregate report for a complete record collection.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::EmptyInput` if `records` is empty; averages and
    /// extremes are undefined without at least one sequence.
    pub fn from_records(records: &[SequenceRecord]) -> Result<Self, StatsError> {
        if records.is_empty() {
            return Err(StatsError::EmptyInput);
        }

        let mut total_length: u64 = 0;
        let mut total_gc: u64 = 0;
        let mut total_n: u64 = 0;
        let mut lengths: Vec<u64> = Vec::with_capacity(records.len());

        for record in records {
            total_length += record.length;
            total_gc += record.gc_count;
            total_n += record.n_count;
            lengths.push(record.length);
        }

        lengths.sort_unstable_by(|a, b| b.cmp(a));

        let sequence_count = records.len();
        let (n25, n50, n75) = nxx_scan(&lengths, total_length);

        Ok(Self {
            total_length,
            sequence_count,
            average_length: total_length / sequence_count as u64,
            largest_contig: lengths[0],
            shortest_contig: lengths[lengths.len() - 1],
            n25,
            n50,
            n75,
            total_gc,
            gc_percent: percent_of(total_gc, total_length),
            total_n,
            n_percent: percent_of(total_n, total_length),
        })
    }
}

/// Percentage of `count` over `total`, with `total == 0` defined as 0%
/// (an assembly made entirely of zero-length records).
fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Single pass over the descending-sorted lengths computing N25, N50 and N75.
///
/// Thresholds are `total/4`, `total/2` and `3*total/4` with truncating
/// integer division, applied identically for every output mode. Each
/// threshold records the first sequence at which the running sum reaches it;
/// the scan stops once the 75% threshold is met.
fn nxx_scan(lengths: &[u64], total_length: u64) -> (Nxx, Nxx, Nxx) {
    let thresholds = [total_length / 4, total_length / 2, 3 * total_length / 4];
    let mut hits = [Nxx {
        length: 0,
        sequences: 0,
    }; 3];
    let mut filled = 0;
    let mut running: u64 = 0;

    // Thresholds are nondecreasing, so they are satisfied in order; one
    // element may satisfy several at once.
    'scan: for (rank, &length) in lengths.iter().enumerate() {
        running += length;
        while running >= thresholds[filled] {
            hits[filled] = Nxx {
                length,
                sequences: rank + 1,
            };
            filled += 1;
            if filled == hits.len() {
                break 'scan;
            }
        }
    }

    (hits[0], hits[1], hits[2])
}

/// Bucket sequence lengths into intervals of `interval_size`, keyed by the
/// bucket's lower bound.
pub fn length_histogram(records: &[SequenceRecord], interval_size: u64) -> BTreeMap<u64, u64> {
    let mut histogram = BTreeMap::new();
    for record in records {
        let bucket = record.length / interval_size * interval_size;
        *histogram.entry(bucket).or_insert(0) += 1;
    }
    histogram
}
