//! Core data types and statistics for assembly summaries.
//!
//! - [`SequenceRecord`](record::SequenceRecord): per-sequence counters
//!   produced by the parser (identifier, length, GC count, N count)
//! - [`AggregateReport`](stats::AggregateReport): the immutable summary
//!   computed once over the complete record collection
//! - [`Nxx`](stats::Nxx): one cumulative-length threshold statistic
//!   (N25/N50/N75) together with the number of sequences needed to reach it

pub mod record;
pub mod stats;
