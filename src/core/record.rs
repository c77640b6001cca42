use serde::{Deserialize, Serialize};

/// A single sequence summarized during parsing.
///
/// Only counters are retained; the sequence content itself is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Identifier from the header line: everything after the leading `>`,
    /// unmodified (embedded whitespace and description text included).
    pub id: String,

    /// Number of content bytes belonging to this record (header excluded).
    pub length: u64,

    /// Count of `G`/`C` bytes, case-insensitive.
    pub gc_count: u64,

    /// Count of `N` bytes, case-insensitive.
    pub n_count: u64,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, length: u64, gc_count: u64, n_count: u64) -> Self {
        Self {
            id: id.into(),
            length,
            gc_count,
            n_count,
        }
    }
}
