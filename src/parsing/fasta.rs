//! Streaming parser for FASTA-style sequence files.
//!
//! Lines are consumed one at a time into a reusable buffer and only per-record
//! counters are kept, so the working set is bounded by the longest single line
//! plus the records parsed so far, independent of total file size.
//!
//! Any line whose first byte is `>` starts a new record; every other line is
//! sequence content for the current record. Content is never validated:
//! bytes other than `G`/`C`/`N` (case-insensitive) are uncounted but still
//! contribute to the record length.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::record::SequenceRecord;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER_MARKER: u8 = b'>';

/// Counter accumulators for the record currently in progress.
#[derive(Default)]
struct Accumulator {
    id: String,
    length: u64,
    gc_count: u64,
    n_count: u64,
}

impl Accumulator {
    fn count_line(&mut self, line: &[u8]) {
        self.length += line.len() as u64;
        for &byte in line {
            match byte {
                b'G' | b'C' | b'g' | b'c' => self.gc_count += 1,
                b'N' | b'n' => self.n_count += 1,
                _ => {}
            }
        }
    }

    /// Finalize the record in progress, if any content was accumulated.
    ///
    /// Finalization is keyed on a nonzero length, so a header immediately
    /// followed by another header (or end of input) yields no record.
    fn finalize_into(&mut self, records: &mut Vec<SequenceRecord>) {
        if self.length > 0 {
            let acc = std::mem::take(self);
            records.push(SequenceRecord::new(
                acc.id, acc.length, acc.gc_count, acc.n_count,
            ));
        }
    }
}

/// Parse a FASTA file into per-sequence records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read. Content is
/// never a parse failure; an input without headers simply yields no records
/// (or one anonymous record if it has content lines).
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_fasta_reader(reader)
}

/// Parse FASTA records from any buffered reader.
pub fn parse_fasta_reader<R: BufRead>(mut reader: R) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current = Accumulator::default();
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        if line.first() == Some(&HEADER_MARKER) {
            current.finalize_into(&mut records);
            current.id = String::from_utf8_lossy(&line[1..]).into_owned();
        } else {
            current.count_line(&line);
        }
    }
    current.finalize_into(&mut records);

    debug!("parsed {} sequence records", records.len());
    Ok(records)
}
