use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::core::stats::AggregateReport;
use crate::parsing::fasta::parse_fasta_file;

const HEADER: &str = "filename;total_length;number_of_sequences;average_length;largest_contig;shortest_contig;total_GC;GC_percentage;total_N;N_percentage";

#[derive(Args)]
pub struct AppendArgs {
    /// Input FASTA file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Delimited results file to append to (created if missing)
    #[arg(required = true)]
    pub output: PathBuf,
}

/// Execute the append subcommand.
///
/// # Errors
///
/// Returns an error if the input cannot be read, contains no sequences, or
/// the output file cannot be written.
pub fn run(args: AppendArgs, verbose: bool) -> anyhow::Result<()> {
    let records = parse_fasta_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let report = AggregateReport::from_records(&records)
        .with_context(|| format!("cannot summarize {}", args.input.display()))?;

    let filename = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    append_row(&args.output, &filename, &report)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if verbose {
        eprintln!(
            "Appended results for {} to {}",
            filename,
            args.output.display()
        );
    }

    Ok(())
}

/// Append one result row, writing the header line first when the file is
/// newly created or empty.
fn append_row(path: &Path, filename: &str, report: &AggregateReport) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    if file.metadata()?.len() == 0 {
        writeln!(file, "{HEADER}")?;
    }

    writeln!(
        file,
        "\"{}\";{};{};{};{};{};{};{:.2};{};{:.2}",
        filename,
        report.total_length,
        report.sequence_count,
        report.average_length,
        report.largest_contig,
        report.shortest_contig,
        report.total_gc,
        report.gc_percent,
        report.total_n,
        report.n_percent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::SequenceRecord;

    fn sample_report() -> AggregateReport {
        let records = vec![
            SequenceRecord::new("a", 8, 4, 2),
            SequenceRecord::new("b", 4, 1, 0),
        ];
        AggregateReport::from_records(&records).unwrap()
    }

    #[test]
    fn test_append_twice_writes_one_header_and_two_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let report = sample_report();

        append_row(&path, "one.fa", &report).unwrap();
        append_row(&path, "two.fa", &report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("\"one.fa\";12;2;6;8;4;5;"));
        assert!(lines[2].starts_with("\"two.fa\";12;2;6;8;4;5;"));
    }

    #[test]
    fn test_header_written_into_existing_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "").unwrap();

        append_row(&path, "one.fa", &sample_report()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(HEADER));
    }

    #[test]
    fn test_existing_rows_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let report = sample_report();

        append_row(&path, "one.fa", &report).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();
        append_row(&path, "two.fa", &report).unwrap();
        let after = std::fs::read_to_string(&path).unwrap();

        assert!(after.starts_with(&before));
    }

    #[test]
    fn test_row_percentages_have_two_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        append_row(&path, "one.fa", &sample_report()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // 5 GC / 12 bp and 2 N / 12 bp
        assert!(content.contains(";41.67;"));
        assert!(content.trim_end().ends_with(";16.67"));
    }
}
