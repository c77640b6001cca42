use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::SequenceRecord;
use crate::core::stats::{length_histogram, AggregateReport};
use crate::parsing::fasta::parse_fasta_file;

#[derive(Args)]
pub struct ReportArgs {
    /// Input FASTA file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the sequence length histogram
    #[arg(long)]
    pub histogram: bool,

    /// Histogram bucket size in bp
    #[arg(short = 'i', long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}

/// Execute the report subcommand.
///
/// # Errors
///
/// Returns an error if the input cannot be read or contains no sequences.
pub fn run(args: ReportArgs, verbose: bool) -> anyhow::Result<()> {
    let records = parse_fasta_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Parsed {} sequences from {}",
            records.len(),
            args.input.display()
        );
    }

    let report = AggregateReport::from_records(&records)
        .with_context(|| format!("cannot summarize {}", args.input.display()))?;

    match args.format {
        OutputFormat::Text => {
            print_text_report(&report);
            if args.histogram {
                print_histogram(&records, args.interval);
            }
        }
        OutputFormat::Json => {
            print_json_report(&report, &records, args.histogram, args.interval)?;
        }
    }

    Ok(())
}

fn print_text_report(report: &AggregateReport) {
    println!("\nTotal length of sequence:\t{} bp", report.total_length);
    println!("Total number of sequences:\t{}", report.sequence_count);
    println!("Average contig length is:\t{} bp", report.average_length);
    println!("Largest contig:\t\t{} bp", report.largest_contig);
    println!("Shortest contig:\t\t{} bp", report.shortest_contig);
    println!(
        "N25 stats:\t\t\t25% of total sequence length is contained in the {} sequences >= {} bp",
        report.n25.sequences, report.n25.length
    );
    println!(
        "N50 stats:\t\t\t50% of total sequence length is contained in the {} sequences >= {} bp",
        report.n50.sequences, report.n50.length
    );
    println!(
        "N75 stats:\t\t\t75% of total sequence length is contained in the {} sequences >= {} bp",
        report.n75.sequences, report.n75.length
    );
    println!("Total GC count:\t\t\t{} bp", report.total_gc);
    println!("GC %:\t\t\t\t{:.2} %", report.gc_percent);
    println!("Number of Ns:\t\t\t{}", report.total_n);
    println!("Ns %:\t\t\t\t{:.2} %", report.n_percent);
}

fn print_histogram(records: &[SequenceRecord], interval: u64) {
    println!("\nLength histogram:");
    for (bucket, count) in length_histogram(records, interval) {
        println!("{}:{}\t{}", bucket, bucket + interval - 1, count);
    }
}

fn print_json_report(
    report: &AggregateReport,
    records: &[SequenceRecord],
    histogram: bool,
    interval: u64,
) -> anyhow::Result<()> {
    let mut value = serde_json::to_value(report)?;
    if histogram {
        let buckets: serde_json::Map<String, serde_json::Value> =
            length_histogram(records, interval)
                .into_iter()
                .map(|(bucket, count)| (bucket.to_string(), count.into()))
                .collect();
        value["length_histogram"] = serde_json::Value::Object(buckets);
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
