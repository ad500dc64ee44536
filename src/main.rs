//! # chatsheet CLI
//!
//! Command-line interface for the chatsheet library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatsheet::batch::{BatchReport, FileOutcome, convert_directory, convert_entry};
use chatsheet::classifier::TranscriptFormat;
use chatsheet::cli::Args;
use chatsheet::config::ConvertConfig;
use chatsheet::convert::Converter;
use chatsheet::format::OutputFormat;

fn main() {
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(report) if report.has_failures() => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> chatsheet::Result<BatchReport> {
    let total_start = Instant::now();
    let format: TranscriptFormat = args.layout.into();
    let output_format: OutputFormat = args.output_format.into();

    let config = ConvertConfig::new()
        .with_source_extension(args.source_ext.as_str())
        .with_sheet_name(args.sheet_name.as_str());
    let converter = Converter::with_config(format, config);

    if !args.quiet {
        println!("📊 chatsheet v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📖 Layout:  {}", format);
        println!("📂 Input:   {}", args.input.display());
        println!("📄 Format:  {}", output_format);
        println!();
    }

    let report = if args.input.is_dir() {
        convert_directory(&args.input, &converter, output_format)?
    } else {
        BatchReport::from(vec![convert_entry(&converter, &args.input, output_format)])
    };

    for outcome in report.outcomes() {
        print_outcome(outcome, args.quiet);
    }

    if !args.quiet {
        println!();
        println!("📋 Summary:");
        println!("   Converted: {}", report.converted());
        println!("   Skipped:   {}", report.skipped());
        println!("   Failed:    {}", report.failed());
        println!(
            "   Time:      {:.2}s",
            total_start.elapsed().as_secs_f64()
        );
    }

    Ok(report)
}

fn print_outcome(outcome: &FileOutcome, quiet: bool) {
    match outcome {
        FileOutcome::Converted(conversion) => {
            if !quiet {
                println!(
                    "✅ Successfully converted '{}' to '{}'",
                    conversion.input.display(),
                    conversion.output.display()
                );
            }
        }
        FileOutcome::Skipped { path, .. } => {
            if !quiet {
                println!("⏭️  Didn't attempt to convert file: {}", path.display());
            }
        }
        FileOutcome::Failed { path, error } => {
            eprintln!("❌ Error occurred converting file: {}", path.display());
            eprintln!("   {}", error);
        }
    }
}
