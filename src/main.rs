//! csvscrub CLI - Sanitize text columns in delimited listing exports
//!
//! # Main Command
//!
//! ```bash
//! csvscrub clean listing.csv listing_clean.csv     # Full cleaning pipeline
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! csvscrub parse listing.csv        # Just parse, dump records as JSON
//! csvscrub normalize "Café–Münchner"  # Run the field normalizer on values
//! ```

use clap::{Parser, Subcommand};
use csvscrub::{load_csv_file, normalize, scrub_csv, ScrubOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "csvscrub")]
#[command(about = "Sanitize text columns in delimited listing exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a delimited file and write the sanitized copy
    Clean {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Field delimiter (default ';')
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Columns to scrub, comma-separated (default: the listing text columns)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Print the scrub report as JSON on stdout
        #[arg(long)]
        report: bool,
    },

    /// Parse a delimited file and output its records as JSON
    Parse {
        /// Input file
        input: PathBuf,

        /// Field delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the field normalizer on argument values
    Normalize {
        /// Values to normalize, one result per line
        values: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            input,
            output,
            delimiter,
            columns,
            report,
        } => cmd_clean(&input, &output, delimiter, columns, report),

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),

        Commands::Normalize { values } => cmd_normalize(&values),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    input: &Path,
    output: &Path,
    delimiter: Option<char>,
    columns: Option<Vec<String>>,
    report: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ScrubOptions::default();
    if delimiter.is_some() {
        options.delimiter = delimiter;
    }
    if let Some(columns) = columns {
        options.text_columns = columns;
    }

    let scrub_report = scrub_csv(input, output, &options)?;

    if report {
        println!("{}", serde_json::to_string_pretty(&scrub_report)?);
    }

    eprintln!("✨ Clean copy saved to: {}", output.display());
    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing: {}", input.display());

    let (table, report) = load_csv_file(input, delimiter)?;

    eprintln!("   Encoding: {}", report.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        match report.delimiter {
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        },
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", report.headers.join(", "));
    if report.malformed_rows > 0 {
        eprintln!("   ⚠️ Skipped {} malformed row(s)", report.malformed_rows);
    }
    eprintln!("✅ Parsed {} row(s)", table.row_count());

    let json = serde_json::to_string_pretty(&table.to_json_records())?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_normalize(values: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for value in values {
        println!("{}", normalize(Some(value.as_str())));
    }
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
