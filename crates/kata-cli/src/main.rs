use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "kata",
    version,
    about = "Kata CLI (autocomplete ranking, natural sort, converters)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank completion candidates for a query
    Complete(CompleteArgs),
    /// Sort items in natural (human) order
    Natsort(NatsortArgs),
    /// Convert between numbers and Roman numerals
    Roman(RomanArgs),
    /// Reorder the decimal digits of a number in descending order
    Digits(DigitsArgs),
    /// Generate a Tribonacci-style sequence
    Tribonacci(TribonacciArgs),
    /// Check whether an input is a balanced bracket sequence
    Brackets(BracketsArgs),
}

#[derive(Args)]
struct CompleteArgs {
    /// Search term to match candidates against
    query: String,
    /// Candidate values
    items: Vec<String>,
    /// Maximum number of results to return
    #[arg(long, default_value_t = 10)]
    limit: usize,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NatsortArgs {
    /// Values to sort
    items: Vec<String>,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RomanArgs {
    #[command(subcommand)]
    command: RomanCommand,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum RomanCommand {
    /// Encode a number (1-3999) as a Roman numeral
    Encode { number: u32 },
    /// Decode a Roman numeral (case-insensitive)
    Decode { numeral: String },
}

#[derive(Args)]
struct DigitsArgs {
    /// Non-negative number to reorder
    number: i32,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TribonacciArgs {
    /// Seed values (up to three are meaningful; fewer are zero-padded)
    #[arg(short = 's', long = "seed")]
    seeds: Vec<i64>,
    /// Number of elements to generate
    #[arg(short = 'n', long = "count")]
    count: usize,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BracketsArgs {
    /// Bracket sequence to validate
    input: String,
    /// Emit JSON suitable for scripting
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct CompletionReport {
    query: String,
    limit: usize,
    results: Vec<String>,
}

#[derive(Serialize)]
struct SortReport {
    items: Vec<String>,
}

#[derive(Serialize)]
struct RomanReport {
    number: u32,
    numeral: String,
}

#[derive(Serialize)]
struct DigitsReport {
    input: i32,
    reordered: i32,
}

#[derive(Serialize)]
struct SequenceReport {
    seeds: Vec<i64>,
    count: usize,
    sequence: Vec<i64>,
}

#[derive(Serialize)]
struct BracketsReport {
    input: String,
    balanced: bool,
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Complete(args) => {
            let candidates: Vec<Option<&str>> =
                args.items.iter().map(|i| Some(i.as_str())).collect();
            let results = kata_match::autocomplete(&args.query, &candidates, args.limit)?;
            tracing::debug!(
                query = %args.query,
                candidates = candidates.len(),
                matches = results.len(),
                "ranked completion candidates"
            );
            if args.json {
                print_json(&CompletionReport {
                    query: args.query,
                    limit: args.limit,
                    results,
                })?;
            } else {
                for result in &results {
                    println!("{result}");
                }
            }
            Ok(0)
        }
        Command::Natsort(args) => {
            let sorted = kata_natsort::natural_sort(&args.items);
            if args.json {
                print_json(&SortReport { items: sorted })?;
            } else {
                for item in &sorted {
                    println!("{item}");
                }
            }
            Ok(0)
        }
        Command::Roman(args) => {
            let report = match args.command {
                RomanCommand::Encode { number } => RomanReport {
                    number,
                    numeral: kata_numeric::to_roman(number)?,
                },
                RomanCommand::Decode { numeral } => RomanReport {
                    number: kata_numeric::from_roman(&numeral)?,
                    numeral,
                },
            };
            if args.json {
                print_json(&report)?;
            } else {
                println!("{} => {}", report.number, report.numeral);
            }
            Ok(0)
        }
        Command::Digits(args) => {
            let reordered = kata_numeric::descending_digits(args.number)?;
            if args.json {
                print_json(&DigitsReport {
                    input: args.number,
                    reordered,
                })?;
            } else {
                println!("{} => {}", args.number, reordered);
            }
            Ok(0)
        }
        Command::Tribonacci(args) => {
            let sequence = kata_numeric::tribonacci(&args.seeds, args.count);
            if args.json {
                print_json(&SequenceReport {
                    seeds: args.seeds,
                    count: args.count,
                    sequence,
                })?;
            } else {
                let rendered: Vec<String> = sequence.iter().map(i64::to_string).collect();
                println!("{}", rendered.join(" "));
            }
            Ok(0)
        }
        Command::Brackets(args) => {
            let balanced = kata_brackets::is_balanced(&args.input);
            if args.json {
                print_json(&BracketsReport {
                    input: args.input,
                    balanced,
                })?;
            } else {
                println!("{}", if balanced { "balanced" } else { "unbalanced" });
            }
            Ok(if balanced { 0 } else { 1 })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
