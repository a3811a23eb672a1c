//! Batch front end: mine a delimited transaction file and print the
//! frequent itemsets.
//!
//! ```bash
//! apriori 1000-out1.csv --min-support 20
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};

use apriori::{
    loader::{load_numeric_transactions, load_transactions},
    parse_min_support, AprioriError, CountingStrategy, Miner, MinerConfig, OutputFormat, Report,
    Result,
};

#[derive(Parser, Debug)]
#[command(name = "apriori")]
#[command(about = "Mine frequent itemsets from a delimited transaction file")]
#[command(version)]
struct Args {
    /// Transaction file, one transaction per line
    input: PathBuf,

    /// Minimum number of supporting transactions
    #[arg(short = 's', long, allow_hyphen_values = true)]
    min_support: Option<String>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Parse items as integers and reject any other field
    #[arg(long)]
    numeric: bool,

    /// Largest itemset size to mine
    #[arg(short = 'k', long)]
    max_len: Option<usize>,

    /// Support counting strategy
    #[arg(long, value_enum)]
    counting: Option<CountingStrategy>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// JSON config file; command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if !err.is_user_facing() {
                error!("{:?}", err);
            }
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build_config(args: &Args) -> Result<MinerConfig> {
    let mut config = match &args.config {
        Some(path) => MinerConfig::from_json_file(path)?,
        None => MinerConfig::default(),
    };

    match &args.min_support {
        Some(text) => config.min_support = parse_min_support(text)?,
        None if args.config.is_none() => {
            return Err(AprioriError::invalid_parameter(
                "--min-support is required without --config",
            ))
        }
        None => {}
    }
    if let Some(max_len) = args.max_len {
        config = config.with_max_len(max_len);
    }
    if let Some(counting) = args.counting {
        config = config.with_counting(counting);
    }
    if let Some(threads) = args.threads {
        config = config.with_num_threads(threads);
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<String> {
    let config = build_config(args)?;
    let miner = Miner::new(config);
    let input = args.input.display().to_string();

    if args.numeric {
        let transactions = load_numeric_transactions(&args.input, args.delimiter)?;
        let frequent = miner.run(transactions)?;
        Report::new(&input, &frequent).render(args.format)
    } else {
        let transactions = load_transactions(&args.input, args.delimiter)?;
        let frequent = miner.run(transactions)?;
        Report::new(&input, &frequent).render(args.format)
    }
}
