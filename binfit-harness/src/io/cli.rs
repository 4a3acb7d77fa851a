use std::path::PathBuf;

use binfit::Algorithm;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the average, best and worst case instance files for every configured size
    Generate {
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: PathBuf,
    },
    /// Time FF and FFD on every instance file and record the results
    Bench {
        #[arg(short, long, value_name = "FOLDER")]
        input_folder: PathBuf,
        #[arg(long, value_name = "FILE", default_value = "results.csv")]
        csv_file: PathBuf,
        /// Replace the contents of the CSV file instead of appending to it
        #[arg(long)]
        overwrite: bool,
    },
    /// Pack a single instance file
    Pack {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_enum, default_value = "ffd")]
        algorithm: AlgorithmArg,
        #[arg(long, value_name = "CAPACITY")]
        capacity: Option<u64>,
        /// Report the contents of every bin instead of only the bin count
        #[arg(long)]
        contents: bool,
        #[arg(short, long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },
    /// Print the FF and FFD packings of a small fixed sample
    Control {
        #[arg(long, value_name = "CAPACITY")]
        capacity: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum AlgorithmArg {
    Ff,
    Ffd,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Ff => Algorithm::FirstFit,
            AlgorithmArg::Ffd => Algorithm::FirstFitDecreasing,
        }
    }
}
