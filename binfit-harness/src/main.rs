use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use binfit::{OutputShape, Packer};
use binfit_harness::bench::run_bench;
use binfit_harness::config::{CsvMode, HarnessConfig};
use binfit_harness::control::control_listing;
use binfit_harness::generate::generate_all;
use binfit_harness::io;
use binfit_harness::io::cli::{Cli, Command};
use binfit_harness::io::report::{render_bins, render_table, write_csv};
use binfit_harness::pack::pack_instance;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            HarnessConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed HarnessConfig: {config:?}");

    match args.command {
        Command::Generate { output_folder } => {
            create_folder(&output_folder)?;
            generate_all(&config, &output_folder)
        }
        Command::Bench {
            input_folder,
            csv_file,
            overwrite,
        } => {
            let mode = match overwrite {
                true => CsvMode::Overwrite,
                false => config.csv_mode,
            };
            let report = run_bench(&config, &input_folder)?;
            write_csv(&report, &csv_file, mode)?;
            println!("Algorithms tested and recorded in {}", csv_file.display());
            println!("{}", render_table(report.rows()));
            Ok(())
        }
        Command::Pack {
            input_file,
            algorithm,
            capacity,
            contents,
            output_file,
        } => {
            let shape = match contents {
                true => OutputShape::Contents,
                false => OutputShape::Count,
            };
            let output = pack_instance(
                &config,
                &input_file,
                algorithm.into(),
                capacity.unwrap_or(config.bin_capacity),
                shape,
                output_file.as_deref(),
            )?;
            match output.result.bins() {
                Some(bins) => println!("{}", render_bins(bins)),
                None => println!("{} bins", output.bin_count),
            }
            Ok(())
        }
        Command::Control { capacity } => {
            let packer = Packer::new(config.pack_config);
            let listing = control_listing(&packer, capacity.unwrap_or(config.bin_capacity))?;
            println!("{listing}");
            Ok(())
        }
    }
}

fn create_folder(folder: &Path) -> Result<()> {
    if !folder.exists() {
        fs::create_dir_all(folder)
            .with_context(|| format!("could not create folder: {}", folder.display()))?;
    }
    Ok(())
}
