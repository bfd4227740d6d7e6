use std::path::PathBuf;
use std::process::ExitCode;

use healthscatter::{run_scatter, Dataset, ScatterConfig};
use log::{error, info};

const DEFAULT_DATA: &str = "assets/data/data.csv";

struct Args {
    config: Option<PathBuf>,
    data: PathBuf,
}

fn parse_args() -> Result<Args, String> {
    let mut config = None;
    let mut data = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config expects a file path")?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                return Err("usage: healthscatter [--config <file>] [<data.csv>]".to_string());
            }
            other if other.starts_with('-') => return Err(format!("unknown option {other}")),
            other => {
                if data.replace(PathBuf::from(other)).is_some() {
                    return Err("only one data file may be given".to_string());
                }
            }
        }
    }
    Ok(Args {
        config,
        data: data.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA)),
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let cfg = match &args.config {
        Some(path) => match ScatterConfig::from_file(path) {
            Ok(cfg) => {
                info!("loaded configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                error!("failed to load configuration {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => ScatterConfig::default(),
    };

    let dataset = match Dataset::from_path(&args.data) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("failed to load data {}: {e}", args.data.display());
            return ExitCode::FAILURE;
        }
    };

    match run_scatter(dataset, cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
