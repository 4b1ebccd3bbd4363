//! flatfile CLI
//!
//! Inspect and edit settings and delimited spreadsheet files.

use std::path::Path;

use clap::{Parser, Subcommand};
use flatfile::{
    Config, FileLoader, FileSaver, Result, Settings, SettingsIni, Spreadsheet, SpreadsheetDelim,
};
use tracing_subscriber::{fmt, EnvFilter};

/// flatfile CLI
#[derive(Parser, Debug)]
#[command(name = "flatfile")]
#[command(about = "Inspect and edit .ini settings and delimited spreadsheet files")]
#[command(version)]
struct Args {
    /// Settings file with a [flatfile] section (buffer_capacity, delimiter)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Work with an .ini settings file
    Ini {
        #[command(subcommand)]
        action: IniAction,
    },

    /// Work with a delimited spreadsheet file
    Csv {
        /// Cell delimiter (defaults to the configured one)
        #[arg(short, long)]
        delimiter: Option<String>,

        #[command(subcommand)]
        action: CsvAction,
    },
}

#[derive(Subcommand, Debug)]
enum IniAction {
    /// Print a value
    Get {
        file: String,
        /// Section name, empty for the unnamed section
        section: String,
        key: String,
    },

    /// Add a value, or overwrite it if it exists. A missing file is created.
    Set {
        file: String,
        section: String,
        key: String,
        value: String,
    },

    /// Print the normalised file
    Dump { file: String },
}

#[derive(Subcommand, Debug)]
enum CsvAction {
    /// Print a cell
    Get { file: String, row: usize, col: usize },

    /// Set a cell, growing the sheet as needed. A missing file is created.
    Set {
        file: String,
        row: usize,
        col: usize,
        value: String,
    },

    /// Print the sheet
    Dump {
        file: String,

        /// Leading columns to drop from every row
        #[arg(long, default_value = "0")]
        skip_cols: usize,

        /// Leading lines to drop from the file
        #[arg(long, default_value = "0")]
        skip_rows: usize,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,flatfile=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let mut settings = SettingsIni::new();
            settings.load(path)?;
            Config::from_settings(&settings)?
        }
        None => Config::default(),
    };

    match args.command {
        Commands::Ini { action } => run_ini(&config, action),
        Commands::Csv { delimiter, action } => {
            let config = match delimiter {
                Some(d) => Config { delimiter: d, ..config },
                None => config,
            };
            run_csv(&config, action)
        }
    }
}

fn run_ini(config: &Config, action: IniAction) -> Result<()> {
    let mut settings = SettingsIni::with_config(config);

    match action {
        IniAction::Get { file, section, key } => {
            settings.load(&file)?;
            match settings.get(&section, &key) {
                Some(value) => println!("{}", value),
                None => {
                    tracing::warn!("[{}] {} not found in {}", section, key, file);
                    std::process::exit(2);
                }
            }
        }
        IniAction::Set { file, section, key, value } => {
            if Path::new(&file).exists() {
                settings.load(&file)?;
            } else {
                tracing::info!("{} does not exist, starting from an empty store", file);
                settings.set_filename(file.as_str());
            }
            if settings.value_exists(&section, &key) {
                settings.set(&section, &key, &value)?;
            } else {
                settings.add(&section, &key, &value)?;
            }
            settings.save("")?;
            tracing::info!("[{}] {} = {} written to {}", section, key, value, file);
        }
        IniAction::Dump { file } => {
            settings.load(&file)?;
            settings.write_to(std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn run_csv(config: &Config, action: CsvAction) -> Result<()> {
    let mut sheet = SpreadsheetDelim::with_config(config)?;

    match action {
        CsvAction::Get { file, row, col } => {
            sheet.load(&file, 0, 0)?;
            match sheet.get(row, col) {
                Some(value) => println!("{}", value),
                None => {
                    tracing::warn!("cell ({}, {}) out of bounds in {}", row, col, file);
                    std::process::exit(2);
                }
            }
        }
        CsvAction::Set { file, row, col, value } => {
            if Path::new(&file).exists() {
                sheet.load(&file, 0, 0)?;
            } else {
                tracing::info!("{} does not exist, starting from an empty sheet", file);
                sheet.set_filename(file.as_str());
            }
            sheet.set(row, col, &value);
            sheet.save("")?;
            tracing::info!("cell ({}, {}) = {} written to {}", row, col, value, file);
        }
        CsvAction::Dump { file, skip_cols, skip_rows } => {
            sheet.load(&file, skip_cols, skip_rows)?;
            sheet.write_to(std::io::stdout().lock())?;
        }
    }

    Ok(())
}
