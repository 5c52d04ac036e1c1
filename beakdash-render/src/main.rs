//! BeakDash render CLI
//!
//! Renders stored dashboards, single widgets and normalized datasets, reading JSON and printing
//! either JSON or a plain text rendition.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use beakdash_dataset::{extract_columns, normalize, rows_from_value, NormalizeConfig};
use beakdash_log::{LevelFilter, Logger};
use beakdash_widget::table::TableView;
use beakdash_widget::{Dashboard, WidgetRecord};

const LOG_ENV: &str = "BEAKDASH_LOG";

#[derive(Parser)]
#[command(name = "beakdash-render")]
#[command(version, about = "Render BeakDash dashboards and widgets", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log debug messages, overrides BEAKDASH_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every widget of a stored dashboard in layout order
    Dashboard {
        /// Dashboard JSON file, '-' reads from stdin
        file: PathBuf,
    },

    /// Render a single stored widget
    Widget {
        /// Widget JSON file, '-' reads from stdin
        file: PathBuf,
    },

    /// Fill in missing category/series combinations of a dataset
    Normalize {
        /// JSON array of rows, '-' reads from stdin
        file: PathBuf,

        /// Category column
        #[arg(long)]
        x_field: String,

        /// Value column
        #[arg(long)]
        y_field: String,

        /// Series column
        #[arg(long)]
        color_field: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let logger = Logger::from_env(LOG_ENV, LevelFilter::INFO).verbose(cli.verbose);
    if let Err(err) = logger.init() {
        eprintln!("unable to initialize logging: {err}");
    }

    if let Err(err) = run(&cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Dashboard { file } => render_dashboard(cli, file),
        Commands::Widget { file } => render_widget(cli, file),
        Commands::Normalize {
            file,
            x_field,
            y_field,
            color_field,
        } => normalize_rows(
            cli,
            file,
            NormalizeConfig::new(x_field.as_str(), y_field.as_str(), color_field.as_str()),
        ),
    }
}

fn read_input(path: &Path) -> Result<String, Error> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("unable to read from stdin")?;
        return Ok(input);
    }

    fs::read_to_string(path).with_context(|| format!("unable to read '{}'", path.display()))
}

fn print_json<T: Serialize>(cli: &Cli, value: &T) -> Result<(), Error> {
    let output = if cli.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

fn render_dashboard(cli: &Cli, file: &Path) -> Result<(), Error> {
    let dashboard = Dashboard::from_json(&read_input(file)?)
        .with_context(|| format!("invalid dashboard in '{}'", file.display()))?;

    log::info!(
        "rendering dashboard '{}' with {} widgets",
        dashboard.name,
        dashboard.widgets.len()
    );

    let rendered = dashboard.render();

    match cli.output {
        OutputFormat::Json => print_json(cli, &rendered)?,
        OutputFormat::Text => {
            println!("{}", rendered.name);
            for widget in &rendered.widgets {
                println!();
                match &widget.title {
                    Some(title) => println!("== {title} =="),
                    None => println!("== widget {} ==", widget.id),
                }
                print!("{}", widget.widget);
            }
        }
    }

    Ok(())
}

fn render_widget(cli: &Cli, file: &Path) -> Result<(), Error> {
    let record: WidgetRecord = serde_json::from_str(&read_input(file)?)
        .with_context(|| format!("invalid widget in '{}'", file.display()))?;

    let rendered = record.render();

    match cli.output {
        OutputFormat::Json => print_json(cli, &rendered)?,
        OutputFormat::Text => print!("{rendered}"),
    }

    Ok(())
}

fn normalize_rows(cli: &Cli, file: &Path, config: NormalizeConfig) -> Result<(), Error> {
    let value: serde_json::Value = serde_json::from_str(&read_input(file)?)
        .with_context(|| format!("invalid dataset in '{}'", file.display()))?;

    let rows = rows_from_value(value);
    let dense = normalize(&rows, &config);

    log::debug!("normalized {} rows into {}", rows.len(), dense.len());

    match cli.output {
        OutputFormat::Json => print_json(cli, &dense)?,
        OutputFormat::Text => {
            let columns = extract_columns(&dense);
            print!("{}", TableView::new(columns, &dense));
        }
    }

    Ok(())
}
