use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tarif::config::AppConfig;
use tarif::domain::entities::grid::{format_amount, HeatValue};
use tarif::domain::services::metrics::round_cents;
use tarif::infra::export::csv::export_delimiter;
use tarif::infra::import::source::WideTableSource;
use tarif::infra::import::wide::{ImportMeta, DEFAULT_REGION, DEFAULT_VALID_FROM};
use tarif::infra::sample::EmbeddedSource;
use tarif::infra::sqlite::repo::SqliteSource;
use tarif::usecase::ports::source::CellSource;
use tarif::usecase::services::fallback_source::FallbackSource;
use tarif::usecase::services::import_service::ImportService;
use tarif::usecase::services::query_service::QueryService;
use tarif::{MetricParams, TableView};

const MISSING_CELL: &str = "—";

#[derive(Parser)]
#[command(name = "tarif")]
#[command(about = "Pivot, look up and derive figures from tariff salary tables")]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// SQLite database holding a `salaries` table
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Read a wide tariff table (csv or xlsx) instead of the database
    #[arg(long, global = true)]
    import: Option<PathBuf>,

    /// Table name given to the imported file
    #[arg(long, global = true)]
    import_table: Option<String>,

    /// Sheet to read from an xlsx import (default: first sheet)
    #[arg(long, global = true)]
    sheet: Option<String>,

    #[arg(long, global = true, default_value = DEFAULT_REGION)]
    region: String,

    #[arg(long, global = true, default_value = DEFAULT_VALID_FROM)]
    valid_from: String,

    /// Fail instead of answering from the built-in sample table
    #[arg(long, global = true, default_value = "false")]
    no_fallback: bool,
}

#[derive(Args)]
struct TableArg {
    /// Tariff table, e.g. TV-L
    #[arg(long)]
    table: Option<String>,
}

#[derive(Args)]
struct CellArgs {
    #[command(flatten)]
    table: TableArg,

    /// Pay group, e.g. "E 13"
    #[arg(long)]
    group: String,

    #[arg(long)]
    step: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List available tables
    Tables,
    /// List pay groups of a table in canonical order
    Groups(TableArg),
    /// List steps of one pay group
    Steps {
        #[command(flatten)]
        table: TableArg,
        #[arg(long)]
        group: String,
    },
    /// Print the group x step table
    Pivot(TableArg),
    /// Print min, max and median
    Stats(TableArg),
    /// Resolve one group and step
    Lookup(CellArgs),
    /// Pro-rate one cell by weekly hours and add bonuses
    Metrics {
        #[command(flatten)]
        cell: CellArgs,
        #[arg(long)]
        hours: Option<f64>,
        /// Percentage of one monthly salary paid once per year
        #[arg(long)]
        bonus: Option<f64>,
        /// Flat amount paid once per year
        #[arg(long)]
        flat_bonus: Option<f64>,
    },
    /// Write the group x step table as csv
    Export {
        #[command(flatten)]
        table: TableArg,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value = ",")]
        delimiter: char,
    },
    /// Print heat intensities in [0, 1]
    Heat(TableArg),
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
}

fn build_source(args: &SourceArgs, config: &AppConfig) -> Result<Arc<dyn CellSource>> {
    let primary: Arc<dyn CellSource> = match &args.import {
        Some(path) => {
            let table_name = args
                .import_table
                .clone()
                .unwrap_or_else(|| config.default_table.clone());
            let meta = ImportMeta {
                table_name,
                region: args.region.clone(),
                valid_from: args.valid_from.clone(),
            };
            meta.validate()?;
            Arc::new(WideTableSource::new(
                path.clone(),
                args.sheet.clone(),
                ImportService::new(meta),
            ))
        }
        None => Arc::new(SqliteSource::new(config.db_path.clone())),
    };

    if args.no_fallback {
        Ok(primary)
    } else {
        Ok(Arc::new(FallbackSource::new(primary, Arc::new(EmbeddedSource))))
    }
}

fn parse_step(step: &str) -> Result<i64> {
    Ok(tarif::LookupQuery::parse("", step)?.step())
}

fn print_pivot(view: &TableView) {
    let width = view.groups().iter().map(|g| g.chars().count()).max().unwrap_or(0).max(13);
    print!("{:<width$}", "Entgeltgruppe");
    for step in view.steps() {
        print!(" {:>10}", format!("St {step}"));
    }
    println!();
    for row in &view.export().rows {
        print!("{:<width$}", row.group);
        for amount in &row.amounts {
            match amount {
                Some(value) => print!(" {:>10.2}", value),
                None => print!(" {:>10}", MISSING_CELL),
            }
        }
        println!();
    }
}

fn print_stats(view: &TableView) {
    if view.statistics().is_empty() {
        println!("no data for table '{}'", view.table_name());
        return;
    }
    println!("records: {}", view.statistics().count);
    println!("min:     {:.2} €", view.statistics().min);
    println!("max:     {:.2} €", view.statistics().max);
    println!("median:  {:.2} €", view.statistics().median);
    println!("groups:  {}", view.groups().len());
    println!("steps:   {}", view.steps().len());
    if let Some(valid_from) = view.latest_valid_from() {
        println!("valid from: {valid_from}");
    }
    if view.pivot().duplicates() > 0 {
        println!("duplicates overwritten: {}", view.pivot().duplicates());
    }
}

fn print_heat(view: &TableView) {
    let width = view.groups().iter().map(|g| g.chars().count()).max().unwrap_or(0).max(13);
    print!("{:<width$}", "Entgeltgruppe");
    for step in view.steps() {
        print!(" {:>6}", step);
    }
    println!();
    for (group, row) in view.groups().iter().zip(view.heat_grid()) {
        print!("{:<width$}", group);
        for value in row {
            match value {
                HeatValue::Scaled(t) => print!(" {:>6.2}", t),
                HeatValue::NoScale => print!(" {:>6}", MISSING_CELL),
            }
        }
        println!();
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.source.db.clone(), cli.source.import_table.clone())?;
    let service = QueryService::new(build_source(&cli.source, &config)?);
    info!(source = %service.source_name(), "using source");

    let table_or_default =
        |arg: &TableArg| arg.table.clone().unwrap_or_else(|| config.default_table.clone());

    match cli.command {
        Commands::Tables => {
            for table in service.list_tables()? {
                println!("{table}");
            }
        }
        Commands::Groups(arg) => {
            for group in service.groups(&table_or_default(&arg))? {
                println!("{group}");
            }
        }
        Commands::Steps { table, group } => {
            for step in service.steps(&table_or_default(&table), &group)? {
                println!("{step}");
            }
        }
        Commands::Pivot(arg) => {
            let view = service.load_table(&table_or_default(&arg))?;
            print_pivot(&view);
        }
        Commands::Stats(arg) => {
            let view = service.load_table(&table_or_default(&arg))?;
            print_stats(&view);
        }
        Commands::Lookup(args) => {
            let step = parse_step(&args.step)?;
            let cell = service.lookup(&table_or_default(&args.table), &args.group, step)?;
            println!(
                "{} Stufe {}: {:.2} € (valid from {}, {})",
                cell.group, cell.step, cell.amount, cell.valid_from, cell.region
            );
        }
        Commands::Metrics {
            cell,
            hours,
            bonus,
            flat_bonus,
        } => {
            let step = parse_step(&cell.step)?;
            let params = MetricParams {
                weekly_hours: hours.unwrap_or(config.metrics.weekly_hours),
                bonus_percent: bonus.unwrap_or(config.metrics.bonus_percent),
                flat_bonus: flat_bonus.unwrap_or(config.metrics.flat_bonus),
            };
            let (cell, metrics) =
                service.derive(&table_or_default(&cell.table), &cell.group, step, &params)?;
            println!("{} Stufe {} at {} h/week", cell.group, cell.step, params.weekly_hours);
            println!("monthly:           {} €", format_amount(round_cents(metrics.monthly)));
            println!("yearly:            {} €", format_amount(round_cents(metrics.yearly)));
            println!("hourly:            {} €", format_amount(round_cents(metrics.hourly)));
            println!(
                "effective monthly: {} €",
                format_amount(round_cents(metrics.effective_monthly))
            );
        }
        Commands::Export {
            table,
            out,
            delimiter,
        } => {
            let delimiter = export_delimiter(delimiter)?;
            let table_name = table_or_default(&table);
            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    service.export_csv(&table_name, BufWriter::new(file), delimiter)?;
                    info!(table = %table_name, path = %path.display(), "export written");
                }
                None => {
                    let stdout = io::stdout();
                    service.export_csv(&table_name, stdout.lock(), delimiter)?;
                }
            }
        }
        Commands::Heat(arg) => {
            let view = service.load_table(&table_or_default(&arg))?;
            print_heat(&view);
        }
    }

    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}
