mod console;
mod db;

use std::path::PathBuf;

use academic_records::seed::seed_demo_data;
use academic_records::AcademicRecords;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use sea_orm::DatabaseConnection;
use tokio::io::BufReader;

use crate::console::Console;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Academic Records - console manager for students, professors, courses and groups
#[derive(Parser)]
#[command(name = "academic-records")]
#[command(about = "Academic Records - console manager for students, professors, courses and groups")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu
    Run,
    /// Check configuration and database connectivity
    Check,
    /// Insert demo data
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &config.home_dir());
    tracing::info!("Academic Records starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_console(config, args).await,
        Commands::Check => check(config, args).await,
        Commands::Seed => seed(config, args).await,
    }
}

async fn open(
    config: &AppConfig,
    args: &CliArgs,
) -> Result<(AcademicRecords, DatabaseConnection)> {
    let db_config = config.database.clone().unwrap_or_default();
    let dsn = db::effective_dsn(&db_config, &config.home_dir(), args.mock)?;
    let conn = db::connect(&db_config, &dsn).await?;
    let records = AcademicRecords::bootstrap(conn.clone())
        .await
        .context("schema bootstrap failed")?;
    Ok((records, conn))
}

async fn run_console(config: AppConfig, args: CliArgs) -> Result<()> {
    let (records, conn) = open(&config, &args).await?;

    let input = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(input, std::io::stdout(), records, conn);
    console.run().await?;

    tracing::info!("Academic Records stopped");
    Ok(())
}

async fn check(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Checking configuration...");

    let (records, conn) = open(&config, &args).await?;
    conn.ping().await.context("database ping failed")?;

    println!("Configuration check passed");
    println!("Database connection OK");
    println!("{}", console::counts(&records).await?);
    println!("Effective configuration:");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn seed(config: AppConfig, args: CliArgs) -> Result<()> {
    let (records, _conn) = open(&config, &args).await?;

    let report = seed_demo_data(&records).await?;
    println!(
        "Seed finished: {} students, {} professors, {} courses, {} groups created; {} skipped",
        report.students_created,
        report.professors_created,
        report.courses_created,
        report.groups_created,
        report.skipped
    );
    Ok(())
}
