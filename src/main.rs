use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use log::{ debug, info };

use license_agenda::config::AgendaConfig;
use license_agenda::implementations::agenda::Agenda;
use license_agenda::implementations::dates;
use license_agenda::implementations::json_storage::JsonFileStorage;

mod cli;
use cli::{ AgendaCli, Commands };

fn main() {
    // Parse the command line arguments
    let cli = AgendaCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(&cli) {
        cli::ui::report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &AgendaCli) -> Result<()> {
    let config = AgendaConfig::load(cli.config.as_deref())?;
    debug!("Effective configuration: {:?}", config);
    if !config.color {
        colored::control::set_override(false);
    }

    let today = resolve_today(cli.today.as_deref())?;
    let json = match cli.output_format.to_lowercase().as_str() {
        "json" => true,
        "text" => false,
        other => anyhow::bail!("Unsupported output format: {} (text, json)", other),
    };

    let storage = JsonFileStorage::from_config(&config);

    match &cli.command {
        Commands::List { search, status, sort, desc } => {
            let agenda = Agenda::open(storage)?;
            cli::commands::list::execute(&agenda, search.as_deref(), status, sort, *desc, json, today)?;
        }

        Commands::Add { fields, no_input } => {
            let mut agenda = Agenda::open(storage)?;
            cli::commands::add::execute(&mut agenda, fields, *no_input)?;
        }

        Commands::Edit { target, fields, no_input } => {
            let mut agenda = Agenda::open(storage)?;
            cli::commands::edit::execute(&mut agenda, target, fields, *no_input)?;
        }

        Commands::Toggle { target } => {
            let mut agenda = Agenda::open(storage)?;
            cli::commands::toggle::execute(&mut agenda, target)?;
        }

        Commands::Remove { target, yes } => {
            let mut agenda = Agenda::open(storage)?;
            cli::commands::remove::execute(&mut agenda, target, *yes)?;
        }

        // Reads the persisted state directly; no inventory session needed
        Commands::Check { wait } => {
            cli::commands::check::execute(&storage, *wait, json, today)?;
        }

        Commands::Browse => {
            let mut agenda = Agenda::open(storage)?;
            cli::commands::browse::execute(&mut agenda, today)?;
        }
    }

    Ok(())
}

fn resolve_today(override_date: Option<&str>) -> Result<NaiveDate> {
    match override_date {
        Some(raw) => {
            let date = dates::parse_any(raw)?;
            info!("Using {} as today", date);
            Ok(date)
        }
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    debug!("Logger initialized with level: {}", log_level);
}
