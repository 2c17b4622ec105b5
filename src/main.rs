use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use calcestate::{
    CalcEstateConfig,
    CalcEstateError,
    ErrorSeverity,
    FavoritesStore,
    JsonFileStorage,
    PropertyStore,
    RecoverableError,
};
mod cli;
use cli::{ CalcEstateCli, Commands, FieldAction, PropertyAction, RatioAction };

#[tokio::main]
async fn main() {
    // A missing .env is fine
    let _ = dotenv();

    // Parse the command line arguments
    let cli = CalcEstateCli::parse();

    if let Err(e) = run(&cli).await {
        match e.downcast_ref::<CalcEstateError>() {
            Some(ce) => {
                if ce.severity() == ErrorSeverity::Error {
                    cli::ui::print_error(&e.to_string());
                } else {
                    cli::ui::print_warning(&e.to_string());
                }
                if let Some(hint) = ce.recovery_strategy() {
                    cli::ui::print_info(&hint);
                }
            }
            None => cli::ui::print_error(&e.to_string()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: &CalcEstateCli) -> Result<()> {
    let config = CalcEstateConfig::load(cli.config.as_deref())?;

    // Setup logging
    let log_level = cli.log_level.as_deref().or(config.log_level.as_deref()).unwrap_or("warn");
    setup_logging(log_level);

    let data_dir = config
        .resolve_data_dir(cli.data_dir.as_deref())
        .map_err(CalcEstateError::from)?;
    debug!("Data directory: {}", data_dir.display());
    let storage = JsonFileStorage::new(data_dir);
    let json = cli.json_output();

    // Handle commands
    match &cli.command {
        Commands::Ratios { action } => {
            let mut favorites = FavoritesStore::open_with_key(
                storage,
                &config.liked_ratios_key
            ).await;
            match action {
                RatioAction::List { liked, search } => {
                    cli::commands::ratios::list(&favorites, *liked, search.as_deref(), json)?;
                }
                RatioAction::Show { id } => {
                    cli::commands::ratios::show(&favorites, *id, json)?;
                }
                RatioAction::Like { id } => {
                    cli::commands::ratios::like(&mut favorites, *id).await?;
                }
            }
        }

        Commands::Calc { id, inputs, interactive, save_to } => {
            let mut store = PropertyStore::open_with_key(storage, &config.properties_key).await;
            cli::commands::calc::execute(
                &mut store,
                *id,
                inputs,
                *interactive,
                save_to.as_deref(),
                json
            ).await?;
        }

        Commands::Property { action } => {
            let mut store = PropertyStore::open_with_key(storage, &config.properties_key).await;
            match action {
                PropertyAction::List => cli::commands::property::list(&store, json)?,
                PropertyAction::Show { id } => cli::commands::property::show(&store, id, json)?,
                PropertyAction::Create { name, color } => {
                    cli::commands::property::create(&mut store, name, color.as_deref()).await?;
                }
                PropertyAction::Update { id, name, color } => {
                    cli::commands::property::update(
                        &mut store,
                        id,
                        name.as_deref(),
                        color.as_deref()
                    ).await?;
                }
                PropertyAction::Delete { id, yes } => {
                    cli::commands::property::delete(&mut store, id, *yes).await?;
                }
            }
        }

        Commands::Field { action } => {
            let mut store = PropertyStore::open_with_key(storage, &config.properties_key).await;
            match action {
                FieldAction::Add { property_id, label, value, field_type } => {
                    cli::commands::field::add(
                        &mut store,
                        property_id,
                        label,
                        value,
                        field_type
                    ).await?;
                }
                FieldAction::Delete { property_id, field_id } => {
                    cli::commands::field::delete(&mut store, property_id, field_id).await?;
                }
            }
        }
    }

    Ok(())
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

    info!("Logger initialized with level: {}", log_level);
}
