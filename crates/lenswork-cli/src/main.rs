mod cli;
mod commands;
mod config;
mod error;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use lenswork_core::{GalleryCore, paths};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error::handle_error(err);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::CliConfig::load();

    // Configure logging: write to a file so command output stays clean
    let log_dir = paths::logs_dir()?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "lenswork.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    let db_path = match &cli.db_path {
        Some(path) => path.clone(),
        None => paths::ensure_database_path_string()?,
    };
    let core = GalleryCore::new(&db_path)?;

    match cli.command {
        Commands::Status => commands::status::run(&core, cli.format),
        Commands::Gallery { city, highlights } => {
            commands::gallery::run(&core, &city, highlights, cli.format)
        }
        Commands::Map { city } => commands::map::run(&core, city.as_deref(), cli.format),
        Commands::Upload(args) => commands::upload::run(&core, args).await,
        Commands::Delete { id, yes } => commands::delete::run(&core, &id, yes),
        Commands::HideBuiltins { yes } => commands::hide_builtins::run(&core, yes),
        Commands::Buy { id } => commands::buy::run(&core, &id),
        Commands::Login { key } => commands::login::run(&core, key),
        Commands::Logout { yes } => commands::logout::run(&core, yes),
        Commands::Lang { language } => commands::lang::run(&core, &language),
        Commands::Describe { id, lang } => {
            commands::describe::run(&core, &config, &id, lang.as_deref()).await
        }
    }
}
