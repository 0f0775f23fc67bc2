use colored::*;
use common::logger::init_logger;
use seeder::{SeedError, SeedReport};
use std::process::ExitCode;
use util::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match seed().await {
        Ok(report) => {
            println!(
                "{} ({} rows)",
                "Sample data inserted successfully!".green(),
                report.total_rows()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn seed() -> Result<SeedReport, SeedError> {
    let config = AppConfig::from_env()?;
    init_logger(&config.log_level, &config.log_file, config.log_to_stdout)?;
    log::info!("{} seeding ({})", config.project_name, config.env);

    seeder::ensure_environment(&config)?;

    let db = db::connect(&config.database)
        .await
        .map_err(SeedError::Connect)?;

    seeder::run_and_close(db).await
}
