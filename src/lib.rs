pub mod cli;
pub mod client;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

use crate::client::ExchangeClient;
use crate::core::config::AppConfig;

pub enum AppCommand {
    List,
    Check(String),
    Rate { from: String, to: String },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("floatfx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::FloatRatesProvider::new(config.floatrates_url());

    let spinner = cli::ui::new_spinner("Loading currencies...");
    let client = ExchangeClient::create(Box::new(provider)).await;
    spinner.finish_and_clear();
    let mut client = client?;

    match command {
        AppCommand::List => cli::list::display_catalog(&client)?,
        AppCommand::Check(code) => println!("{}", cli::list::check(&client, &code)),
        AppCommand::Rate { from, to } => cli::rate::run(&mut client, &from, &to).await?,
    }
    Ok(())
}
