//! Alltagslabor Sync - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use alltagslabor_sync::{
    api::GitLabApi,
    cli::Args,
    config::{load_token, validate_config, Config, RunMode},
    error::{exit_codes, Error, Result},
    experiments::Catalog,
    fs::DataLayout,
    output::{
        print_banner, print_config_summary, print_error, print_experiment_matches, print_info,
        print_sync_stats, print_warning,
    },
    sync::{run_sync_pass, SyncState},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::RemoteList { .. } => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Fetch { .. } => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                Error::Data(_) | Error::Json(_) => ExitCode::from(exit_codes::DATA_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_info("No configuration file found, using defaults");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    match config.options.mode {
        RunMode::Sync => run_sync(&config).await,
        RunMode::Search => run_search(&config),
    }
}

/// Run one sync pass and apply the configured exit policy.
async fn run_sync(config: &Config) -> Result<()> {
    print_config_summary(
        &config.remote.project,
        &config.remote.branch,
        &config.storage.data_dir.display().to_string(),
    );

    let token = match config.remote.token.clone() {
        Some(token) => token,
        None => load_token(&config.storage.credentials_file),
    };
    if token.is_empty() {
        print_info("No GitLab token found, syncing unauthenticated");
    }

    let api = GitLabApi::new(
        &config.remote.host,
        &config.remote.project,
        &config.remote.branch,
        token,
    )?;

    let mut state = SyncState::default();
    match run_sync_pass(&api, config, &mut state).await {
        Ok(()) => {
            print_sync_stats(&state);
            Ok(())
        }
        Err(e) if !config.options.strict_exit => {
            print_error(&format!("{}", e));
            print_warning("Sync failed; exiting with success status (enable strict_exit to change this)");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Search the synced experiment list.
fn run_search(config: &Config) -> Result<()> {
    let layout = DataLayout::new(&config.storage.data_dir);
    let catalog = Catalog::load(&layout.experiments_path())?;

    let query = config.options.query.as_deref().unwrap_or_default();
    let matches = catalog.search(query);
    print_experiment_matches(query, &matches);

    Ok(())
}
