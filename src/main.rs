mod api;
mod config;
mod consts;
mod dashboard;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod pretty;
mod session;
mod ui;

use crate::config::{Config, ConfigOverrides, URL_ENV_VAR, get_config_path};
use crate::pretty::print_cmd_info;
use crate::session::oneshot::{run_clear_history, run_predict, run_stats};
use crate::session::{DialogMode, run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about = "Terminal dashboard for a prediction service", long_about = None)]
/// Command-line arguments
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Command to execute; `watch` when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct ConnectionArgs {
    /// Base URL of the prediction service (or `local`)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Per-request timeout in seconds; requests never time out by default
    #[arg(long, global = true, value_name = "SECONDS")]
    timeout_secs: Option<u64>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
struct WatchArgs {
    /// Seconds between automatic refreshes
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    refresh_secs: Option<u64>,

    /// Print events to the console instead of drawing the dashboard
    #[arg(long, action = ArgAction::SetTrue)]
    headless: bool,

    /// Paint the dashboard background
    #[arg(long = "with-background", action = ArgAction::SetTrue)]
    with_background: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Watch the dashboard, refreshing periodically
    Watch(WatchArgs),
    /// Fetch the statistics once and print them
    Stats,
    /// Ask the service to classify one sample
    Predict {
        /// Sepal length, sepal width, petal length, petal width
        #[arg(
            long,
            num_args = 4,
            required = true,
            allow_negative_numbers = true,
            value_names = ["SEPAL_LENGTH", "SEPAL_WIDTH", "PETAL_LENGTH", "PETAL_WIDTH"]
        )]
        features: Vec<String>,

        /// Model to use; the configured default when omitted
        #[arg(long)]
        model: Option<String>,
    },
    /// Delete every stored prediction
    ClearHistory {
        /// Do not ask for confirmation
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the resolved configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    log::set_max_level(logging::get_rust_log_level().into());
    let config_path = get_config_path()?;

    let command = args
        .command
        .unwrap_or_else(|| Command::Watch(WatchArgs::default()));

    if let Command::Config { action } = &command {
        return match action {
            ConfigCommand::Init { force } => {
                if config_path.exists() && !force {
                    return Err(format!(
                        "Config file already exists at {} (use --force to overwrite)",
                        config_path.display()
                    )
                    .into());
                }
                Config::default().save(&config_path)?;
                println!("Wrote default configuration to {}", config_path.display());
                Ok(())
            }
            ConfigCommand::Show => {
                let config = resolve_config(&config_path, &args.connection, None)?;
                print_cmd_info!("Configuration", "{}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
        };
    }

    match command {
        Command::Watch(watch) => {
            let config = resolve_config(&config_path, &args.connection, watch.refresh_secs)?;
            if watch.headless {
                let session = setup_session(&config, DialogMode::Console { assume_yes: false })?;
                run_headless_mode(session).await
            } else {
                let session = setup_session(&config, DialogMode::Terminal)?;
                let ui_config = UIConfig::new(
                    watch.with_background,
                    config.refresh_interval(),
                    config.form_models(),
                    config.default_model.clone(),
                );
                run_tui_mode(session, ui_config).await
            }
        }
        Command::Stats => {
            let config = resolve_config(&config_path, &args.connection, None)?;
            run_stats(&config).await
        }
        Command::Predict { features, model } => {
            let config = resolve_config(&config_path, &args.connection, None)?;
            let features: [String; 4] = features
                .try_into()
                .map_err(|_| "Exactly four feature values are required")?;
            run_predict(&config, features, model).await
        }
        Command::ClearHistory { yes } => {
            let config = resolve_config(&config_path, &args.connection, None)?;
            run_clear_history(&config, yes).await
        }
        Command::Config { .. } => Ok(()),
    }
}

/// Defaults, then the config file, then the environment, then flags.
fn resolve_config(
    config_path: &std::path::Path,
    connection: &ConnectionArgs,
    refresh_secs: Option<u64>,
) -> Result<Config, Box<dyn Error>> {
    let file_config = Config::load_or_default(config_path).map_err(|e| {
        format!(
            "Failed to load config file {}: {}",
            config_path.display(),
            e
        )
    })?;
    let overrides = ConfigOverrides {
        base_url: connection.url.clone(),
        refresh_interval_secs: refresh_secs,
        request_timeout_secs: connection.timeout_secs,
    };
    Ok(file_config.with_overrides(std::env::var(URL_ENV_VAR).ok(), &overrides))
}
