// Main entry point - Dependency injection and command dispatch
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use smartcar_dashboard::application::device_control::ControlService;
use smartcar_dashboard::application::history_service::{HistoryLoader, LoadOutcome};
use smartcar_dashboard::application::theme_service::ThemeService;
use smartcar_dashboard::infrastructure::chart_file_surface::ChartFileSurface;
use smartcar_dashboard::infrastructure::config::load_dashboard_config;
use smartcar_dashboard::infrastructure::http_api::DashboardApi;
use smartcar_dashboard::infrastructure::theme_store::TomlThemeStore;
use smartcar_dashboard::presentation::cli::{Cli, Commands, ThemeAction};
use smartcar_dashboard::presentation::terminal::{ArgDateInput, TerminalStatus};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_dashboard_config(cli.config.as_deref())?;

    // Initialize tracing on stderr, RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Create adapters (infrastructure layer)
    let api = Arc::new(DashboardApi::new(&config.api)?);
    let theme_store = TomlThemeStore::new(config.theme.state_file.clone());
    let themes = ThemeService::new(Arc::new(theme_store));

    match cli.command {
        Commands::History { date, out } => {
            let output = out.unwrap_or_else(|| config.chart.output.clone());
            let loader = HistoryLoader::new(
                api,
                Arc::new(ArgDateInput::new(date)),
                Box::new(TerminalStatus::stdout(themes.current())),
                Box::new(ChartFileSurface::new(output.clone())),
                config.chart.labeler()?,
            );

            match loader.load_history().await {
                Ok(LoadOutcome::Rendered { points }) => {
                    tracing::info!("Wrote chart with {} points to {}", points, output.display());
                    Ok(ExitCode::SUCCESS)
                }
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(e) => {
                    tracing::debug!("History load failed: {:?}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Control { command } => {
            let service = ControlService::new(api);
            let ack = service.send(command).await?;
            let accepted = ack.is_ok();

            match ack.msg {
                Some(msg) => println!("{}: {}", ack.status, msg),
                None => println!("{}", ack.status),
            }
            if accepted {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Theme { action } => {
            let theme = match action {
                ThemeAction::Show => themes.current(),
                ThemeAction::Toggle => themes.toggle()?,
            };
            println!("{}", theme);
            Ok(ExitCode::SUCCESS)
        }
    }
}
