// Command line interface
use crate::domain::control::ControlCommand;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smartcar-dashboard")]
#[command(about = "Browse sensor history and control the smart car", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to config/dashboard.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a day of readings and write the chart
    History {
        #[arg(long)]
        date: Option<String>,

        /// Where to write the Chart.js config
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Send a command such as forward, stop, led_on or mode_manual
    Control { command: ControlCommand },

    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_args() {
        let cli =
            Cli::try_parse_from(["smartcar-dashboard", "history", "--date", "2024-03-01"]).unwrap();
        match cli.command {
            Commands::History { date, out } => {
                assert_eq!(date.as_deref(), Some("2024-03-01"));
                assert!(out.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_history_date_is_optional() {
        let cli = Cli::try_parse_from(["smartcar-dashboard", "history"]).unwrap();
        assert!(matches!(cli.command, Commands::History { date: None, .. }));
    }

    #[test]
    fn test_control_command_is_parsed() {
        let cli = Cli::try_parse_from(["smartcar-dashboard", "control", "LED_ON"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Control {
                command: ControlCommand::LedOn
            }
        ));

        assert!(Cli::try_parse_from(["smartcar-dashboard", "control", "fly"]).is_err());
    }

    #[test]
    fn test_theme_toggle() {
        let cli = Cli::try_parse_from([
            "smartcar-dashboard",
            "--config",
            "x.toml",
            "theme",
            "toggle",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: ThemeAction::Toggle
            }
        ));
    }
}
