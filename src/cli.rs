use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::theme::ThemeMode;
use crate::view_state::Page;

#[derive(Debug, Parser)]
#[command(name = "trackezy", version, about = "Terminal project-management dashboard")]
pub struct Cli {
    /// Config file (JSON). Defaults to the platform config dir.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed file (JSON) replacing the built-in sample data.
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Log level or tracing directive, e.g. `debug` or `trackezy=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory for trackezy.log.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the dashboard (default)
    Ui {
        /// Page to open first
        #[arg(long, value_enum)]
        page: Option<Page>,

        #[arg(long, value_enum)]
        theme: Option<ThemeMode>,
    },
    /// Print every board column
    List,
    /// Show task counts per status
    Stats,
    /// Move a task to another column and print the board (not saved)
    Move {
        task_id: String,
        /// todo, in-progress, done or blocked
        status: String,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        let (start_page, theme) = match &self.command {
            Some(Command::Ui { page, theme }) => (*page, *theme),
            _ => (None, None),
        };
        ConfigOverrides {
            theme,
            start_page,
            log_level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
            seed: self.seed.clone(),
        }
    }
}
