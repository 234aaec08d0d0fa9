mod calendar;
mod cli;
mod config;
mod error;
mod kanban_board;
mod logging;
mod sample;
mod summary;
mod task;
mod theme;
mod ui;
mod view_state;

use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::kanban_board::KanbanBoard;
use crate::sample::SampleData;
use crate::ui::App;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("trackezy: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply(cli.overrides());
    logging::init(&config.log_level, &config.log_dir())?;

    let mut data = SampleData::load(config.seed.as_deref())?;
    let mut board = data.take_board()?;

    match cli.command {
        Some(Command::List) => print!("{}", summary::list_tasks(&board)),
        Some(Command::Stats) => print!("{}", summary::stats(&board)),
        Some(Command::Move { task_id, status }) => {
            let outcome = summary::move_task(&mut board, &task_id, &status)?;
            println!("{}", summary::describe(&outcome));
            print!("{}", summary::list_tasks(&board));
        }
        Some(Command::Ui { .. }) | None => run_tui(board, data, config)?,
    }
    Ok(())
}

fn run_tui(board: KanbanBoard, data: SampleData, config: Config) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(board, data, config, Local::now().date_naive());
    tracing::info!(page = ?app.view.page, tasks = app.board.tasks().len(), "dashboard started");
    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
