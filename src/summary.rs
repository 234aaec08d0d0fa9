//! Plain-text board output for the headless subcommands.

use crate::error::BoardError;
use crate::kanban_board::{DropOutcome, KanbanBoard};
use crate::task::Status;

pub fn list_tasks(board: &KanbanBoard) -> String {
    let mut out = String::new();
    for (status, tasks) in board.columns() {
        out.push_str(&format!("{} ({}):\n", status.label(), tasks.len()));
        for task in tasks {
            let assignee = task
                .assignee
                .as_ref()
                .map(|p| format!(" @{}", p.name))
                .unwrap_or_default();
            out.push_str(&format!(
                "- [{}] {} ({}){}\n",
                task.id,
                task.title,
                task.priority.label(),
                assignee
            ));
        }
    }
    out
}

pub fn stats(board: &KanbanBoard) -> String {
    let mut out = String::new();
    for status in Status::ALL {
        out.push_str(&format!("{}: {}\n", status.label(), board.count_by_status(status)));
    }
    out.push_str(&format!("Completion: {:.0}%\n", board.completion_rate() * 100.0));
    out
}

/// Runs a full drag of `task_id` onto the column named `status`.
pub fn move_task(
    board: &mut KanbanBoard,
    task_id: &str,
    status: &str,
) -> Result<DropOutcome, BoardError> {
    board.begin_drag(task_id);
    let outcome = board.complete_drag_named(status);
    if outcome.is_err() {
        board.cancel_drag();
    }
    outcome
}

pub fn describe(outcome: &DropOutcome) -> String {
    match outcome {
        DropOutcome::Idle => "nothing to move".to_string(),
        DropOutcome::Unchanged { id } => format!("task {id} is already there"),
        DropOutcome::Moved { id, from, to } => {
            format!("moved task {id}: {} -> {}", from.label(), to.label())
        }
    }
}
