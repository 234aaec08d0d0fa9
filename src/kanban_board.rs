use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::BoardError;
use crate::task::{Status, Task};

/// What a drop did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was in progress.
    Idle,
    /// The task was dropped on the column it already sits in.
    Unchanged { id: String },
    Moved { id: String, from: Status, to: Status },
}

#[derive(Debug, Default, Clone)]
pub struct KanbanBoard {
    tasks: Vec<Task>,
    dragged_task_id: Option<String>,
}

impl KanbanBoard {
    /// Builds a board from seed tasks, keeping their order.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, BoardError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(BoardError::DuplicateTaskId(task.id.clone()));
            }
        }
        Ok(Self {
            tasks,
            dragged_task_id: None,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Every column in board order.
    pub fn columns(&self) -> [(Status, Vec<&Task>); 4] {
        Status::ALL.map(|status| (status, self.get_tasks_by_status(status)))
    }

    /// Share of tasks that are done, 0.0 for an empty board.
    pub fn completion_rate(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.count_by_status(Status::Done) as f64 / self.tasks.len() as f64
    }

    /// Starts dragging `task_id`, replacing any drag already in progress.
    /// Unknown ids are accepted here and rejected on drop.
    pub fn begin_drag(&mut self, task_id: impl Into<String>) {
        let task_id = task_id.into();
        debug!(task_id = %task_id, "drag started");
        self.dragged_task_id = Some(task_id);
    }

    pub fn cancel_drag(&mut self) {
        if let Some(id) = self.dragged_task_id.take() {
            debug!(task_id = %id, "drag cancelled");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged_task_id.is_some()
    }

    pub fn dragged_task_id(&self) -> Option<&str> {
        self.dragged_task_id.as_deref()
    }

    pub fn dragged_task(&self) -> Option<&Task> {
        self.dragged_task_id.as_deref().and_then(|id| self.task(id))
    }

    /// Drops the dragged task on `target`.
    ///
    /// Only the dragged task's status changes; order and all other tasks are
    /// left alone. The drag state is cleared whether or not the task exists.
    pub fn complete_drag(&mut self, target: Status) -> Result<DropOutcome, BoardError> {
        let Some(id) = self.dragged_task_id.take() else {
            return Ok(DropOutcome::Idle);
        };

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            warn!(task_id = %id, target = %target, "drop rejected: task not on board");
            return Err(BoardError::UnknownTaskId(id));
        };

        let from = task.status;
        if from == target {
            debug!(task_id = %id, status = %target, "dropped on own column");
            return Ok(DropOutcome::Unchanged { id });
        }

        task.status = target;
        debug!(task_id = %id, from = %from, to = %target, "task moved");
        Ok(DropOutcome::Moved {
            id,
            from,
            to: target,
        })
    }

    /// Like [`complete_drag`](Self::complete_drag) but takes a wire status
    /// name. An unrecognized name is rejected before anything else and the
    /// drag stays in progress.
    pub fn complete_drag_named(&mut self, target: &str) -> Result<DropOutcome, BoardError> {
        let status = target.parse::<Status>().inspect_err(|_| {
            warn!(target, "drop rejected: invalid status");
        })?;
        self.complete_drag(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn board() -> KanbanBoard {
        KanbanBoard::from_tasks(vec![
            Task::new("1", "Design system updates", Status::Todo),
            Task::new("2", "Implement dark mode", Status::Done),
            Task::new("3", "Fix responsive layout", Status::InProgress),
            Task::new("4", "Write documentation", Status::Todo),
            Task::new("5", "API integration", Status::Blocked),
        ])
        .unwrap()
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[rstest]
    fn test_columns_partition_every_task_once(board: KanbanBoard) {
        let mut seen: Vec<String> = Status::ALL
            .iter()
            .flat_map(|s| ids(&board.get_tasks_by_status(*s)))
            .collect();
        seen.sort();
        let mut all: Vec<String> = board.tasks().iter().map(|t| t.id.clone()).collect();
        all.sort();
        assert_eq!(seen, all);
    }

    #[rstest]
    fn test_get_tasks_by_status_keeps_insertion_order(board: KanbanBoard) {
        assert_eq!(ids(&board.get_tasks_by_status(Status::Todo)), ["1", "4"]);
    }

    #[test]
    fn test_move_scenario() {
        let mut board = KanbanBoard::from_tasks(vec![
            Task::new("1", "a", Status::Todo),
            Task::new("2", "b", Status::Done),
        ])
        .unwrap();

        board.begin_drag("1");
        let outcome = board.complete_drag(Status::InProgress).unwrap();

        assert_eq!(
            outcome,
            DropOutcome::Moved {
                id: "1".to_string(),
                from: Status::Todo,
                to: Status::InProgress
            }
        );
        assert!(board.get_tasks_by_status(Status::Todo).is_empty());
        assert_eq!(ids(&board.get_tasks_by_status(Status::InProgress)), ["1"]);
        assert_eq!(ids(&board.get_tasks_by_status(Status::Done)), ["2"]);
        assert!(!board.is_dragging());
    }

    #[rstest]
    fn test_complete_drag_without_begin_is_noop(mut board: KanbanBoard) {
        let before = board.tasks().to_vec();
        assert_eq!(board.complete_drag(Status::Done), Ok(DropOutcome::Idle));
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[rstest]
    fn test_complete_drag_twice_is_idempotent(mut board: KanbanBoard) {
        board.begin_drag("1");
        board.complete_drag(Status::Blocked).unwrap();
        let after_first = board.tasks().to_vec();

        assert_eq!(board.complete_drag(Status::Blocked), Ok(DropOutcome::Idle));
        assert_eq!(board.tasks(), after_first.as_slice());

        board.begin_drag("1");
        assert_eq!(
            board.complete_drag(Status::Blocked),
            Ok(DropOutcome::Unchanged { id: "1".to_string() })
        );
        assert_eq!(board.tasks(), after_first.as_slice());
    }

    #[rstest]
    fn test_drop_on_own_column_changes_nothing(mut board: KanbanBoard) {
        let before = board.tasks().to_vec();
        board.begin_drag("3");
        let outcome = board.complete_drag(Status::InProgress).unwrap();
        assert_eq!(outcome, DropOutcome::Unchanged { id: "3".to_string() });
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[rstest]
    fn test_move_touches_only_dragged_task(mut board: KanbanBoard) {
        let before = board.tasks().to_vec();
        board.begin_drag("4");
        board.complete_drag(Status::Done).unwrap();

        for (old, new) in before.iter().zip(board.tasks()) {
            assert_eq!(old.id, new.id);
            if old.id == "4" {
                assert_eq!(new.status, Status::Done);
                assert_eq!(old.title, new.title);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[rstest]
    fn test_unknown_task_id_is_reported_and_skipped(mut board: KanbanBoard) {
        let before = board.tasks().to_vec();
        board.begin_drag("999");
        assert_eq!(
            board.complete_drag(Status::Done),
            Err(BoardError::UnknownTaskId("999".to_string()))
        );
        assert_eq!(board.tasks(), before.as_slice());
        assert!(!board.is_dragging());
    }

    #[rstest]
    fn test_invalid_status_keeps_drag(mut board: KanbanBoard) {
        let before = board.tasks().to_vec();
        board.begin_drag("1");
        assert_eq!(
            board.complete_drag_named("archived"),
            Err(BoardError::InvalidStatus("archived".to_string()))
        );
        assert_eq!(board.tasks(), before.as_slice());
        assert_eq!(board.dragged_task_id(), Some("1"));

        board.complete_drag_named("done").unwrap();
        assert_eq!(board.task("1").map(|t| t.status), Some(Status::Done));
    }

    #[rstest]
    fn test_cancel_drag_leaves_tasks(mut board: KanbanBoard) {
        let before = board.tasks().to_vec();
        board.begin_drag("2");
        assert_eq!(board.dragged_task().map(|t| t.id.as_str()), Some("2"));
        board.cancel_drag();
        assert!(!board.is_dragging());
        assert_eq!(board.complete_drag(Status::Todo), Ok(DropOutcome::Idle));
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[rstest]
    fn test_new_drag_supersedes_previous(mut board: KanbanBoard) {
        board.begin_drag("1");
        board.begin_drag("2");
        board.complete_drag(Status::Blocked).unwrap();
        assert_eq!(board.task("1").map(|t| t.status), Some(Status::Todo));
        assert_eq!(board.task("2").map(|t| t.status), Some(Status::Blocked));
    }

    #[test]
    fn test_empty_board() {
        let mut board = KanbanBoard::default();
        for status in Status::ALL {
            assert!(board.get_tasks_by_status(status).is_empty());
        }
        assert_eq!(board.completion_rate(), 0.0);
        assert_eq!(board.complete_drag(Status::Done), Ok(DropOutcome::Idle));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = KanbanBoard::from_tasks(vec![
            Task::new("1", "a", Status::Todo),
            Task::new("1", "b", Status::Done),
        ]);
        assert_eq!(
            result.err(),
            Some(BoardError::DuplicateTaskId("1".to_string()))
        );
    }

    #[rstest]
    fn test_counts_and_completion_rate(board: KanbanBoard) {
        let columns = board.columns();
        assert_eq!(columns[0].0, Status::Todo);
        assert_eq!(columns[0].1.len(), 2);
        assert_eq!(board.count_by_status(Status::Done), 1);
        assert!((board.completion_rate() - 0.2).abs() < f64::EPSILON);
    }
}
