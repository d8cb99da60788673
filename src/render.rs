//! Task Board Rendering
//!
//! Pure conversion from the backend collection to the two display lists.

use crate::models::{Task, TaskId};

pub const STATUS_COMPLETED: &str = "✅ Completed";
pub const STATUS_PENDING: &str = "⏳ Pending";
pub const LABEL_COMPLETE: &str = "✓ Complete";
pub const LABEL_UNDO: &str = "↩ Undo";
pub const LABEL_DELETE: &str = "🗑 Delete";

/// One rendered list row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    /// "Task {id}: {title} - {status}"
    pub label: String,
    /// Hover text, empty when the task has no description
    pub detail: String,
    pub toggle_label: &'static str,
    /// Value the toggle button will send
    pub toggle_to: bool,
    pub delete_label: &'static str,
}

/// Pending and completed rows, each in backend response order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    pub pending: Vec<TaskRow>,
    pub completed: Vec<TaskRow>,
}

impl TaskBoard {
    pub fn len(&self) -> usize {
        self.pending.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn contains(&self, id: TaskId) -> bool {
        self.pending.iter().chain(&self.completed).any(|row| row.id == id)
    }
}

pub fn render_row(task: &Task) -> TaskRow {
    let status = if task.completed { STATUS_COMPLETED } else { STATUS_PENDING };
    TaskRow {
        id: task.id,
        label: format!("Task {}: {} - {}", task.id, task.title, status),
        detail: task.description.clone(),
        toggle_label: if task.completed { LABEL_UNDO } else { LABEL_COMPLETE },
        toggle_to: !task.completed,
        delete_label: LABEL_DELETE,
    }
}

/// Build the board from a full collection
pub fn render(tasks: &[Task]) -> TaskBoard {
    let mut board = TaskBoard::default();
    for task in tasks {
        let row = render_row(task);
        if task.completed {
            board.completed.push(row);
        } else {
            board.pending.push(row);
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: TaskId, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
            description: String::new(),
        }
    }

    #[test]
    fn test_single_pending_task() {
        let board = render(&[make_task(1, "Buy milk", false)]);

        assert!(board.completed.is_empty());
        assert_eq!(board.pending.len(), 1);
        let row = &board.pending[0];
        assert_eq!(row.label, "Task 1: Buy milk - ⏳ Pending");
        assert_eq!(row.toggle_label, "✓ Complete");
        assert!(row.toggle_to);
        assert_eq!(row.delete_label, "🗑 Delete");
    }

    #[test]
    fn test_completed_task_row() {
        let row = render_row(&make_task(4, "Walk dog", true));
        assert_eq!(row.label, "Task 4: Walk dog - ✅ Completed");
        assert_eq!(row.toggle_label, "↩ Undo");
        assert!(!row.toggle_to);
    }

    #[test]
    fn test_partition_keeps_response_order() {
        let tasks = vec![
            make_task(5, "e", false),
            make_task(2, "b", true),
            make_task(9, "i", false),
            make_task(1, "a", true),
            make_task(3, "c", false),
        ];

        let board = render(&tasks);

        assert_eq!(board.len(), tasks.len());
        let pending: Vec<_> = board.pending.iter().map(|r| r.id).collect();
        let completed: Vec<_> = board.completed.iter().map(|r| r.id).collect();
        assert_eq!(pending, vec![5, 9, 3]);
        assert_eq!(completed, vec![2, 1]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let tasks = vec![make_task(1, "a", false), make_task(2, "b", true)];
        assert_eq!(render(&tasks), render(&tasks));
    }

    #[test]
    fn test_empty_collection() {
        let board = render(&[]);
        assert!(board.is_empty());
        assert!(!board.contains(1));
    }

    #[test]
    fn test_description_becomes_detail() {
        let mut task = make_task(2, "Report", false);
        task.description = "due Friday".to_string();
        assert_eq!(render_row(&task).detail, "due Friday");
    }
}
