//! Task List Utilities
//!
//! Pure transformations over task snapshots.

use crate::models::Task;

/// Return a new list with the completion of task `id` inverted.
/// Order and every other field are preserved; an unknown id yields an equal list.
pub fn toggle_task(tasks: &[Task], id: u32) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Row class for a task
pub fn task_row_class(completed: bool) -> &'static str {
    if completed {
        "task-item completed"
    } else {
        "task-item"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::initial_tasks;

    #[test]
    fn test_toggle_task_present() {
        let tasks = initial_tasks();
        let toggled = toggle_task(&tasks, 3);

        assert_eq!(toggled.len(), tasks.len());
        for (before, after) in tasks.iter().zip(&toggled) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.text, after.text);
            if before.id == 3 {
                assert_eq!(after.completed, !before.completed);
            } else {
                assert_eq!(after, before);
            }
        }
        assert!(toggled[2].completed);
    }

    #[test]
    fn test_toggle_task_uncompletes() {
        let tasks = initial_tasks();
        let toggled = toggle_task(&tasks, 2);
        assert!(!toggled[1].completed);
        assert_eq!(toggled.iter().filter(|t| t.completed).count(), 0);
    }

    #[test]
    fn test_toggle_task_absent_is_noop() {
        let tasks = initial_tasks();
        assert_eq!(toggle_task(&tasks, 42), tasks);
        assert_eq!(toggle_task(&[], 1), Vec::<Task>::new());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let tasks = initial_tasks();
        for id in [0, 1, 2, 3, 4, 5] {
            assert_eq!(toggle_task(&toggle_task(&tasks, id), id), tasks);
        }
    }

    #[test]
    fn test_toggle_leaves_input_untouched() {
        let tasks = initial_tasks();
        let snapshot = tasks.clone();
        let _ = toggle_task(&tasks, 1);
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_task_row_class() {
        assert_eq!(task_row_class(true), "task-item completed");
        assert_eq!(task_row_class(false), "task-item");
    }
}
