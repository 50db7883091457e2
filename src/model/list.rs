use super::task::Task;

/// The ordered task collection plus the browsing cursor.
///
/// Invariant: when the list is non-empty the cursor is a valid index. When the
/// list is empty the cursor is inert: [`TaskList::cursor`] returns `None` and
/// every operation that indexes into the list is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    cursor: usize,
}

impl TaskList {
    /// Build a list with the cursor on the first task
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskList { tasks, cursor: 0 }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Cursor index, or `None` while the list is empty
    pub fn cursor(&self) -> Option<usize> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// The task under the cursor
    pub fn selected(&self) -> Option<&Task> {
        self.cursor().and_then(|i| self.tasks.get(i))
    }

    /// Move the cursor by `delta`, clamped to the list bounds.
    /// Returns true if the cursor moved.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        let Some(current) = self.cursor() else {
            return false;
        };
        let max = self.tasks.len() - 1;
        let target = current.saturating_add_signed(delta).min(max);
        self.cursor = target;
        target != current
    }

    /// Flip the completion flag of the task under the cursor.
    /// Returns false (and changes nothing) when the list is empty.
    pub fn toggle_completed(&mut self) -> bool {
        let Some(i) = self.cursor() else {
            return false;
        };
        self.tasks[i].toggle();
        true
    }

    /// Remove the task under the cursor, keeping the order of the rest.
    /// The cursor is re-clamped so it still points at a task (or goes inert).
    pub fn delete_at_cursor(&mut self) -> Option<Task> {
        let i = self.cursor()?;
        debug_assert!(i < self.tasks.len());
        let removed = self.tasks.remove(i);
        self.clamp_cursor();
        Some(removed)
    }

    /// Append a new open task at the end. The cursor does not move.
    pub fn append(&mut self, text: impl Into<String>) {
        self.tasks.push(Task::new(text));
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.tasks.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: &[&str]) -> TaskList {
        TaskList::new(items.iter().map(|s| Task::new(*s)).collect())
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn assert_cursor_invariant(list: &TaskList) {
        match list.cursor() {
            Some(c) => assert!(c < list.len(), "cursor {} out of range {}", c, list.len()),
            None => assert!(list.is_empty()),
        }
    }

    #[test]
    fn empty_list_has_inert_cursor() {
        let list = TaskList::default();
        assert_eq!(list.cursor(), None);
        assert!(list.selected().is_none());
    }

    #[test]
    fn new_list_starts_at_first_task() {
        let list = list_of(&["a", "b"]);
        assert_eq!(list.cursor(), Some(0));
        assert_eq!(list.selected().unwrap().text, "a");
    }

    #[test]
    fn move_cursor_clamps_at_both_ends() {
        let mut list = list_of(&["a", "b", "c"]);
        assert!(!list.move_cursor(-1));
        assert_eq!(list.cursor(), Some(0));

        assert!(list.move_cursor(1));
        assert!(list.move_cursor(1));
        assert!(!list.move_cursor(1));
        assert_eq!(list.cursor(), Some(2));

        assert!(list.move_cursor(-10));
        assert_eq!(list.cursor(), Some(0));
        assert!(list.move_cursor(10));
        assert_eq!(list.cursor(), Some(2));
    }

    #[test]
    fn move_cursor_on_empty_list_is_noop() {
        let mut list = TaskList::default();
        assert!(!list.move_cursor(1));
        assert!(!list.move_cursor(-1));
        assert_eq!(list, TaskList::default());
    }

    #[test]
    fn toggle_flips_only_selected_task() {
        let mut list = list_of(&["a", "b"]);
        list.move_cursor(1);
        assert!(list.toggle_completed());
        assert!(!list.tasks()[0].completed);
        assert!(list.tasks()[1].completed);
        assert!(list.toggle_completed());
        assert!(!list.tasks()[1].completed);
    }

    #[test]
    fn toggle_on_empty_list_is_noop() {
        let mut list = TaskList::default();
        assert!(!list.toggle_completed());
        assert_eq!(list, TaskList::default());
    }

    #[test]
    fn delete_preserves_order_of_remaining_tasks() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.move_cursor(1);
        let removed = list.delete_at_cursor().unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&list), vec!["a", "c", "d"]);
        assert_eq!(list.cursor(), Some(1));
        assert_eq!(list.selected().unwrap().text, "c");
    }

    #[test]
    fn delete_last_task_reclamps_cursor() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_cursor(2);
        assert_eq!(list.cursor(), Some(2));

        list.delete_at_cursor();
        assert_eq!(list.len(), 2);
        assert_eq!(list.cursor(), Some(1));
        assert_eq!(list.selected().unwrap().text, "b");
    }

    #[test]
    fn delete_only_task_leaves_cursor_inert() {
        let mut list = list_of(&["a"]);
        assert!(list.delete_at_cursor().is_some());
        assert!(list.is_empty());
        assert_eq!(list.cursor(), None);
        assert!(list.delete_at_cursor().is_none());
    }

    #[test]
    fn delete_from_bottom_until_empty_returns_every_task() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_cursor(2);
        let mut removed = Vec::new();
        while let Some(task) = list.delete_at_cursor() {
            assert_cursor_invariant(&list);
            removed.push(task.text);
        }
        assert_eq!(removed, vec!["c", "b", "a"]);
        assert_eq!(list.cursor(), None);
    }

    #[test]
    fn delete_on_empty_list_is_noop() {
        let mut list = TaskList::default();
        assert!(list.delete_at_cursor().is_none());
        assert_eq!(list, TaskList::default());
    }

    #[test]
    fn append_goes_to_end_without_moving_cursor() {
        let mut list = list_of(&["a", "b"]);
        list.move_cursor(1);
        list.append("c");
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
        assert_eq!(list.cursor(), Some(1));
        assert!(!list.tasks()[2].completed);
    }

    #[test]
    fn append_to_empty_list_activates_cursor() {
        let mut list = TaskList::default();
        list.append("first");
        assert_eq!(list.cursor(), Some(0));
        assert_eq!(list.selected().unwrap().text, "first");
    }

    #[test]
    fn append_allows_duplicates() {
        let mut list = list_of(&["a"]);
        list.append("a");
        assert_eq!(texts(&list), vec!["a", "a"]);
    }

    #[test]
    fn length_and_cursor_hold_across_mixed_operations() {
        // Deterministic pseudo-random walk over append/delete/move
        let mut list = list_of(&["seed-0", "seed-1"]);
        let initial = list.len();
        let mut appends = 0;
        let mut deletes = 0;
        let mut state: u32 = 0x2545_f491;

        for step in 0..500 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            match state % 5 {
                0 | 1 => {
                    list.append(format!("task-{}", step));
                    appends += 1;
                }
                2 => {
                    if list.delete_at_cursor().is_some() {
                        deletes += 1;
                    }
                }
                3 => {
                    list.move_cursor(((state >> 8) % 7) as isize - 3);
                }
                _ => {
                    list.toggle_completed();
                }
            }
            assert_eq!(list.len(), initial + appends - deletes);
            assert_cursor_invariant(&list);
        }
    }
}
