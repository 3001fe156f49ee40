//! Property-based tests for the pure list operations and the persisted
//! JSON encoding.

use proptest::prelude::*;

use tuido::tasks::{self, Task, TaskId};

/// Strategy for an arbitrary task list with unique ids.
///
/// Ids are assigned from the element index, which keeps the uniqueness
/// invariant by construction.
fn arb_task_list(max_len: usize) -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(("[^\x00]{1,40}", any::<bool>()), 0..max_len).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (text, completed))| Task {
                id: TaskId::from_raw(i as u64),
                task: text,
                completed,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn add_grows_list_by_exactly_one(tasks in arb_task_list(8), text in "[^\x00]{1,40}") {
        let next = tasks::add(&tasks, &text).unwrap();
        prop_assert_eq!(next.len(), tasks.len() + 1);
        // Existing records are untouched and in order.
        prop_assert_eq!(&next[..tasks.len()], &tasks[..]);
        // The new record is last, carries the text, and is not completed.
        let added = &next[tasks.len()];
        prop_assert_eq!(&added.task, &text);
        prop_assert!(!added.completed);
    }

    #[test]
    fn add_empty_text_never_changes_the_list(tasks in arb_task_list(8)) {
        prop_assert!(tasks::add(&tasks, "").is_err());
    }

    #[test]
    fn complete_only_touches_the_matching_record(tasks in arb_task_list(8), idx in 0usize..8) {
        prop_assume!(idx < tasks.len());
        let id = tasks[idx].id;
        let next = tasks::complete(&tasks, id);

        prop_assert_eq!(next.len(), tasks.len());
        for (i, (before, after)) in tasks.iter().zip(&next).enumerate() {
            if i == idx {
                prop_assert!(after.completed);
                prop_assert_eq!(&after.task, &before.task);
                prop_assert_eq!(after.id, before.id);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn complete_is_idempotent(tasks in arb_task_list(8), idx in 0usize..8) {
        prop_assume!(idx < tasks.len());
        let id = tasks[idx].id;
        let once = tasks::complete(&tasks, id);
        let twice = tasks::complete(&once, id);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn complete_unknown_id_is_noop(tasks in arb_task_list(8)) {
        // Ids in the list are < len, so this id is never present.
        let next = tasks::complete(&tasks, TaskId::from_raw(u64::MAX));
        prop_assert_eq!(next, tasks);
    }

    #[test]
    fn delete_removes_exactly_the_matching_record(tasks in arb_task_list(8), idx in 0usize..8) {
        prop_assume!(idx < tasks.len());
        let id = tasks[idx].id;
        let next = tasks::delete(&tasks, id);

        prop_assert_eq!(next.len(), tasks.len() - 1);
        prop_assert!(next.iter().all(|t| t.id != id));
        // Remaining records keep their relative order.
        let expected: Vec<&Task> = tasks.iter().filter(|t| t.id != id).collect();
        prop_assert_eq!(next.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn delete_unknown_id_is_noop(tasks in arb_task_list(8)) {
        let next = tasks::delete(&tasks, TaskId::from_raw(u64::MAX));
        prop_assert_eq!(next, tasks);
    }

    #[test]
    fn clear_always_empties(tasks in arb_task_list(8)) {
        prop_assert!(tasks::clear(&tasks).is_empty());
    }

    #[test]
    fn json_round_trip_preserves_content_and_order(tasks in arb_task_list(8)) {
        let json = serde_json::to_string(&tasks).unwrap();
        let back: Vec<Task> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, tasks);
    }
}
