//! Selector - 未完了タスクの絞り込みとランダム選択
//!
//! Both functions are pure over their inputs; randomness comes in only
//! through the injected [`RandomSource`].

use crate::domain::{CompletionSet, Task, TaskCatalog};
use crate::ports::RandomSource;

/// The subsequence of the catalog whose ids are not yet completed, in
/// catalog order.
pub fn filter_available<'a>(catalog: &'a TaskCatalog, completed: &CompletionSet) -> Vec<&'a Task> {
    catalog
        .tasks()
        .iter()
        .filter(|task| !completed.contains_key(&task.id))
        .collect()
}

/// Pick one task uniformly from `available`.
///
/// `None` is the Exhausted condition: every catalog task is completed
/// and nothing can be assigned.
pub fn pick_random<'a>(available: &[&'a Task], rng: &mut dyn RandomSource) -> Option<&'a Task> {
    if available.is_empty() {
        return None;
    }
    Some(available[rng.pick_index(available.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use crate::ports::FixedSequence;
    use rstest::rstest;

    fn catalog() -> TaskCatalog {
        TaskCatalog::from_json(
            br#"[
                {"id": 1, "description": "A", "itemIconId": 10},
                {"id": 2, "description": "B", "itemIconId": 20},
                {"id": 3, "description": "C", "itemIconId": 30}
            ]"#,
        )
        .unwrap()
    }

    fn completed(ids: &[i32]) -> CompletionSet {
        ids.iter().map(|&id| (TaskId(id), 0)).collect()
    }

    #[test]
    fn filter_with_nothing_completed_returns_the_whole_catalog() {
        let catalog = catalog();
        let available = filter_available(&catalog, &completed(&[]));
        let ids: Vec<TaskId> = available.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(2), TaskId(3)]);
    }

    #[rstest]
    #[case::first_done(&[1], &[2, 3])]
    #[case::middle_done(&[2], &[1, 3])]
    #[case::two_done(&[1, 3], &[2])]
    #[case::all_done(&[1, 2, 3], &[])]
    fn filter_excludes_completed_ids_and_keeps_order(
        #[case] done: &[i32],
        #[case] expected: &[i32],
    ) {
        let catalog = catalog();
        let available = filter_available(&catalog, &completed(done));
        let ids: Vec<i32> = available.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn filter_ignores_ids_outside_the_catalog() {
        let catalog = catalog();
        let available = filter_available(&catalog, &completed(&[99]));
        assert_eq!(available.len(), 3);
    }

    #[test]
    fn pick_from_empty_pool_signals_exhausted() {
        let mut rng = FixedSequence::new(vec![0]);
        assert!(pick_random(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_follows_the_injected_random_source() {
        let catalog = catalog();
        let available = filter_available(&catalog, &completed(&[]));

        let mut rng = FixedSequence::new(vec![2, 0, 1]);
        assert_eq!(pick_random(&available, &mut rng).unwrap().id, TaskId(3));
        assert_eq!(pick_random(&available, &mut rng).unwrap().id, TaskId(1));
        assert_eq!(pick_random(&available, &mut rng).unwrap().id, TaskId(2));
    }

    #[test]
    fn pick_never_returns_a_completed_task() {
        let catalog = catalog();
        let done = completed(&[1, 3]);
        let available = filter_available(&catalog, &done);

        // Walk every index the source could produce.
        for i in 0..available.len() {
            let mut rng = FixedSequence::new(vec![i]);
            let picked = pick_random(&available, &mut rng).unwrap();
            assert!(!done.contains_key(&picked.id));
        }
    }
}
