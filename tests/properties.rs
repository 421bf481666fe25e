//! Property tests for the TodoList service
//!
//! These exercise the id-allocation and ordering guarantees across arbitrary
//! interleavings of adds and deletes.

use proptest::prelude::*;

use todoflow::domain::{Priority, TodoList};

/// An operation in a randomized workload
#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => (1u64..50).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn ids_are_strictly_increasing_from_one(ops in prop::collection::vec(op_strategy(), 1..100)) {
        let mut list = TodoList::new();
        let mut assigned = Vec::new();

        for op in ops {
            match op {
                Op::Add => {
                    let id = list.add("Task", "", Priority::Medium).unwrap().id;
                    assigned.push(id);
                }
                Op::Delete(id) => {
                    // Unknown ids fail, known ids succeed; either way the
                    // counter must be unaffected.
                    let _ = list.delete(id);
                }
            }
        }

        for (i, id) in assigned.iter().enumerate() {
            prop_assert_eq!(*id, (i + 1) as u64);
        }
    }

    #[test]
    fn deleted_ids_never_come_back(ops in prop::collection::vec(op_strategy(), 1..100)) {
        let mut list = TodoList::new();
        let mut deleted = Vec::new();

        for op in ops {
            match op {
                Op::Add => {
                    let id = list.add("Task", "", Priority::Medium).unwrap().id;
                    prop_assert!(!deleted.contains(&id));
                }
                Op::Delete(id) => {
                    if list.delete(id).is_ok() {
                        deleted.push(id);
                    }
                }
            }
        }
    }

    #[test]
    fn get_all_is_always_sorted(ops in prop::collection::vec(op_strategy(), 1..100)) {
        let mut list = TodoList::new();

        for op in ops {
            match op {
                Op::Add => {
                    list.add("Task", "", Priority::Medium).unwrap();
                }
                Op::Delete(id) => {
                    let _ = list.delete(id);
                }
            }

            let ids: Vec<u64> = list.get_all().iter().map(|t| t.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(&ids, &sorted);
        }
    }

    #[test]
    fn failed_adds_never_consume_ids(titles in prop::collection::vec(prop_oneof![
        Just("   ".to_string()),
        Just("".to_string()),
        "[a-z]{1,10}",
    ], 1..50)) {
        let mut list = TodoList::new();
        let mut expected_next = 1u64;

        for title in titles {
            match list.add(&title, "", Priority::Medium) {
                Ok(todo) => {
                    prop_assert_eq!(todo.id, expected_next);
                    expected_next += 1;
                }
                Err(e) => prop_assert!(e.is_validation()),
            }
        }
    }
}
