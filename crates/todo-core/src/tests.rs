//! Scenario Tests
//!
//! Whole-flow tests across the draft buffer and the list.

use crate::{Draft, Stats, TodoList};

fn submit(draft: &mut Draft, list: &mut TodoList, text: &str) -> u64 {
    draft.set_text(text);
    draft.submit(list).expect("Failed to submit")
}

#[test]
fn test_add_toggle_remove_flow() {
    let mut draft = Draft::new();
    let mut list = TodoList::new();

    let a = submit(&mut draft, &mut list, "A");
    let b = submit(&mut draft, &mut list, "B");
    let state: Vec<(&str, bool)> = list.iter().map(|i| (i.text.as_str(), i.completed)).collect();
    assert_eq!(state, vec![("A", false), ("B", false)]);

    list.toggle(a);
    let state: Vec<(&str, bool)> = list.iter().map(|i| (i.text.as_str(), i.completed)).collect();
    assert_eq!(state, vec![("A", true), ("B", false)]);

    list.remove(b);
    let state: Vec<(&str, bool)> = list.iter().map(|i| (i.text.as_str(), i.completed)).collect();
    assert_eq!(state, vec![("A", true)]);
    assert_eq!(list.stats(), Stats { completed: 1, total: 1 });
}

#[test]
fn test_whitespace_submit_leaves_everything() {
    let mut draft = Draft::new();
    let mut list = TodoList::new();
    submit(&mut draft, &mut list, "keep");
    let before = list.clone();

    draft.set_text("   ");
    assert!(draft.submit(&mut list).is_none());

    assert_eq!(list, before);
    assert_eq!(draft.text(), "   ");
}

#[test]
fn test_completed_never_exceeds_count() {
    let mut draft = Draft::new();
    let mut list = TodoList::new();
    // Small LCG so the op sequence is deterministic
    let mut seed: u64 = 0x2545_F491;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        seed >> 33
    };

    for step in 0..500 {
        let pick = next();
        match pick % 4 {
            0 | 1 => {
                draft.set_text(format!("task {}", step));
                draft.submit(&mut list);
            }
            2 => {
                let id = next() % (list.count() as u64 + 3) + 1;
                list.toggle(id);
            }
            _ => {
                let id = next() % (list.count() as u64 + 3) + 1;
                list.remove(id);
            }
        }
        assert!(list.completed_count() <= list.count());
    }
}
