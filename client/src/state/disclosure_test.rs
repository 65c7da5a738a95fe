use super::*;
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================
// ExclusiveDisclosure
// =============================================================

#[test]
fn exclusive_starts_closed() {
    let group = ExclusiveDisclosure::<&str>::new();
    assert_eq!(group.open_id(), None);
    assert!(!group.is_open(&"a"));
}

#[test]
fn exclusive_toggle_opens_then_closes() {
    let mut group = ExclusiveDisclosure::new();
    group.toggle("a");
    assert!(group.is_open(&"a"));
    group.toggle("a");
    assert_eq!(group.open_id(), None);
}

#[test]
fn exclusive_opening_another_closes_previous() {
    let mut group = ExclusiveDisclosure::new();
    group.toggle(1);
    group.toggle(2);
    assert!(!group.is_open(&1));
    assert!(group.is_open(&2));
    assert_eq!(group.open_id(), Some(&2));
}

#[test]
fn exclusive_double_toggle_restores_prior_state() {
    let mut group = ExclusiveDisclosure::new();
    group.toggle("faq-1");
    let before = group.clone();
    group.toggle("faq-2");
    group.toggle("faq-2");
    // faq-2 closing leaves the group closed, not back on faq-1.
    assert_ne!(group, before);
    assert_eq!(group.open_id(), None);

    let mut closed = ExclusiveDisclosure::new();
    let before = closed.clone();
    closed.toggle("faq-3");
    closed.toggle("faq-3");
    assert_eq!(closed, before);
}

#[test]
fn exclusive_close_all() {
    let mut group = ExclusiveDisclosure::new();
    group.toggle('x');
    group.close_all();
    assert_eq!(group.open_id(), None);
}

// =============================================================
// IndependentDisclosure
// =============================================================

#[test]
fn independent_toggles_only_the_given_id() {
    let mut group = IndependentDisclosure::new();
    group.toggle(1);
    group.toggle(2);
    assert!(group.is_open(&1));
    assert!(group.is_open(&2));
    group.toggle(1);
    assert!(!group.is_open(&1));
    assert!(group.is_open(&2));
    assert_eq!(group.open_count(), 1);
}

#[test]
fn independent_double_toggle_restores_prior_state() {
    let mut group = IndependentDisclosure::new();
    group.toggle("menu");
    let before = group.clone();
    group.toggle("modal");
    group.toggle("modal");
    assert_eq!(group, before);
}

#[test]
fn independent_close_and_close_all() {
    let mut group = IndependentDisclosure::new();
    group.toggle(3);
    group.toggle(4);
    group.close(&3);
    assert!(!group.is_open(&3));
    group.close(&3);
    assert_eq!(group.open_count(), 1);
    group.close_all();
    assert_eq!(group.open_count(), 0);
}

#[test]
fn both_flavors_work_through_the_trait() {
    fn open_twice<D: Disclosure<u8>>(group: &mut D) -> bool {
        group.toggle(9);
        group.toggle(9);
        group.is_open(&9)
    }
    assert!(!open_twice(&mut ExclusiveDisclosure::new()));
    assert!(!open_twice(&mut IndependentDisclosure::new()));
}

// =============================================================
// Toggle sequences
// =============================================================

const IDS: u8 = 6;

fn exclusive_after(toggles: &[u8]) -> ExclusiveDisclosure<u8> {
    let mut group = ExclusiveDisclosure::new();
    for id in toggles {
        group.toggle(*id);
    }
    group
}

fn independent_after(toggles: &[u8]) -> IndependentDisclosure<u8> {
    let mut group = IndependentDisclosure::new();
    for id in toggles {
        group.toggle(*id);
    }
    group
}

proptest! {
    /// At most one id is open after every step, and it is the last one toggled.
    #[test]
    fn exclusive_any_sequence_leaves_at_most_one_open(toggles in vec(0..IDS, 0..200)) {
        let mut group = ExclusiveDisclosure::new();
        for id in toggles {
            group.toggle(id);
            let open = (0..IDS).filter(|i| group.is_open(i)).count();
            prop_assert!(open <= 1, "{} ids open", open);
            prop_assert!(group.open_id().is_none_or(|open| *open == id));
        }
    }

    /// From closed, or from the same id open, a double toggle is a round trip.
    #[test]
    fn exclusive_double_toggle_round_trips(prefix in vec(0..IDS, 0..50), id in 0..IDS) {
        let mut group = exclusive_after(&prefix);
        prop_assume!(group.open_id().is_none_or(|open| *open == id));
        let before = group.clone();
        group.toggle(id);
        group.toggle(id);
        prop_assert_eq!(group, before);
    }

    #[test]
    fn independent_double_toggle_round_trips(prefix in vec(0..IDS, 0..100), id in 0..IDS) {
        let mut group = independent_after(&prefix);
        let before = group.clone();
        group.toggle(id);
        group.toggle(id);
        prop_assert_eq!(group, before);
    }

    #[test]
    fn independent_toggle_flips_only_its_id(prefix in vec(0..IDS, 0..100), id in 0..IDS) {
        let before = independent_after(&prefix);
        let mut group = before.clone();
        group.toggle(id);
        for other in 0..IDS {
            if other == id {
                prop_assert_ne!(group.is_open(&other), before.is_open(&other));
            } else {
                prop_assert_eq!(group.is_open(&other), before.is_open(&other));
            }
        }
    }
}
