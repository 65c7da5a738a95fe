use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
    let runs = Rc::new(Cell::new(0));
    let make = {
        let runs = Rc::clone(&runs);
        move || {
            let runs = Rc::clone(&runs);
            Box::new(move || runs.set(runs.get() + 1)) as Box<dyn FnOnce()>
        }
    };
    (runs, make)
}

#[test]
fn owner_cleanup_ends_scope_and_runs_releases() {
    let (runs, release) = counter();
    let owner = Owner::new();
    let lifetime = owner.with(|| {
        let scope = MountScope::new();
        scope.defer(release());
        scope.defer(release());
        assert_eq!(runs.get(), 0);
        scope.lifetime().clone()
    });

    owner.cleanup();

    assert!(!lifetime.is_alive());
    assert_eq!(runs.get(), 2);
}

#[test]
fn end_runs_each_release_once() {
    let (runs, release) = counter();
    let owner = Owner::new();
    owner.with(|| {
        let scope = MountScope::detached();
        scope.defer(release());
        scope.end();
        scope.end();
        assert!(!scope.is_alive());
        assert_eq!(runs.get(), 1);
    });
}

#[test]
fn defer_after_end_runs_immediately() {
    let (runs, release) = counter();
    let owner = Owner::new();
    owner.with(|| {
        let scope = MountScope::detached();
        scope.end();
        scope.defer(release());
        assert_eq!(runs.get(), 1);
    });
}

#[test]
fn clones_share_one_scope() {
    let (runs, release) = counter();
    let owner = Owner::new();
    owner.with(|| {
        let scope = MountScope::detached();
        let handle = scope.clone();
        handle.defer(release());
        scope.end();
        assert!(!handle.is_alive());
        assert_eq!(runs.get(), 1);
    });
}
