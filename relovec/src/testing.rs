//! Instrumented element types for the unit tests.
//!
//! [`Brittle`] counts its live instances and can be told to panic on the k-th
//! `clone`, `default` or `relocate`.

use crate::relocate::Relocate;
use std::cell::Cell;
use std::thread::LocalKey;

std::thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CLONES_LEFT: Cell<usize> = const { Cell::new(usize::MAX) };
    static DEFAULTS_LEFT: Cell<usize> = const { Cell::new(usize::MAX) };
    static RELOCATES_LEFT: Cell<usize> = const { Cell::new(usize::MAX) };
}

fn reset() {
    LIVE.with(|c| c.set(0));
    CLONES_LEFT.with(|c| c.set(usize::MAX));
    DEFAULTS_LEFT.with(|c| c.set(usize::MAX));
    RELOCATES_LEFT.with(|c| c.set(usize::MAX));
}

/// Resets every counter and budget when created and when dropped.
pub struct Scope(());

pub fn scope() -> Scope {
    reset();
    Scope(())
}

impl Drop for Scope {
    fn drop(&mut self) {
        reset();
    }
}

/// Number of `Brittle` values constructed and not yet dropped on this thread.
pub fn live() -> isize {
    LIVE.with(Cell::get)
}

/// The next `n` clones succeed; the one after panics.
pub fn set_clone_budget(n: usize) {
    CLONES_LEFT.with(|c| c.set(n));
}

pub fn set_default_budget(n: usize) {
    DEFAULTS_LEFT.with(|c| c.set(n));
}

pub fn set_relocate_budget(n: usize) {
    RELOCATES_LEFT.with(|c| c.set(n));
}

fn spend(budget: &'static LocalKey<Cell<usize>>, what: &str) {
    budget.with(|left| match left.get() {
        0 => panic!("{what} failed"),
        n => left.set(n - 1),
    });
}

#[derive(Debug, PartialEq, Eq)]
pub struct Brittle(pub i32);

impl Brittle {
    pub fn new(value: i32) -> Self {
        LIVE.with(|c| c.set(c.get() + 1));
        Brittle(value)
    }
}

impl Clone for Brittle {
    fn clone(&self) -> Self {
        spend(&CLONES_LEFT, "clone");
        Brittle::new(self.0)
    }
}

impl Default for Brittle {
    fn default() -> Self {
        spend(&DEFAULTS_LEFT, "default");
        Brittle::new(0)
    }
}

impl Relocate for Brittle {
    fn relocate(src: &mut Self) -> Self {
        spend(&RELOCATES_LEFT, "relocate");
        Brittle::new(core::mem::take(&mut src.0))
    }
}

impl Drop for Brittle {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
    }
}
