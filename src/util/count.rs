//! Counters shared between test values and the assertions made about them.

use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter each time it, or any clone of it, is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    drops: Rc<Cell<usize>>,
    pub id: usize,
}

impl CountedDrop {
    pub fn new(counter: &Rc<Cell<usize>>, id: usize) -> CountedDrop {
        CountedDrop {
            drops: Rc::clone(counter),
            id,
        }
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Counts invocations of a callback, so tests can observe how far a scan progressed.
#[derive(Debug, Default)]
pub struct CallCount(Cell<usize>);

impl CallCount {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
