extern crate std;

use std::cell::Cell;
use std::rc::Rc;

mod list;

/// A payload that counts how many times values sharing its counter were dropped.
#[derive(Debug)]
struct Tracked {
    id: u32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Tracked {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
