use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many times it (or any of its clones) has been cloned. Used to check
/// that accessors borrow where they can and copy only what they return.
#[derive(Debug)]
pub struct CountedClone {
    pub id: usize,
    clones: Rc<Cell<usize>>,
}

impl CountedClone {
    pub fn new(id: usize, clones: &Rc<Cell<usize>>) -> CountedClone {
        CountedClone {
            id,
            clones: Rc::clone(clones),
        }
    }

    /// Creates `len` values with ascending ids, sharing one counter.
    pub fn many(len: usize) -> (Vec<CountedClone>, Rc<Cell<usize>>) {
        let clones = Rc::new(Cell::new(0));
        let items = (0..len).map(|id| CountedClone::new(id, &clones)).collect();
        (items, clones)
    }
}

impl Clone for CountedClone {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        CountedClone {
            id: self.id,
            clones: Rc::clone(&self.clones),
        }
    }
}

impl PartialEq for CountedClone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
