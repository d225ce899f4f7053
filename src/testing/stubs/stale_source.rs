use crate::pool::ObjectSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Object source that always hands out a copy of a dirty template.
///
/// Used to check that accumulators reset themselves on acquisition instead of
/// trusting the pool.
pub struct StaleSource<T: Clone> {
    template: T,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl<T: Clone> StaleSource<T> {
    pub fn new(template: T) -> Self {
        Self {
            template,
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }
}

impl<T: Clone> ObjectSource<T> for StaleSource<T> {
    fn acquire(&self) -> T {
        self.acquired.fetch_add(1, Ordering::Relaxed);
        self.template.clone()
    }

    fn release(&self, _item: T) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }
}
