use crate::config::StatsConfig;
use crate::pool::ObjectSource;
use log::{debug, trace, warn};
use parking_lot::Mutex;
use std::any::type_name;

pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Thread-safe free list of idle instances.
///
/// Holds at most `capacity` idle instances; releases beyond that are dropped.
/// Instances are handed out as they were released, never reset.
#[derive(Debug)]
pub struct SharedPool<T> {
    idle: Mutex<Vec<T>>,
    capacity: usize,
}

impl<T: Default> Default for SharedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> SharedPool<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SharedPool {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn from_config(config: &StatsConfig) -> Self {
        Self::with_capacity(config.pool_capacity)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of instances currently waiting for reuse.
    pub fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    /// Drops every idle instance.
    pub fn clear(&self) {
        self.idle.lock().clear();
    }
}

impl<T: Default> ObjectSource<T> for SharedPool<T> {
    fn acquire(&self) -> T {
        let reused = self.idle.lock().pop();
        match reused {
            Some(item) => {
                trace!("reusing pooled {}", type_name::<T>());
                item
            }
            None => {
                debug!("pool empty, allocating {}", type_name::<T>());
                T::default()
            }
        }
    }

    fn release(&self, item: T) {
        let mut idle = self.idle.lock();
        if idle.len() < self.capacity {
            idle.push(item);
            trace!("released {} ({} idle)", type_name::<T>(), idle.len());
        } else {
            drop(idle);
            warn!(
                "pool full ({} idle), dropping released {}",
                self.capacity,
                type_name::<T>()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Tagged(u32);

    #[test]
    fn acquire_allocates_when_empty() {
        let pool: SharedPool<Tagged> = SharedPool::with_capacity(2);
        assert_eq!(pool.acquire(), Tagged(0));
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn released_instance_is_handed_back_untouched() {
        let pool = SharedPool::with_capacity(2);
        pool.release(Tagged(7));
        assert_eq!(pool.idle(), 1);
        assert_eq!(pool.acquire(), Tagged(7));
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn never_holds_more_than_capacity() {
        let pool = SharedPool::with_capacity(2);
        for i in 0..5 {
            pool.release(Tagged(i));
        }
        assert_eq!(pool.idle(), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn zero_capacity_drops_everything() {
        let pool = SharedPool::with_capacity(0);
        pool.release(Tagged(1));
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn clear_empties_the_free_list() {
        let pool = SharedPool::with_capacity(4);
        pool.release(Tagged(1));
        pool.release(Tagged(2));
        pool.clear();
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn from_config_uses_configured_capacity() {
        let cfg = StatsConfig {
            pool_capacity: 3,
            ..StatsConfig::default()
        };
        let pool: SharedPool<Tagged> = SharedPool::from_config(&cfg);
        assert_eq!(pool.capacity(), 3);
        assert_eq!(SharedPool::<Tagged>::new().capacity(), DEFAULT_POOL_CAPACITY);
    }
}
