/// Source of reusable instances.
///
/// `acquire` may hand back a previously released instance in whatever state it
/// was left in; callers are responsible for resetting it. After `release` the
/// caller no longer owns the instance.
pub trait ObjectSource<T> {
    fn acquire(&self) -> T;

    fn release(&self, item: T);
}
