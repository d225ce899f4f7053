use crate::pool::ObjectSource;

/// Source that never reuses: every acquire allocates and every release drops.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpooled;

impl<T: Default> ObjectSource<T> for Unpooled {
    #[inline]
    fn acquire(&self) -> T {
        T::default()
    }

    #[inline]
    fn release(&self, _item: T) {}
}
