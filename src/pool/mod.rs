mod global;
mod object_source;
mod shared_pool;
mod unpooled;

pub use global::{batch_pool, configure_global_pools, stream_pool};
pub use object_source::ObjectSource;
pub use shared_pool::{DEFAULT_POOL_CAPACITY, SharedPool};
pub use unpooled::Unpooled;
