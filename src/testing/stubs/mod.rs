pub mod stale_source;

pub use stale_source::StaleSource;
