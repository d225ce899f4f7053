pub mod fixtures;
pub mod series;
pub mod stubs;
