mod accumulator;
mod batch;
mod stream_accumulator;
mod streaks;

pub use accumulator::Accumulator;
pub use batch::BatchAccumulator;
pub use stream_accumulator::StreamAccumulator;
pub use streaks::Streaks;
