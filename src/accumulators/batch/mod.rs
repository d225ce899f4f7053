mod batch_accumulator;
mod pairwise;

pub use batch_accumulator::BatchAccumulator;
