pub mod sampling;

pub use sampling::SamplingOptions;
