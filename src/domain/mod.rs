pub mod insight;
pub mod report;
pub mod shared;
