pub mod health;
pub mod insight;
pub mod report;
