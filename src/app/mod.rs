// Application layer: runs core operations with configured defaults and formats their results.

pub mod interactive;
pub mod report;
pub mod toolkit;
