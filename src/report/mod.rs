pub mod render;
pub mod runner;
pub mod steps;

pub use runner::{Report, StepOutcome, StepOutput, StepRecord, run};
pub use steps::{Operation, Step};
