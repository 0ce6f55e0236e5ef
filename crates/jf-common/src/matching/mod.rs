pub mod education;
pub mod engine;
pub mod report;
pub mod salary;
pub mod similarity;

pub use engine::{MatchEngine, MatchingConfig};
pub use report::{MatchReport, Verdict};
