pub mod runner;
pub mod tabular;
