pub mod clustal;

pub use clustal::*;
