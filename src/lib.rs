pub mod analysis;
pub mod blast;
pub mod hits;
pub mod msa;

pub mod post;
pub mod report;
pub mod stats;
