pub mod density;
pub mod entropy;
pub mod regions;

pub use density::*;
pub use entropy::*;
pub use regions::*;
