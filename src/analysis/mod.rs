pub mod bbh;
pub mod conservation;
