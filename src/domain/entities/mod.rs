pub mod coverage;
pub mod selection;
pub mod standard;
