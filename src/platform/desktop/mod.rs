pub mod paths;
pub mod scroll;
