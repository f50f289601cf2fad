pub mod dismissal;
pub mod entities;
pub mod interaction;
