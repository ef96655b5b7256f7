pub mod errors;
pub mod flags;
