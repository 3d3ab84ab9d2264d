pub mod common;
pub mod executable;
