pub mod error;
pub mod launcher;
