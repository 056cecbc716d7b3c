pub mod errors;
pub mod export;
pub mod models;
pub mod parser;
pub mod session;
pub mod tasks;

#[cfg(test)]
mod session_tests;

pub use errors::CardForgeError;
pub use models::{CardSet, Flashcard};
