//! Request models for API endpoints.

pub mod directory;
pub mod drink;
pub mod trivia;

pub use directory::*;
pub use drink::*;
pub use trivia::*;
