//! Response models for API endpoints.

pub mod api;
pub mod directory;
pub mod drink;
pub mod pagination;
pub mod trivia;

pub use api::*;
pub use directory::*;
pub use drink::*;
pub use pagination::*;
pub use trivia::*;
