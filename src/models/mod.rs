//! Data models organized by type.

pub mod claims;
pub mod directory;
pub mod drink;
pub mod requests;
pub mod responses;
pub mod trivia;

pub use claims::*;
pub use directory::*;
pub use drink::*;
pub use requests::*;
pub use responses::*;
pub use trivia::*;
