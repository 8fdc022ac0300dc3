//! HTTP request handlers organized by domain.

pub mod artist_handler;
pub mod drink_handler;
pub mod show_handler;
pub mod trivia_handler;
pub mod venue_handler;

pub use artist_handler::*;
pub use drink_handler::*;
pub use show_handler::*;
pub use trivia_handler::*;
pub use venue_handler::*;
