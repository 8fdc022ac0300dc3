//! Custom field validators and validation helpers.

pub mod common;
pub mod directory;
pub mod drink;

pub use common::*;
pub use directory::*;
pub use drink::*;
