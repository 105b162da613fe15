//! HTTP handlers for pets, adoption requests, and health checks.

pub mod adoptions;
pub mod health;
pub mod pets;
pub use adoptions::*;
pub use health::*;
pub use pets::*;
