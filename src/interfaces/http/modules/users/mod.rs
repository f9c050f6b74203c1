//! Users module — worker administration (create, edit, delete, list)

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
