//! Shared HTTP plumbing: response envelopes, the error responder and the JSON extractor

mod error;
mod json;
mod response;

pub use error::ApiError;
pub use json::ApiJson;
pub use response::{DeletedResponse, MessageResponse};
