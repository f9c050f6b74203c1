//! Response envelopes
//!
//! Every body carries a boolean `success` flag next to its payload.
//! Errors use [`MessageResponse`] with `success: false`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"success": bool, "message": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Body returned after a successful delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
    /// Id of the removed user
    pub id: i32,
}
