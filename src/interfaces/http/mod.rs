//! HTTP REST API interfaces
//!
//! - `common`: response envelopes, error responder, JSON extractor
//! - `modules`: request handlers per resource plus cross-cutting middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
