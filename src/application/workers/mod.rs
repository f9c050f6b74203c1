//! Workers module — administrative management of user accounts
//!
//! Contains the `WorkerService` which implements the four admin use-cases:
//! create worker, edit user, delete worker, list workers.

pub mod service;

pub use service::WorkerService;
