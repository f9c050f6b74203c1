pub mod user;

pub use user::{
    CreateUserDto, CreateWorkerDto, GetWorkersDto, UpdateUserDto, User, UserRepositoryInterface,
    UserRole, WorkerSummary,
};

pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
