use async_trait::async_trait;

use super::{CreateUserDto, GetWorkersDto, UpdateUserDto, User, WorkerSummary};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Insert a new user. A duplicate phone yields `DomainError::Conflict`.
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn get_user_by_phone(&self, phone: &str) -> DomainResult<Option<User>>;
    async fn get_super_admin(&self) -> DomainResult<Option<User>>;

    /// Every user except the protected record, ordered by ascending id.
    async fn list_workers(&self, dto: GetWorkersDto) -> DomainResult<Vec<WorkerSummary>>;

    /// Apply the present fields of `dto`. Returns `None` if the user does not exist.
    async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>>;
    async fn delete_user(&self, id: i32) -> DomainResult<()>;
}
