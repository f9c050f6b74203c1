//! Worker administration service — application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service; every
//! business-rule failure is reported as a typed [`DomainError`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    CreateUserDto, CreateWorkerDto, DomainError, DomainResult, GetWorkersDto, UpdateUserDto,
    User, UserRepositoryInterface, WorkerSummary,
};
use crate::shared::PageRequest;

/// Worker service.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer; `R` may be a trait object.
pub struct WorkerService<R: UserRepositoryInterface + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepositoryInterface + ?Sized> WorkerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a worker account.
    ///
    /// Fails with `Conflict` if another user already has the same phone.
    /// The role is always `worker`.
    pub async fn create_worker(&self, dto: CreateWorkerDto) -> DomainResult<User> {
        if let Some(phone) = dto.phone.as_deref() {
            if self.repo.get_user_by_phone(phone).await?.is_some() {
                warn!(phone, "Rejected worker with duplicate phone");
                return Err(DomainError::Conflict("The user already exists".into()));
            }
        }

        let user = self.repo.create_user(CreateUserDto::worker(dto)).await?;

        info!(user_id = user.id, "Worker created");
        Ok(user)
    }

    /// Apply a partial update to any user. The role is never changed.
    pub async fn edit_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<User> {
        if self.repo.get_user_by_id(id).await?.is_none() {
            return Err(DomainError::user_not_found(id));
        }

        let user = self
            .repo
            .update_user(id, dto)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete a worker. Admin accounts are refused with `Forbidden`.
    /// Returns the id of the removed user.
    pub async fn delete_worker(&self, id: i32) -> DomainResult<i32> {
        let user = self
            .repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if !user.is_deletable() {
            warn!(user_id = id, role = user.role.as_str(), "Refused to delete admin account");
            return Err(DomainError::Forbidden(
                "Admin accounts cannot be deleted".into(),
            ));
        }

        self.repo.delete_user(user.id).await?;

        info!(user_id = id, "Worker deleted");
        Ok(user.id)
    }

    /// One page of users, excluding the protected record, ordered by id.
    pub async fn fetch_workers(&self, page: PageRequest) -> DomainResult<Vec<WorkerSummary>> {
        self.repo.list_workers(GetWorkersDto { page }).await
    }
}
