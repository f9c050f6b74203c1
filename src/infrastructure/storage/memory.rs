//! In-memory user repository for development and testing

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, GetWorkersDto, UpdateUserDto, User,
    UserRepositoryInterface, UserRole, WorkerSummary,
};

/// In-memory user store.
///
/// Passwords are kept verbatim in `password_hash`; nothing here is persisted.
/// The phone index mirrors the unique index of the SQL schema.
pub struct InMemoryUserRepository {
    users: DashMap<i32, User>,
    phones: DashMap<String, i32>,
    id_counter: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            phones: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Insert a user with an arbitrary role, bypassing the admin API.
    pub fn insert_with_role(&self, role: UserRole, phone: &str) -> User {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let user = User {
            id,
            full_name: Some(format!("{} {}", role.as_str(), id)),
            personal_id: None,
            phone: Some(phone.to_string()),
            role,
            work_type: None,
            password_hash: None,
            created_at: now,
            updated_at: now,
        };
        self.phones.insert(phone.to_string(), id);
        self.users.insert(id, user.clone());
        user
    }

    fn claim_phone(&self, phone: &str, id: i32) -> DomainResult<()> {
        match self.phones.entry(phone.to_string()) {
            Entry::Occupied(e) if *e.get() != id => {
                Err(DomainError::Conflict("The user already exists".into()))
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(e) => {
                e.insert(id);
                Ok(())
            }
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        if let Some(phone) = dto.phone.as_deref() {
            self.claim_phone(phone, id)?;
        }

        let now = Utc::now();
        let user = User {
            id,
            full_name: dto.full_name,
            personal_id: dto.personal_id,
            phone: dto.phone,
            role: dto.role,
            work_type: dto.work_type,
            password_hash: dto.password,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn get_user_by_phone(&self, phone: &str) -> DomainResult<Option<User>> {
        let Some(id) = self.phones.get(phone).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn get_super_admin(&self) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.is_protected())
            .map(|u| u.value().clone()))
    }

    async fn list_workers(&self, dto: GetWorkersDto) -> DomainResult<Vec<WorkerSummary>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|u| !u.is_protected())
            .map(|u| u.value().clone())
            .collect();
        users.sort_by_key(|u| u.id);

        Ok(users
            .into_iter()
            .skip(usize::try_from(dto.page.skip()).unwrap_or(usize::MAX))
            .take(usize::try_from(dto.page.limit()).unwrap_or(usize::MAX))
            .map(WorkerSummary::from)
            .collect())
    }

    async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let Some(existing) = self.users.get(&id).map(|u| u.clone()) else {
            return Ok(None);
        };

        if let Some(phone) = dto.phone.as_deref() {
            self.claim_phone(phone, id)?;
            if let Some(old) = existing.phone.as_deref().filter(|old| *old != phone) {
                self.phones.remove(old);
            }
        }

        let mut user = existing;
        if let Some(full_name) = dto.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(personal_id) = dto.personal_id {
            user.personal_id = Some(personal_id);
        }
        if let Some(phone) = dto.phone {
            user.phone = Some(phone);
        }
        if let Some(work_type) = dto.work_type {
            user.work_type = Some(work_type);
        }
        if let Some(password) = dto.password {
            user.password_hash = Some(password);
        }
        user.updated_at = Utc::now();

        self.users.insert(id, user.clone());
        Ok(Some(user))
    }

    async fn delete_user(&self, id: i32) -> DomainResult<()> {
        let (_, user) = self
            .users
            .remove(&id)
            .ok_or_else(|| DomainError::user_not_found(id))?;
        if let Some(phone) = user.phone {
            self.phones.remove(&phone);
        }
        Ok(())
    }
}
