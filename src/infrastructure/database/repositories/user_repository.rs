use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, GetWorkersDto, UpdateUserDto, User,
    UserRepositoryInterface, UserRole, WorkerSummary,
};
use crate::infrastructure::crypto::password::{hash_password, DEFAULT_COST};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
    bcrypt_cost: u32,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            bcrypt_cost: DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// bcrypt is CPU-bound, so hashing runs on the blocking pool.
    async fn hash(&self, password: Option<String>) -> DomainResult<Option<String>> {
        let Some(password) = password else {
            return Ok(None);
        };
        let cost = self.bcrypt_cost;

        let hashed = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| DomainError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;

        Ok(Some(hashed))
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::SuperAdmin => UserRole::SuperAdmin,
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Worker => UserRole::Worker,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::SuperAdmin => user::UserRole::SuperAdmin,
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Worker => user::UserRole::Worker,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        full_name: model.full_name,
        personal_id: model.personal_id,
        phone: model.phone,
        role: entity_role_to_domain(model.role),
        work_type: model.work_type,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn worker_row_to_domain(row: user::WorkerRow) -> WorkerSummary {
    WorkerSummary {
        id: row.id,
        full_name: row.full_name,
        personal_id: row.personal_id,
        phone: row.phone,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Unique-index violations on `phone` are reported as the duplicate-user conflict.
fn write_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict("The user already exists".to_string())
        }
        _ => DomainError::from(e),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for SeaOrmUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let now = Utc::now();

        let password_hash = self.hash(dto.password).await?;

        let new_user = user::ActiveModel {
            id: NotSet,
            full_name: Set(dto.full_name),
            personal_id: Set(dto.personal_id),
            phone: Set(dto.phone),
            role: Set(domain_role_to_entity(dto.role)),
            work_type: Set(dto.work_type),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_user.insert(&self.db).await.map_err(write_err)?;
        Ok(user_model_to_domain(model))
    }

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_phone(&self, phone: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Phone.eq(phone))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_super_admin(&self) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Role.eq(user::UserRole::SuperAdmin))
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn list_workers(&self, dto: GetWorkersDto) -> DomainResult<Vec<WorkerSummary>> {
        let rows = user::Entity::find()
            .select_only()
            .columns(user::WORKER_COLUMNS)
            .filter(user::Column::Role.ne(user::UserRole::SuperAdmin))
            .order_by_asc(user::Column::Id)
            .offset(dto.page.skip())
            .limit(dto.page.limit())
            .into_model::<user::WorkerRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(worker_row_to_domain).collect())
    }

    async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let existing = user::Entity::find_by_id(id).one(&self.db).await?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let password_hash = self.hash(dto.password).await?;

        let mut active: user::ActiveModel = existing.into();

        if let Some(full_name) = dto.full_name {
            active.full_name = Set(Some(full_name));
        }
        if let Some(personal_id) = dto.personal_id {
            active.personal_id = Set(Some(personal_id));
        }
        if let Some(phone) = dto.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(work_type) = dto.work_type {
            active.work_type = Set(Some(work_type));
        }
        if let Some(hash) = password_hash {
            active.password_hash = Set(Some(hash));
        }

        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(write_err)?;

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete_user(&self, id: i32) -> DomainResult<()> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::user_not_found(id));
        }

        Ok(())
    }
}
