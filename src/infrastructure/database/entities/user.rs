//! User entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum UserRole {
    #[sea_orm(string_value = "superadmin")]
    SuperAdmin,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "worker")]
    Worker,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Worker
    }
}

/// User model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    #[sea_orm(unique)]
    pub phone: Option<String>,
    pub role: UserRole,
    pub work_type: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Listing projection: every column except the credential, role and work type.
#[derive(Debug, Clone, FromQueryResult)]
pub struct WorkerRow {
    pub id: i32,
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns selected into [`WorkerRow`]
pub const WORKER_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::FullName,
    Column::PersonalId,
    Column::Phone,
    Column::CreatedAt,
    Column::UpdatedAt,
];
