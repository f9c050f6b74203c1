use chrono::{DateTime, Utc};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// The single protected account seeded at startup.
    SuperAdmin,
    Admin,
    #[default]
    Worker,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "superadmin",
            UserRole::Admin => "admin",
            UserRole::Worker => "worker",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin | UserRole::Admin)
    }
}

/// User model
#[derive(Clone, Debug)]
pub struct User {
    pub id: i32,
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub work_type: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The protected record never shows up in listings and can never be deleted.
    pub fn is_protected(&self) -> bool {
        self.role == UserRole::SuperAdmin
    }

    /// Only non-admin accounts may be removed through the admin API.
    pub fn is_deletable(&self) -> bool {
        !self.role.is_admin()
    }
}

/// Redacted listing row: no credential, role or work type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerSummary {
    pub id: i32,
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for WorkerSummary {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            personal_id: u.personal_id,
            phone: u.phone,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
