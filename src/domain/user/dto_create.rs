use super::UserRole;

/// Fields accepted when creating a worker. Every field is optional;
/// absent values are stored as NULL.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkerDto {
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub work_type: Option<String>,
    pub password: Option<String>,
}

/// Insert request handed to the repository.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub work_type: Option<String>,
    /// Plain-text password; the repository is responsible for hashing it.
    pub password: Option<String>,
}

impl CreateUserDto {
    pub fn worker(dto: CreateWorkerDto) -> Self {
        Self {
            full_name: dto.full_name,
            personal_id: dto.personal_id,
            phone: dto.phone,
            role: UserRole::Worker,
            work_type: dto.work_type,
            password: dto.password,
        }
    }
}
