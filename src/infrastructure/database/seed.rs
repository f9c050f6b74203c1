//! Startup seeding of the protected super-admin account

use tracing::info;

use crate::domain::{CreateUserDto, DomainResult, User, UserRepositoryInterface, UserRole};

/// Credentials of the protected account created on first start
#[derive(Debug, Clone)]
pub struct SuperAdminSeed {
    pub full_name: String,
    pub phone: String,
    pub password: String,
}

/// Create the super-admin if none exists yet. Returns the existing or new account.
pub async fn ensure_super_admin<R>(repo: &R, seed: &SuperAdminSeed) -> DomainResult<User>
where
    R: UserRepositoryInterface + ?Sized,
{
    if let Some(existing) = repo.get_super_admin().await? {
        return Ok(existing);
    }

    info!("Creating super-admin account...");

    let admin = repo
        .create_user(CreateUserDto {
            full_name: Some(seed.full_name.clone()),
            personal_id: None,
            phone: Some(seed.phone.clone()),
            role: UserRole::SuperAdmin,
            work_type: None,
            password: Some(seed.password.clone()),
        })
        .await?;

    info!(user_id = admin.id, phone = %seed.phone, "Super-admin created");
    info!("Please change the super-admin password immediately!");
    Ok(admin)
}
