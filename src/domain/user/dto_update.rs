/// Partial update of a user's editable fields.
///
/// `Some(value)` means the client sent the field and it is applied as-is,
/// including empty strings. `None` leaves the stored value untouched.
/// The role is deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub full_name: Option<String>,
    pub personal_id: Option<String>,
    pub phone: Option<String>,
    pub work_type: Option<String>,
    /// Plain-text password; the repository is responsible for hashing it.
    pub password: Option<String>,
}
