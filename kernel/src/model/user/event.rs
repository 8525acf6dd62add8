/// Signup payload. The role is not part of it; the schema defaults new
/// accounts to plain users.
pub struct CreateUser {
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub year: String,
    pub password: String,
}
