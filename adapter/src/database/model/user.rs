use kernel::model::user::AuthenticatedUser;

#[derive(sqlx::FromRow)]
pub struct UserAuthRow {
    pub name: String,
    pub role: String,
}

impl From<UserAuthRow> for AuthenticatedUser {
    fn from(value: UserAuthRow) -> Self {
        let UserAuthRow { name, role } = value;
        Self {
            name,
            // Unknown role strings count as plain users.
            role: role.parse().unwrap_or_default(),
        }
    }
}
