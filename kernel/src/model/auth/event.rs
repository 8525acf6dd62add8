/// Login attempt: matched verbatim against the stored email and password.
#[derive(Debug)]
pub struct VerifyCredentials {
    pub email: String,
    pub password: String,
}
