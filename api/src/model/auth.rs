use garde::Validate;
use kernel::model::auth::event::VerifyCredentials;
use kernel::model::user::event::CreateUser;
use shared::error::{AppError, AppResult};

use crate::form::FieldMap;

#[derive(Debug, Validate)]
pub struct SignupRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub roll_no: String,
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone_number: String,
    #[garde(length(min = 1))]
    pub department: String,
    #[garde(length(min = 1))]
    pub year: String,
    #[garde(length(min = 1))]
    pub password: String,
}

impl SignupRequest {
    pub fn from_fields(fields: &FieldMap) -> AppResult<Self> {
        let name = fields.get("name");
        let roll_no = fields.get("roll_no");
        let email = fields.get("email");
        let phone_number = fields.get("phone_number");
        let department = fields.get("department");
        let year = fields.get("year");
        let password = fields.get("password");

        if [name, roll_no, email, phone_number, department, year, password]
            .iter()
            .any(|v| v.is_empty())
        {
            return Err(AppError::MissingInput("Missing required fields".into()));
        }

        Ok(Self {
            name: name.into(),
            roll_no: roll_no.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            department: department.into(),
            year: year.into(),
            password: password.into(),
        })
    }
}

impl From<SignupRequest> for CreateUser {
    fn from(value: SignupRequest) -> Self {
        let SignupRequest {
            name,
            roll_no,
            email,
            phone_number,
            department,
            year,
            password,
        } = value;
        Self {
            name,
            roll_no,
            email,
            phone_number,
            department,
            year,
            password,
        }
    }
}

pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// No presence gate here: empty credentials simply never match a row.
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            email: fields.get("email").into(),
            password: fields.get("password").into(),
        }
    }
}

impl From<LoginRequest> for VerifyCredentials {
    fn from(value: LoginRequest) -> Self {
        let LoginRequest { email, password } = value;
        Self { email, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::decode;

    #[test]
    fn test_signup_rejects_any_empty_field() {
        let fields =
            decode("name=Priya&roll_no=&email=p%40c.edu&phone_number=1&department=CSE&year=3&password=pw")
                .unwrap();
        assert!(matches!(
            SignupRequest::from_fields(&fields),
            Err(AppError::MissingInput(_))
        ));
    }

    #[test]
    fn test_signup_accepts_complete_submission() {
        let fields = decode(
            "name=Priya&roll_no=21BCE1042&email=p%40c.edu&phone_number=1&department=CSE&year=3&password=pw",
        )
        .unwrap();
        let req = SignupRequest::from_fields(&fields).unwrap();
        assert_eq!(req.name, "Priya");
        assert_eq!(req.email, "p@c.edu");
    }
}
