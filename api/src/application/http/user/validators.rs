use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_email() {
        let request = CreateUserRequest {
            name: "Ada".to_string(),
            email: "ada-at-example".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn accepts_valid_user() {
        let request = CreateUserRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert!(request.validate().is_ok());
    }
}
