use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::user;
use crate::errors::validation;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub first_name: String,
    #[validate(custom(function = "validation::required"), length(max = 64))]
    pub last_name: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(custom(function = "validation::required"), email, length(max = 64))]
    pub email: String,
    #[validate(custom(function = "validation::required"), length(min = 8, max = 64))]
    pub password: String,
    #[validate(custom(function = "validation::required"))]
    pub password_confirmation: String,
}

impl RegisterRequest {
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirmation
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(custom(function = "validation::required"), email)]
    pub email: String,
    #[validate(custom(function = "validation::required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: user::Model,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
