//! User records and requests.

use gateway_fakers::Faker;
use serde::{Deserialize, Serialize};

/// A user as returned by the users service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

/// Body of `POST /api/v1/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

impl CreateUserRequest {
    /// Request filled with fake personal data.
    pub fn fake(faker: &Faker) -> Self {
        Self {
            email: faker.email(),
            last_name: faker.last_name(),
            first_name: faker.first_name(),
            middle_name: faker.middle_name(),
            phone_number: faker.phone_number(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: User,
}
