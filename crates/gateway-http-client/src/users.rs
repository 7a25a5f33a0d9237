//! Client for `/api/v1/users`.

use crate::client::{parse_response, HttpClient};
use gateway_fakers::Faker;
use gateway_types::{CreateUserRequest, CreateUserResponse, GetUserResponse, TransportError};
use reqwest::Response;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UsersGatewayHttpClient {
    http: HttpClient,
    faker: Arc<Faker>,
}

impl UsersGatewayHttpClient {
    pub fn new(http: HttpClient, faker: Arc<Faker>) -> Self {
        Self { http, faker }
    }

    /// `POST /api/v1/users`
    pub async fn create_user_api(
        &self,
        request: &CreateUserRequest,
    ) -> Result<Response, TransportError> {
        self.http.post("/api/v1/users", request).await
    }

    /// `GET /api/v1/users/{user_id}`
    pub async fn get_user_api(&self, user_id: &str) -> Result<Response, TransportError> {
        self.http
            .get(&format!("/api/v1/users/{user_id}"), None::<&()>)
            .await
    }

    /// Create a user from the given request.
    pub async fn create_user_with(
        &self,
        request: &CreateUserRequest,
    ) -> Result<CreateUserResponse, TransportError> {
        let response = self.create_user_api(request).await?;
        parse_response("POST /api/v1/users", response).await
    }

    /// Create a user with fake personal data.
    pub async fn create_user(&self) -> Result<CreateUserResponse, TransportError> {
        let request = CreateUserRequest::fake(&self.faker);
        self.create_user_with(&request).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<GetUserResponse, TransportError> {
        let response = self.get_user_api(user_id).await?;
        parse_response("GET /api/v1/users/{user_id}", response).await
    }
}
