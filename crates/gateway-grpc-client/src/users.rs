//! Client for `contracts.services.gateway.users.UsersGatewayService`.

use crate::client::{decode_error, GrpcChannel};
use crate::convert::required;
use crate::proto::users as pb;
use gateway_fakers::Faker;
use gateway_types::{CreateUserRequest, CreateUserResponse, GetUserResponse, TransportError};
use std::sync::Arc;

const CREATE_USER: &str = "/contracts.services.gateway.users.UsersGatewayService/CreateUser";
const GET_USER: &str = "/contracts.services.gateway.users.UsersGatewayService/GetUser";

#[derive(Debug, Clone)]
pub struct UsersGatewayGrpcClient {
    channel: GrpcChannel,
    faker: Arc<Faker>,
}

impl UsersGatewayGrpcClient {
    pub fn new(channel: GrpcChannel, faker: Arc<Faker>) -> Self {
        Self { channel, faker }
    }

    pub async fn create_user_api(
        &self,
        request: pb::CreateUserRequest,
    ) -> Result<pb::CreateUserResponse, TransportError> {
        self.channel.unary(CREATE_USER, request).await
    }

    pub async fn get_user_api(
        &self,
        request: pb::GetUserRequest,
    ) -> Result<pb::GetUserResponse, TransportError> {
        self.channel.unary(GET_USER, request).await
    }

    /// Create a user from an explicit request.
    pub async fn create_user_with(
        &self,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, TransportError> {
        let response = self.create_user_api(request.into()).await?;
        let user = required(response.user, "user").map_err(|e| decode_error(CREATE_USER, e))?;
        Ok(CreateUserResponse { user: user.into() })
    }

    /// Create a user with fake personal data.
    pub async fn create_user(&self) -> Result<CreateUserResponse, TransportError> {
        self.create_user_with(CreateUserRequest::fake(&self.faker))
            .await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<GetUserResponse, TransportError> {
        let request = pb::GetUserRequest {
            id: user_id.to_string(),
        };
        let response = self.get_user_api(request).await?;
        let user = required(response.user, "user").map_err(|e| decode_error(GET_USER, e))?;
        Ok(GetUserResponse { user: user.into() })
    }
}
