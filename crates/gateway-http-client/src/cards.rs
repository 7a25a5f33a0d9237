//! Client for `/api/v1/cards`.

use crate::client::{parse_response, HttpClient};
use gateway_types::{CardType, IssueCardRequest, IssueCardResponse, TransportError};
use reqwest::Response;

#[derive(Debug, Clone)]
pub struct CardsGatewayHttpClient {
    http: HttpClient,
}

fn issue_path(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Virtual => "/api/v1/cards/issue-virtual-card",
        CardType::Physical => "/api/v1/cards/issue-physical-card",
    }
}

impl CardsGatewayHttpClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// `POST /api/v1/cards/issue-virtual-card`
    pub async fn issue_virtual_card_api(
        &self,
        request: &IssueCardRequest,
    ) -> Result<Response, TransportError> {
        self.http.post(issue_path(CardType::Virtual), request).await
    }

    /// `POST /api/v1/cards/issue-physical-card`
    pub async fn issue_physical_card_api(
        &self,
        request: &IssueCardRequest,
    ) -> Result<Response, TransportError> {
        self.http.post(issue_path(CardType::Physical), request).await
    }

    /// Issue a card of `card_type` on the account.
    pub async fn issue_card(
        &self,
        card_type: CardType,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssueCardResponse, TransportError> {
        let request = IssueCardRequest {
            user_id: user_id.to_string(),
            account_id: account_id.to_string(),
        };
        let response = match card_type {
            CardType::Virtual => self.issue_virtual_card_api(&request).await?,
            CardType::Physical => self.issue_physical_card_api(&request).await?,
        };
        parse_response(&format!("POST {}", issue_path(card_type)), response).await
    }

    pub async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssueCardResponse, TransportError> {
        self.issue_card(CardType::Virtual, user_id, account_id).await
    }

    pub async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssueCardResponse, TransportError> {
        self.issue_card(CardType::Physical, user_id, account_id).await
    }
}
