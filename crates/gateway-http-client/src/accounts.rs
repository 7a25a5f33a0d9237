//! Client for `/api/v1/accounts`.

use crate::client::{parse_response, HttpClient};
use gateway_types::{
    AccountType, GetAccountsQuery, GetAccountsResponse, OpenAccountRequest, OpenAccountResponse,
    TransportError,
};
use reqwest::Response;

#[derive(Debug, Clone)]
pub struct AccountsGatewayHttpClient {
    http: HttpClient,
}

impl AccountsGatewayHttpClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// `GET /api/v1/accounts?userId=...`
    pub async fn get_accounts_api(
        &self,
        query: &GetAccountsQuery,
    ) -> Result<Response, TransportError> {
        self.http.get("/api/v1/accounts", Some(query)).await
    }

    /// `POST /api/v1/accounts/open-{type}-account`
    pub async fn open_account_api(
        &self,
        account_type: AccountType,
        request: &OpenAccountRequest,
    ) -> Result<Response, TransportError> {
        let path = format!("/api/v1/accounts/{}", account_type.open_endpoint());
        self.http.post(&path, request).await
    }

    pub async fn open_deposit_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<Response, TransportError> {
        self.open_account_api(AccountType::Deposit, request).await
    }

    pub async fn open_savings_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<Response, TransportError> {
        self.open_account_api(AccountType::Savings, request).await
    }

    pub async fn open_debit_card_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<Response, TransportError> {
        self.open_account_api(AccountType::DebitCard, request).await
    }

    pub async fn open_credit_card_account_api(
        &self,
        request: &OpenAccountRequest,
    ) -> Result<Response, TransportError> {
        self.open_account_api(AccountType::CreditCard, request).await
    }

    pub async fn get_accounts(&self, user_id: &str) -> Result<GetAccountsResponse, TransportError> {
        let query = GetAccountsQuery {
            user_id: user_id.to_string(),
        };
        let response = self.get_accounts_api(&query).await?;
        parse_response("GET /api/v1/accounts", response).await
    }

    /// Open an account of `account_type` for the user.
    pub async fn open_account(
        &self,
        account_type: AccountType,
        user_id: &str,
    ) -> Result<OpenAccountResponse, TransportError> {
        let request = OpenAccountRequest {
            user_id: user_id.to_string(),
        };
        let response = self.open_account_api(account_type, &request).await?;
        let endpoint = format!("POST /api/v1/accounts/{}", account_type.open_endpoint());
        parse_response(&endpoint, response).await
    }

    pub async fn open_deposit_account(
        &self,
        user_id: &str,
    ) -> Result<OpenAccountResponse, TransportError> {
        self.open_account(AccountType::Deposit, user_id).await
    }

    pub async fn open_savings_account(
        &self,
        user_id: &str,
    ) -> Result<OpenAccountResponse, TransportError> {
        self.open_account(AccountType::Savings, user_id).await
    }

    pub async fn open_debit_card_account(
        &self,
        user_id: &str,
    ) -> Result<OpenAccountResponse, TransportError> {
        self.open_account(AccountType::DebitCard, user_id).await
    }

    pub async fn open_credit_card_account(
        &self,
        user_id: &str,
    ) -> Result<OpenAccountResponse, TransportError> {
        self.open_account(AccountType::CreditCard, user_id).await
    }
}
