//! Client for `/api/v1/operations`.

use crate::client::{parse_response, HttpClient};
use gateway_fakers::Faker;
use gateway_types::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery, GetOperationsResponse,
    GetOperationsSummaryResponse, MakeOperationRequest, MakeOperationResponse, OperationType,
    TransportError,
};
use reqwest::Response;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct OperationsGatewayHttpClient {
    http: HttpClient,
    faker: Arc<Faker>,
}

impl OperationsGatewayHttpClient {
    pub fn new(http: HttpClient, faker: Arc<Faker>) -> Self {
        Self { http, faker }
    }

    /// `GET /api/v1/operations/{operation_id}`
    pub async fn get_operation_api(&self, operation_id: &str) -> Result<Response, TransportError> {
        self.http
            .get(&format!("/api/v1/operations/{operation_id}"), None::<&()>)
            .await
    }

    /// `GET /api/v1/operations/operation-receipt/{operation_id}`
    pub async fn get_operation_receipt_api(
        &self,
        operation_id: &str,
    ) -> Result<Response, TransportError> {
        self.http
            .get(
                &format!("/api/v1/operations/operation-receipt/{operation_id}"),
                None::<&()>,
            )
            .await
    }

    /// `GET /api/v1/operations?accountId=...`
    pub async fn get_operations_api(
        &self,
        query: &GetOperationsQuery,
    ) -> Result<Response, TransportError> {
        self.http.get("/api/v1/operations", Some(query)).await
    }

    /// `GET /api/v1/operations/operations-summary?accountId=...`
    pub async fn get_operations_summary_api(
        &self,
        query: &GetOperationsQuery,
    ) -> Result<Response, TransportError> {
        self.http
            .get("/api/v1/operations/operations-summary", Some(query))
            .await
    }

    /// `POST /api/v1/operations/make-{type}-operation`
    pub async fn make_operation_api(
        &self,
        operation_type: OperationType,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        let path = format!("/api/v1/operations/{}", operation_type.make_endpoint());
        self.http.post(&path, request).await
    }

    pub async fn make_fee_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::Fee, request).await
    }

    pub async fn make_top_up_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::TopUp, request).await
    }

    pub async fn make_cashback_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::Cashback, request).await
    }

    pub async fn make_transfer_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::Transfer, request).await
    }

    pub async fn make_purchase_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::Purchase, request).await
    }

    pub async fn make_bill_payment_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::BillPayment, request).await
    }

    pub async fn make_cash_withdrawal_operation_api(
        &self,
        request: &MakeOperationRequest,
    ) -> Result<Response, TransportError> {
        self.make_operation_api(OperationType::CashWithdrawal, request).await
    }

    pub async fn get_operation(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationResponse, TransportError> {
        let response = self.get_operation_api(operation_id).await?;
        parse_response("GET /api/v1/operations/{operation_id}", response).await
    }

    pub async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationReceiptResponse, TransportError> {
        let response = self.get_operation_receipt_api(operation_id).await?;
        parse_response(
            "GET /api/v1/operations/operation-receipt/{operation_id}",
            response,
        )
        .await
    }

    pub async fn get_operations(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsResponse, TransportError> {
        let query = GetOperationsQuery {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_api(&query).await?;
        parse_response("GET /api/v1/operations", response).await
    }

    pub async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsSummaryResponse, TransportError> {
        let query = GetOperationsQuery {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_summary_api(&query).await?;
        parse_response("GET /api/v1/operations/operations-summary", response).await
    }

    /// Submit an operation of `operation_type` with fake status, amount and category.
    pub async fn make_operation(
        &self,
        operation_type: OperationType,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        let request = MakeOperationRequest::fake(&self.faker, operation_type, card_id, account_id);
        let response = self.make_operation_api(operation_type, &request).await?;
        let endpoint = format!("POST /api/v1/operations/{}", operation_type.make_endpoint());
        parse_response(&endpoint, response).await
    }

    pub async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::Fee, card_id, account_id).await
    }

    pub async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::TopUp, card_id, account_id).await
    }

    pub async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::Cashback, card_id, account_id).await
    }

    pub async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::Transfer, card_id, account_id).await
    }

    pub async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::Purchase, card_id, account_id).await
    }

    pub async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::BillPayment, card_id, account_id).await
    }

    pub async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        self.make_operation(OperationType::CashWithdrawal, card_id, account_id).await
    }
}
