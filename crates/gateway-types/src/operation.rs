//! Operation records and requests.

use gateway_fakers::{FakeEnum, Faker};
use serde::{Deserialize, Serialize};

/// Kinds of operation the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Fee,
    TopUp,
    Purchase,
    Cashback,
    Transfer,
    BillPayment,
    CashWithdrawal,
}

impl OperationType {
    pub const ALL: [OperationType; 7] = [
        OperationType::Fee,
        OperationType::TopUp,
        OperationType::Purchase,
        OperationType::Cashback,
        OperationType::Transfer,
        OperationType::BillPayment,
        OperationType::CashWithdrawal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Fee => "FEE",
            OperationType::TopUp => "TOP_UP",
            OperationType::Purchase => "PURCHASE",
            OperationType::Cashback => "CASHBACK",
            OperationType::Transfer => "TRANSFER",
            OperationType::BillPayment => "BILL_PAYMENT",
            OperationType::CashWithdrawal => "CASH_WITHDRAWAL",
        }
    }

    /// Last path segment of the HTTP endpoint that makes this operation.
    pub fn make_endpoint(&self) -> &'static str {
        match self {
            OperationType::Fee => "make-fee-operation",
            OperationType::TopUp => "make-top-up-operation",
            OperationType::Purchase => "make-purchase-operation",
            OperationType::Cashback => "make-cashback-operation",
            OperationType::Transfer => "make-transfer-operation",
            OperationType::BillPayment => "make-bill-payment-operation",
            OperationType::CashWithdrawal => "make-cash-withdrawal-operation",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FakeEnum for OperationType {
    const VARIANTS: &'static [Self] = &OperationType::ALL;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Failed,
    Completed,
    InProgress,
    Unspecified,
}

impl FakeEnum for OperationStatus {
    const VARIANTS: &'static [Self] = &[
        OperationStatus::Failed,
        OperationStatus::Completed,
        OperationStatus::InProgress,
        OperationStatus::Unspecified,
    ];
}

/// An operation as returned by the operations service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    #[serde(default)]
    pub category: String,
    pub created_at: String,
    pub account_id: String,
}

/// Body of every `POST /api/v1/operations/make-*-operation` call.
///
/// `category` is only sent for purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeOperationRequest {
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MakeOperationRequest {
    /// Request for `operation_type` with fake status, amount and category.
    pub fn fake(
        faker: &Faker,
        operation_type: OperationType,
        card_id: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            status: faker.enum_value::<OperationStatus>(),
            amount: faker.amount(),
            card_id: card_id.into(),
            account_id: account_id.into(),
            category: (operation_type == OperationType::Purchase).then(|| faker.category()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeOperationResponse {
    pub operation: Operation,
}

/// Query of `GET /api/v1/operations` and `GET /api/v1/operations/operations-summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsQuery {
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationResponse {
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationsResponse {
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationReceipt {
    pub url: String,
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationReceiptResponse {
    pub receipt: OperationReceipt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsSummary {
    pub spent_amount: f64,
    pub received_amount: f64,
    pub cashback_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationsSummaryResponse {
    pub summary: OperationsSummary,
}
