//! Client for `contracts.services.gateway.operations.OperationsGatewayService`.

use crate::client::{decode_error, GrpcChannel};
use crate::convert::required;
use crate::proto::operations as pb;
use gateway_fakers::Faker;
use gateway_types::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsResponse,
    GetOperationsSummaryResponse, MakeOperationRequest, MakeOperationResponse, Operation,
    OperationType, TransportError,
};
use std::sync::Arc;

const GET_OPERATION: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/GetOperation";
const GET_OPERATION_RECEIPT: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/GetOperationReceipt";
const GET_OPERATIONS: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/GetOperations";
const GET_OPERATIONS_SUMMARY: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/GetOperationsSummary";

/// RPC path that makes an operation of `operation_type`.
pub fn make_operation_method(operation_type: OperationType) -> &'static str {
    match operation_type {
        OperationType::Fee => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakeFeeOperation"
        }
        OperationType::TopUp => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakeTopUpOperation"
        }
        OperationType::Purchase => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakePurchaseOperation"
        }
        OperationType::Cashback => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakeCashbackOperation"
        }
        OperationType::Transfer => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakeTransferOperation"
        }
        OperationType::BillPayment => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakeBillPaymentOperation"
        }
        OperationType::CashWithdrawal => {
            "/contracts.services.gateway.operations.OperationsGatewayService/MakeCashWithdrawalOperation"
        }
    }
}

#[derive(Debug, Clone)]
pub struct OperationsGatewayGrpcClient {
    channel: GrpcChannel,
    faker: Arc<Faker>,
}

impl OperationsGatewayGrpcClient {
    pub fn new(channel: GrpcChannel, faker: Arc<Faker>) -> Self {
        Self { channel, faker }
    }

    pub async fn get_operation_api(
        &self,
        request: pb::GetOperationRequest,
    ) -> Result<pb::GetOperationResponse, TransportError> {
        self.channel.unary(GET_OPERATION, request).await
    }

    pub async fn get_operation_receipt_api(
        &self,
        request: pb::GetOperationReceiptRequest,
    ) -> Result<pb::GetOperationReceiptResponse, TransportError> {
        self.channel.unary(GET_OPERATION_RECEIPT, request).await
    }

    pub async fn get_operations_api(
        &self,
        request: pb::GetOperationsRequest,
    ) -> Result<pb::GetOperationsResponse, TransportError> {
        self.channel.unary(GET_OPERATIONS, request).await
    }

    pub async fn get_operations_summary_api(
        &self,
        request: pb::GetOperationsSummaryRequest,
    ) -> Result<pb::GetOperationsSummaryResponse, TransportError> {
        self.channel.unary(GET_OPERATIONS_SUMMARY, request).await
    }

    pub async fn make_operation_api(
        &self,
        operation_type: OperationType,
        request: pb::MakeOperationRequest,
    ) -> Result<pb::MakeOperationResponse, TransportError> {
        self.channel
            .unary(make_operation_method(operation_type), request)
            .await
    }

    pub async fn get_operation(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationResponse, TransportError> {
        let request = pb::GetOperationRequest {
            id: operation_id.to_string(),
        };
        let response = self.get_operation_api(request).await?;
        let operation = required(response.operation, "operation")
            .and_then(Operation::try_from)
            .map_err(|e| decode_error(GET_OPERATION, e))?;
        Ok(GetOperationResponse { operation })
    }

    pub async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<GetOperationReceiptResponse, TransportError> {
        let request = pb::GetOperationReceiptRequest {
            operation_id: operation_id.to_string(),
        };
        let response = self.get_operation_receipt_api(request).await?;
        let receipt = required(response.receipt, "receipt")
            .map_err(|e| decode_error(GET_OPERATION_RECEIPT, e))?;
        Ok(GetOperationReceiptResponse {
            receipt: receipt.into(),
        })
    }

    pub async fn get_operations(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsResponse, TransportError> {
        let request = pb::GetOperationsRequest {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_api(request).await?;
        let operations = response
            .operations
            .into_iter()
            .map(Operation::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| decode_error(GET_OPERATIONS, e))?;
        Ok(GetOperationsResponse { operations })
    }

    pub async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<GetOperationsSummaryResponse, TransportError> {
        let request = pb::GetOperationsSummaryRequest {
            account_id: account_id.to_string(),
        };
        let response = self.get_operations_summary_api(request).await?;
        let summary = required(response.summary, "summary")
            .map_err(|e| decode_error(GET_OPERATIONS_SUMMARY, e))?;
        Ok(GetOperationsSummaryResponse {
            summary: summary.into(),
        })
    }

    /// Submit an operation of `operation_type` with fake status, amount and category.
    pub async fn make_operation(
        &self,
        operation_type: OperationType,
        card_id: &str,
        account_id: &str,
    ) -> Result<MakeOperationResponse, TransportError> {
        let request = MakeOperationRequest::fake(&self.faker, operation_type, card_id, account_id);
        let response = self
            .make_operation_api(operation_type, request.into())
            .await?;
        let operation = required(response.operation, "operation")
            .and_then(Operation::try_from)
            .map_err(|e| decode_error(make_operation_method(operation_type), e))?;
        Ok(MakeOperationResponse { operation })
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
