//! Client for `contracts.services.gateway.accounts.AccountsGatewayService`.

use crate::client::{decode_error, GrpcChannel};
use crate::convert::required;
use crate::proto::accounts as pb;
use gateway_types::{
    Account, AccountType, GetAccountsResponse, OpenAccountResponse, TransportError,
};

const GET_ACCOUNTS: &str =
    "/contracts.services.gateway.accounts.AccountsGatewayService/GetAccounts";

/// RPC path that opens an account of `account_type`.
pub fn open_account_method(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Deposit => {
            "/contracts.services.gateway.accounts.AccountsGatewayService/OpenDepositAccount"
        }
        AccountType::Savings => {
            "/contracts.services.gateway.accounts.AccountsGatewayService/OpenSavingsAccount"
        }
        AccountType::DebitCard => {
            "/contracts.services.gateway.accounts.AccountsGatewayService/OpenDebitCardAccount"
        }
        AccountType::CreditCard => {
            "/contracts.services.gateway.accounts.AccountsGatewayService/OpenCreditCardAccount"
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountsGatewayGrpcClient {
    channel: GrpcChannel,
}

impl AccountsGatewayGrpcClient {
    pub fn new(channel: GrpcChannel) -> Self {
        Self { channel }
    }

    pub async fn get_accounts_api(
        &self,
        request: pb::GetAccountsRequest,
    ) -> Result<pb::GetAccountsResponse, TransportError> {
        self.channel.unary(GET_ACCOUNTS, request).await
    }

    pub async fn open_account_api(
        &self,
        account_type: AccountType,
        request: pb::OpenAccountRequest,
    ) -> Result<pb::OpenAccountResponse, TransportError> {
        self.channel
            .unary(open_account_method(account_type), request)
            .await
    }

    pub async fn get_accounts(&self, user_id: &str) -> Result<GetAccountsResponse, TransportError> {
        let request = pb::GetAccountsRequest {
            user_id: user_id.to_string(),
        };
        let response = self.get_accounts_api(request).await?;
        let accounts = response
            .accounts
            .into_iter()
            .map(Account::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| decode_error(GET_ACCOUNTS, e))?;
        Ok(GetAccountsResponse { accounts })
    }

    /// Open an account of `account_type` for the user.
    pub async fn open_account(
        &self,
        account_type: AccountType,
        user_id: &str,
    ) -> Result<OpenAccountResponse, TransportError> {
        let method = open_account_method(account_type);
        let request = pb::OpenAccountRequest {
            user_id: user_id.to_string(),
        };
        let response = self.open_account_api(account_type, request).await?;
        let account = required(response.account, "account")
            .and_then(Account::try_from)
            .map_err(|e| decode_error(method, e))?;
        Ok(OpenAccountResponse { account })
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
