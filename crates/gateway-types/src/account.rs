//! Account records and requests.

use crate::card::Card;
use gateway_fakers::FakeEnum;
use serde::{Deserialize, Serialize};

/// Kinds of account the gateway can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Deposit,
    Savings,
    DebitCard,
    CreditCard,
}

impl AccountType {
    /// All account types, in the order seed plans are walked.
    pub const ALL: [AccountType; 4] = [
        AccountType::Deposit,
        AccountType::Savings,
        AccountType::DebitCard,
        AccountType::CreditCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Deposit => "DEPOSIT",
            AccountType::Savings => "SAVINGS",
            AccountType::DebitCard => "DEBIT_CARD",
            AccountType::CreditCard => "CREDIT_CARD",
        }
    }

    /// Last path segment of the HTTP endpoint that opens this account type.
    pub fn open_endpoint(&self) -> &'static str {
        match self {
            AccountType::Deposit => "open-deposit-account",
            AccountType::Savings => "open-savings-account",
            AccountType::DebitCard => "open-debit-card-account",
            AccountType::CreditCard => "open-credit-card-account",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FakeEnum for AccountType {
    const VARIANTS: &'static [Self] = &AccountType::ALL;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Frozen,
    Closed,
    PendingClosure,
}

/// An account as returned by the accounts service, with the cards issued on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub status: AccountStatus,
    pub balance: f64,
}

/// Query of `GET /api/v1/accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsQuery {
    pub user_id: String,
}

/// Body of every `POST /api/v1/accounts/open-*-account` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccountRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAccountResponse {
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountsResponse {
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardPaymentSystem, CardStatus, CardType};
    use serde_json::json;

    fn card(id: &str, card_type: CardType) -> Card {
        Card {
            id: id.to_string(),
            pin: "0000".to_string(),
            cvv: "000".to_string(),
            card_type,
            status: CardStatus::Active,
            account_id: "acc".to_string(),
            card_number: "4111111111111111".to_string(),
            card_holder: "TEST".to_string(),
            expiry_date: "2030-01-01".to_string(),
            payment_system: CardPaymentSystem::Mastercard,
        }
    }

    #[test]
    fn test_account_type_wire_names() {
        assert_eq!(
            serde_json::to_value(AccountType::CreditCard).unwrap(),
            json!("CREDIT_CARD")
        );
        assert_eq!(
            serde_json::from_value::<AccountType>(json!("DEBIT_CARD")).unwrap(),
            AccountType::DebitCard
        );
        assert!(serde_json::from_value::<AccountType>(json!("CHECKING")).is_err());
    }

    #[test]
    fn test_account_serializes_cards_camel_case() {
        let account = Account {
            id: "acc".to_string(),
            account_type: AccountType::CreditCard,
            cards: vec![card("v", CardType::Virtual), card("p", CardType::Physical)],
            status: AccountStatus::Active,
            balance: 0.0,
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], json!("CREDIT_CARD"));
        assert_eq!(value["cards"][1]["accountId"], json!("acc"));
        assert_eq!(value["cards"][1]["type"], json!("PHYSICAL"));
    }

    #[test]
    fn test_account_without_cards_field() {
        let account: Account = serde_json::from_value(json!({
            "id": "acc",
            "type": "DEPOSIT",
            "status": "ACTIVE",
            "balance": 10.5
        }))
        .unwrap();
        assert!(account.cards.is_empty());
        assert_eq!(account.balance, 10.5);
    }
}
