//! Conversions between protobuf messages and `gateway_types` records.
//!
//! Enum values outside the known range, `UNSPECIFIED` where the domain has
//! no such value, and missing required sub-messages are conversion errors.

use crate::proto;
use gateway_types as domain;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error("Unknown {kind} value: {value}")]
    UnknownEnum { kind: &'static str, value: i32 },

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Take a required sub-message out of its `Option`.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ConversionError::MissingField(field))
}

fn account_type(value: i32) -> Result<domain::AccountType> {
    match proto::accounts::AccountType::try_from(value) {
        Ok(proto::accounts::AccountType::Deposit) => Ok(domain::AccountType::Deposit),
        Ok(proto::accounts::AccountType::Savings) => Ok(domain::AccountType::Savings),
        Ok(proto::accounts::AccountType::DebitCard) => Ok(domain::AccountType::DebitCard),
        Ok(proto::accounts::AccountType::CreditCard) => Ok(domain::AccountType::CreditCard),
        _ => Err(ConversionError::UnknownEnum {
            kind: "AccountType",
            value,
        }),
    }
}

fn account_status(value: i32) -> Result<domain::AccountStatus> {
    match proto::accounts::AccountStatus::try_from(value) {
        Ok(proto::accounts::AccountStatus::Active) => Ok(domain::AccountStatus::Active),
        Ok(proto::accounts::AccountStatus::Frozen) => Ok(domain::AccountStatus::Frozen),
        Ok(proto::accounts::AccountStatus::Closed) => Ok(domain::AccountStatus::Closed),
        Ok(proto::accounts::AccountStatus::PendingClosure) => {
            Ok(domain::AccountStatus::PendingClosure)
        }
        _ => Err(ConversionError::UnknownEnum {
            kind: "AccountStatus",
            value,
        }),
    }
}

fn card_type(value: i32) -> Result<domain::CardType> {
    match proto::cards::CardType::try_from(value) {
        Ok(proto::cards::CardType::Virtual) => Ok(domain::CardType::Virtual),
        Ok(proto::cards::CardType::Physical) => Ok(domain::CardType::Physical),
        _ => Err(ConversionError::UnknownEnum {
            kind: "CardType",
            value,
        }),
    }
}

fn card_status(value: i32) -> Result<domain::CardStatus> {
    match proto::cards::CardStatus::try_from(value) {
        Ok(proto::cards::CardStatus::Active) => Ok(domain::CardStatus::Active),
        Ok(proto::cards::CardStatus::Frozen) => Ok(domain::CardStatus::Frozen),
        Ok(proto::cards::CardStatus::Closed) => Ok(domain::CardStatus::Closed),
        Ok(proto::cards::CardStatus::Blocked) => Ok(domain::CardStatus::Blocked),
        _ => Err(ConversionError::UnknownEnum {
            kind: "CardStatus",
            value,
        }),
    }
}

fn payment_system(value: i32) -> Result<domain::CardPaymentSystem> {
    match proto::cards::CardPaymentSystem::try_from(value) {
        Ok(proto::cards::CardPaymentSystem::Visa) => Ok(domain::CardPaymentSystem::Visa),
        Ok(proto::cards::CardPaymentSystem::Mastercard) => {
            Ok(domain::CardPaymentSystem::Mastercard)
        }
        _ => Err(ConversionError::UnknownEnum {
            kind: "CardPaymentSystem",
            value,
        }),
    }
}

fn operation_type(value: i32) -> Result<domain::OperationType> {
    use proto::operations::OperationType as P;
    match P::try_from(value) {
        Ok(P::Fee) => Ok(domain::OperationType::Fee),
        Ok(P::TopUp) => Ok(domain::OperationType::TopUp),
        Ok(P::Purchase) => Ok(domain::OperationType::Purchase),
        Ok(P::Cashback) => Ok(domain::OperationType::Cashback),
        Ok(P::Transfer) => Ok(domain::OperationType::Transfer),
        Ok(P::BillPayment) => Ok(domain::OperationType::BillPayment),
        Ok(P::CashWithdrawal) => Ok(domain::OperationType::CashWithdrawal),
        _ => Err(ConversionError::UnknownEnum {
            kind: "OperationType",
            value,
        }),
    }
}

fn operation_status(value: i32) -> Result<domain::OperationStatus> {
    use proto::operations::OperationStatus as P;
    match P::try_from(value) {
        Ok(P::Unspecified) => Ok(domain::OperationStatus::Unspecified),
        Ok(P::Failed) => Ok(domain::OperationStatus::Failed),
        Ok(P::Completed) => Ok(domain::OperationStatus::Completed),
        Ok(P::InProgress) => Ok(domain::OperationStatus::InProgress),
        Err(_) => Err(ConversionError::UnknownEnum {
            kind: "OperationStatus",
            value,
        }),
    }
}

impl From<domain::OperationStatus> for proto::operations::OperationStatus {
    fn from(status: domain::OperationStatus) -> Self {
        match status {
            domain::OperationStatus::Unspecified => Self::Unspecified,
            domain::OperationStatus::Failed => Self::Failed,
            domain::OperationStatus::Completed => Self::Completed,
            domain::OperationStatus::InProgress => Self::InProgress,
        }
    }
}

impl From<proto::users::User> for domain::User {
    fn from(user: proto::users::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            last_name: user.last_name,
            first_name: user.first_name,
            middle_name: user.middle_name,
            phone_number: user.phone_number,
        }
    }
}

impl From<domain::CreateUserRequest> for proto::users::CreateUserRequest {
    fn from(request: domain::CreateUserRequest) -> Self {
        Self {
            email: request.email,
            last_name: request.last_name,
            first_name: request.first_name,
            middle_name: request.middle_name,
            phone_number: request.phone_number,
        }
    }
}

impl TryFrom<proto::cards::Card> for domain::Card {
    type Error = ConversionError;

    fn try_from(card: proto::cards::Card) -> Result<Self> {
        Ok(Self {
            card_type: card_type(card.r#type)?,
            status: card_status(card.status)?,
            payment_system: payment_system(card.payment_system)?,
            id: card.id,
            pin: card.pin,
            cvv: card.cvv,
            account_id: card.account_id,
            card_number: card.card_number,
            card_holder: card.card_holder,
            expiry_date: card.expiry_date,
        })
    }
}

impl TryFrom<proto::accounts::Account> for domain::Account {
    type Error = ConversionError;

    fn try_from(account: proto::accounts::Account) -> Result<Self> {
        Ok(Self {
            account_type: account_type(account.r#type)?,
            status: account_status(account.status)?,
            cards: account
                .cards
                .into_iter()
                .map(domain::Card::try_from)
                .collect::<Result<Vec<_>>>()?,
            id: account.id,
            balance: account.balance,
        })
    }
}

impl TryFrom<proto::operations::Operation> for domain::Operation {
    type Error = ConversionError;

    fn try_from(operation: proto::operations::Operation) -> Result<Self> {
        Ok(Self {
            operation_type: operation_type(operation.r#type)?,
            status: operation_status(operation.status)?,
            id: operation.id,
            amount: operation.amount,
            card_id: operation.card_id,
            category: operation.category,
            created_at: operation.created_at,
            account_id: operation.account_id,
        })
    }
}

impl From<domain::MakeOperationRequest> for proto::operations::MakeOperationRequest {
    fn from(request: domain::MakeOperationRequest) -> Self {
        Self {
            status: proto::operations::OperationStatus::from(request.status) as i32,
            amount: request.amount,
            card_id: request.card_id,
            account_id: request.account_id,
            category: request.category.unwrap_or_default(),
        }
    }
}

impl From<proto::operations::OperationReceipt> for domain::OperationReceipt {
    fn from(receipt: proto::operations::OperationReceipt) -> Self {
        Self {
            url: receipt.url,
            document: receipt.document,
        }
    }
}

impl From<proto::operations::OperationsSummary> for domain::OperationsSummary {
    fn from(summary: proto::operations::OperationsSummary) -> Self {
        Self {
            spent_amount: summary.spent_amount,
            received_amount: summary.received_amount,
            cashback_amount: summary.cashback_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proto_card(card_type: proto::cards::CardType) -> proto::cards::Card {
        proto::cards::Card {
            id: "card-1".to_string(),
            pin: "1234".to_string(),
            cvv: "123".to_string(),
            r#type: card_type as i32,
            status: proto::cards::CardStatus::Active as i32,
            account_id: "acc-1".to_string(),
            card_number: "4111111111111111".to_string(),
            card_holder: "IVAN IVANOV".to_string(),
            expiry_date: "2030-12-31".to_string(),
            payment_system: proto::cards::CardPaymentSystem::Visa as i32,
        }
    }

    #[test]
    fn test_account_with_cards_converts() {
        let account = proto::accounts::Account {
            id: "acc-1".to_string(),
            r#type: proto::accounts::AccountType::CreditCard as i32,
            cards: vec![
                proto_card(proto::cards::CardType::Virtual),
                proto_card(proto::cards::CardType::Physical),
            ],
            status: proto::accounts::AccountStatus::Active as i32,
            balance: 25.0,
        };

        let account = domain::Account::try_from(account).unwrap();
        assert_eq!(account.account_type, domain::AccountType::CreditCard);
        assert_eq!(account.cards.len(), 2);
        assert_eq!(account.cards[1].card_type, domain::CardType::Physical);
        assert_eq!(account.balance, 25.0);
    }

    #[test]
    fn test_unspecified_account_type_is_rejected() {
        let account = proto::accounts::Account {
            id: "acc-1".to_string(),
            r#type: 0,
            cards: vec![],
            status: proto::accounts::AccountStatus::Active as i32,
            balance: 0.0,
        };

        assert_eq!(
            domain::Account::try_from(account).unwrap_err(),
            ConversionError::UnknownEnum {
                kind: "AccountType",
                value: 0
            }
        );
    }

    #[test]
    fn test_operation_request_round_trips_status() {
        let request = domain::MakeOperationRequest {
            status: domain::OperationStatus::InProgress,
            amount: 10.0,
            card_id: "card-1".to_string(),
            account_id: "acc-1".to_string(),
            category: None,
        };

        let message = proto::operations::MakeOperationRequest::from(request);
        assert_eq!(message.status, 3);
        assert_eq!(operation_status(message.status).unwrap(), domain::OperationStatus::InProgress);
        assert!(message.category.is_empty());
    }

    #[test]
    fn test_missing_field() {
        let missing: Option<proto::users::User> = None;
        assert_eq!(
            required(missing, "user").unwrap_err(),
            ConversionError::MissingField("user")
        );
    }
}
