//! Card records and requests.

use gateway_fakers::FakeEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Virtual,
    Physical,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Virtual => "VIRTUAL",
            CardType::Physical => "PHYSICAL",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FakeEnum for CardType {
    const VARIANTS: &'static [Self] = &[CardType::Virtual, CardType::Physical];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Frozen,
    Closed,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardPaymentSystem {
    Visa,
    Mastercard,
}

/// A card as returned by the cards service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub pin: String,
    pub cvv: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub status: CardStatus,
    pub account_id: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_date: String,
    pub payment_system: CardPaymentSystem,
}

/// Body of `POST /api/v1/cards/issue-virtual-card` and `issue-physical-card`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCardRequest {
    pub user_id: String,
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCardResponse {
    pub card: Card,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_deserializes_from_wire() {
        let card: Card = serde_json::from_value(json!({
            "id": "card-1",
            "pin": "1234",
            "cvv": "123",
            "type": "PHYSICAL",
            "status": "ACTIVE",
            "accountId": "acc-1",
            "cardNumber": "4111111111111111",
            "cardHolder": "IVAN IVANOV",
            "expiryDate": "2030-01-01",
            "paymentSystem": "VISA"
        }))
        .unwrap();

        assert_eq!(card.card_type, CardType::Physical);
        assert_eq!(card.payment_system, CardPaymentSystem::Visa);
        assert_eq!(card.account_id, "acc-1");
    }
}
