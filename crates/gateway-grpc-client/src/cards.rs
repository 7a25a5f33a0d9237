//! Client for `contracts.services.gateway.cards.CardsGatewayService`.

use crate::client::{decode_error, GrpcChannel};
use crate::convert::required;
use crate::proto::cards as pb;
use gateway_types::{Card, CardType, IssueCardResponse, TransportError};

pub fn issue_card_method(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Virtual => "/contracts.services.gateway.cards.CardsGatewayService/IssueVirtualCard",
        CardType::Physical => {
            "/contracts.services.gateway.cards.CardsGatewayService/IssuePhysicalCard"
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardsGatewayGrpcClient {
    channel: GrpcChannel,
}

impl CardsGatewayGrpcClient {
    pub fn new(channel: GrpcChannel) -> Self {
        Self { channel }
    }

    pub async fn issue_card_api(
        &self,
        card_type: CardType,
        request: pb::IssueCardRequest,
    ) -> Result<pb::IssueCardResponse, TransportError> {
        self.channel.unary(issue_card_method(card_type), request).await
    }

    /// Issue a card of `card_type` on the user's account.
    pub async fn issue_card(
        &self,
        card_type: CardType,
        user_id: &str,
        account_id: &str,
    ) -> Result<IssueCardResponse, TransportError> {
        let request = pb::IssueCardRequest {
            user_id: user_id.to_string(),
            account_id: account_id.to_string(),
        };
        let response = self.issue_card_api(card_type, request).await?;
        let card = required(response.card, "card")
            .and_then(Card::try_from)
            .map_err(|e| decode_error(issue_card_method(card_type), e))?;
        Ok(IssueCardResponse { card })
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
