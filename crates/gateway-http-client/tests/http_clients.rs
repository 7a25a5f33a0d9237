//! HTTP client tests (using WireMock)
//! These tests are fast and don't require a running gateway.

use gateway_fakers::Faker;
use gateway_http_client::{GatewayHttpClients, HttpClientConfig};
use gateway_types::{AccountType, CardType, OperationType, TransportError};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn create_test_clients(base_url: &str) -> GatewayHttpClients {
    let config = HttpClientConfig::new(base_url).with_timeout(Duration::from_secs(5));
    GatewayHttpClients::new(&config, Arc::new(Faker::seeded(42))).unwrap()
}

fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "email": "user@example.com",
        "lastName": "Ivanov",
        "firstName": "Ivan",
        "middleName": "Ivanovich",
        "phoneNumber": "+79991234567"
    })
}

fn card_json(id: &str, card_type: &str, account_id: &str) -> Value {
    json!({
        "id": id,
        "pin": "1234",
        "cvv": "123",
        "type": card_type,
        "status": "ACTIVE",
        "accountId": account_id,
        "cardNumber": "4111111111111111",
        "cardHolder": "IVAN IVANOV",
        "expiryDate": "2030-12-31",
        "paymentSystem": "MASTERCARD"
    })
}

fn account_json(id: &str, account_type: &str) -> Value {
    json!({
        "id": id,
        "type": account_type,
        "cards": [card_json("card-1", "PHYSICAL", id)],
        "status": "ACTIVE",
        "balance": 0.0
    })
}

fn operation_json(id: &str, operation_type: &str) -> Value {
    json!({
        "id": id,
        "type": operation_type,
        "status": "COMPLETED",
        "amount": 12.5,
        "cardId": "card-1",
        "category": "taxi",
        "createdAt": "2025-01-01T00:00:00Z",
        "accountId": "acc-1"
    })
}

#[tokio::test]
async fn test_create_user_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .respond_with(|request: &Request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            assert!(body.get("lastName").is_some());
            assert!(body.get("phoneNumber").is_some());
            assert!(body.get("last_name").is_none());
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-1") }))
        })
        .expect(1)
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let response = clients.users.create_user().await.unwrap();

    assert_eq!(response.user.id, "user-1");
    assert_eq!(response.user.phone_number, "+79991234567");
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-7") })))
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let response = clients.users.get_user("user-7").await.unwrap();
    assert_eq!(response.user.id, "user-7");
}

#[tokio::test]
async fn test_open_account_hits_type_specific_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/open-credit-card-account"))
        .and(body_partial_json(json!({ "userId": "user-1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "account": account_json("acc-1", "CREDIT_CARD") })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let account = clients
        .accounts
        .open_account(AccountType::CreditCard, "user-1")
        .await
        .unwrap()
        .account;

    assert_eq!(account.account_type, AccountType::CreditCard);
    assert_eq!(account.cards[0].id, "card-1");
}

#[tokio::test]
async fn test_get_accounts_uses_query_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts"))
        .and(query_param("userId", "user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accounts": [account_json("acc-1", "DEPOSIT"), account_json("acc-2", "SAVINGS")]
        })))
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let accounts = clients.accounts.get_accounts("user-1").await.unwrap().accounts;

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1].account_type, AccountType::Savings);
}

#[tokio::test]
async fn test_issue_virtual_card() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/cards/issue-virtual-card"))
        .and(body_partial_json(json!({ "userId": "user-1", "accountId": "acc-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "card": card_json("card-9", "VIRTUAL", "acc-1")
        })))
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let card = clients
        .cards
        .issue_virtual_card("user-1", "acc-1")
        .await
        .unwrap()
        .card;

    assert_eq!(card.id, "card-9");
    assert_eq!(card.card_type, CardType::Virtual);
}

#[tokio::test]
async fn test_make_purchase_operation_sends_category() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/operations/make-purchase-operation"))
        .respond_with(|request: &Request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            assert_eq!(body["cardId"], json!("card-1"));
            assert_eq!(body["accountId"], json!("acc-1"));
            assert!(body["category"].is_string());
            assert!(body["amount"].is_number());
            ResponseTemplate::new(200)
                .set_body_json(json!({ "operation": operation_json("op-1", "PURCHASE") }))
        })
        .expect(1)
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let operation = clients
        .operations
        .make_purchase_operation("card-1", "acc-1")
        .await
        .unwrap()
        .operation;

    assert_eq!(operation.operation_type, OperationType::Purchase);
}

#[tokio::test]
async fn test_operations_summary_and_receipt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/operations/operations-summary"))
        .and(query_param("accountId", "acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": { "spentAmount": 10.0, "receivedAmount": 5.0, "cashbackAmount": 0.5 }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/operations/operation-receipt/op-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "receipt": { "url": "http://receipts/op-1", "document": "..." }
        })))
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());

    let summary = clients
        .operations
        .get_operations_summary("acc-1")
        .await
        .unwrap()
        .summary;
    assert_eq!(summary.spent_amount, 10.0);

    let receipt = clients
        .operations
        .get_operation_receipt("op-1")
        .await
        .unwrap()
        .receipt;
    assert_eq!(receipt.url, "http://receipts/op-1");
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid phone number"))
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let err = clients.users.create_user().await.unwrap_err();

    match err {
        TransportError::Status { status, body, .. } => {
            assert_eq!(status, 422);
            assert_eq!(body, "invalid phone number");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/operations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&mock_server)
        .await;

    let clients = create_test_clients(&mock_server.uri());
    let err = clients.operations.get_operations("acc-1").await.unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_gateway_is_connection_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let clients = create_test_clients("http://127.0.0.1:9");
    let err = clients.users.get_user("user-1").await.unwrap_err();
    assert!(matches!(err, TransportError::Connection { .. }));
}
