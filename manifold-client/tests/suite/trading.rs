use manifold_client::ClientOptions;
use manifold_client::ManifoldClient;
use manifold_client::types::AddLiquidityRequest;
use manifold_client::types::CloseMarketRequest;
use manifold_client::types::PlaceBetRequest;
use manifold_client::types::ResolveMarketRequest;
use manifold_client::types::SendManaRequest;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::method;
use wiremock::matchers::path;

fn client(server: &MockServer) -> ManifoldClient {
    ManifoldClient::new(ClientOptions::new("secret-key").with_base_url(server.uri()))
        .expect("client should build")
}

#[tokio::test]
async fn place_bet_posts_body_and_reads_bet() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/bet"))
        .and(body_json(json!({
            "amount": 25.0,
            "contractId": "m1",
            "outcome": "YES",
            "limitProb": 0.3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1", "contractId": "m1", "amount": 25.0, "outcome": "YES",
            "shares": 40.0, "probBefore": 0.25, "probAfter": 0.3, "isFilled": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bet = client(&server)
        .place_bet(&PlaceBetRequest {
            amount: 25.0,
            contract_id: "m1".to_string(),
            outcome: "YES".to_string(),
            limit_prob: Some(0.3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!("b1", bet.id);
    assert_eq!(Some(false), bet.is_filled);
}

#[tokio::test]
async fn bodyless_acknowledgements_are_accepted() {
    let server = MockServer::start().await;
    for route in [
        "/v0/bet/cancel/b1",
        "/v0/market/m1/resolve",
        "/v0/market/m1/close",
        "/v0/market/m1/add-liquidity",
        "/v0/managram",
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client(&server);
    client.cancel_bet("b1").await.unwrap();
    client
        .resolve_market(
            "m1",
            &ResolveMarketRequest {
                outcome: "YES".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client
        .close_market("m1", &CloseMarketRequest::default())
        .await
        .unwrap();
    client
        .add_liquidity("m1", &AddLiquidityRequest { amount: 100.0 })
        .await
        .unwrap();
    client
        .send_mana(&SendManaRequest {
            to_ids: vec!["u1".to_string()],
            amount: 10.0,
            message: "thanks".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_bet_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v0/bet"))
        .respond_with(ResponseTemplate::new(403).set_body_string("insufficient balance"))
        .mount(&server)
        .await;

    let err = client(&server)
        .place_bet(&PlaceBetRequest {
            amount: 1_000_000.0,
            contract_id: "m1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(
        "placing bet: API error (status 403): insufficient balance",
        format!("{err:#}")
    );
}
