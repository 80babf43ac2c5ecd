use manifold_client::ClientOptions;
use manifold_client::ManifoldClient;
use manifold_client::types::PositionsQuery;
use manifold_client::types::SearchMarketsQuery;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

fn client(server: &MockServer) -> ManifoldClient {
    ManifoldClient::new(ClientOptions::new("secret-key").with_base_url(server.uri()))
        .expect("client should build")
}

#[tokio::test]
async fn search_sends_key_auth_and_only_set_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/search-markets"))
        .and(header("authorization", "Key secret-key"))
        .and(query_param("term", "election"))
        .and(query_param("contractType", "BINARY"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "question": "Who wins?", "outcomeType": "BINARY", "probability": 0.4}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let markets = client(&server)
        .search_markets(&SearchMarketsQuery {
            term: Some("election".to_string()),
            contract_type: Some("BINARY".to_string()),
            limit: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(1, markets.len());
    assert_eq!(Some(0.4), markets[0].probability);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("sort"), "{query}");
    assert!(!query.contains("topicSlug"), "{query}");
}

#[tokio::test]
async fn get_market_reads_full_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/market/m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "question": "Which?",
            "outcomeType": "MULTIPLE_CHOICE",
            "textDescription": "pick one",
            "answers": [{"id": "a1", "text": "A", "contractId": "m1"}]
        })))
        .mount(&server)
        .await;

    let market = client(&server).get_market("m1").await.unwrap();
    assert_eq!("pick one", market.text_description);
    assert_eq!("A", market.answers[0].text);
}

#[tokio::test]
async fn positions_forward_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/market/m1/positions"))
        .and(query_param("order", "profit"))
        .and(query_param("top", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"contractId": "m1", "userId": "u1", "profit": 12.0, "hasShares": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let positions = client(&server)
        .get_positions(
            "m1",
            &PositionsQuery {
                order: Some("profit".to_string()),
                top: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!("u1", positions[0].user_id);
    assert!(positions[0].has_shares);
}

#[tokio::test]
async fn user_errors_carry_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/user/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_string("user not found"))
        .mount(&server)
        .await;

    let err = client(&server).get_user("nobody").await.unwrap_err();
    assert_eq!(
        "getting user nobody: API error (status 404): user not found",
        format!("{err:#}")
    );
}
