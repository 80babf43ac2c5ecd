use crate::suite::support::mcp;
use manifold_mcp_server::GetPositionsParams;
use manifold_mcp_server::ListBetsParams;
use manifold_mcp_server::MarketIdParams;
use manifold_mcp_server::SearchMarketsParams;
use mcp_servers_common::format::result_text;
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

#[tokio::test]
async fn search_forwards_only_meaningful_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/search-markets"))
        .and(header("authorization", "Key test-key"))
        .and(query_param("term", "rain"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "question": "Rain tomorrow?"},
            {"id": "m2", "question": "Rain on Friday?"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = mcp(&server)
        .search_markets(Parameters(SearchMarketsParams {
            term: Some("rain".to_string()),
            sort: Some(String::new()),
            limit: Some(10.7),
            ..Default::default()
        }))
        .await
        .unwrap();
    let text = result_text(&result);
    assert!(text.starts_with("Found 2 market(s):\n\n"), "{text}");
    assert!(text.contains("Rain on Friday?"), "{text}");

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("sort"), "{query}");
}

#[tokio::test]
async fn empty_lists_use_fixed_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/bets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0/search-markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let mcp = mcp(&server);
    let bets = mcp
        .list_bets(Parameters(ListBetsParams::default()))
        .await
        .unwrap();
    assert_eq!("No bets found.", result_text(&bets));
    let markets = mcp
        .search_markets(Parameters(SearchMarketsParams::default()))
        .await
        .unwrap();
    assert_eq!("No markets found.", result_text(&markets));
}

#[tokio::test]
async fn positions_require_a_market() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = mcp(&server)
        .get_positions(Parameters(GetPositionsParams::default()))
        .await
        .unwrap();
    assert_eq!(Some(true), result.is_error);
    assert_eq!("market_id is required", result_text(&result));
}

#[tokio::test]
async fn positions_forward_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/market/m1/positions"))
        .and(query_param("bottom", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"contractId": "m1", "userId": "u1", "profit": -4.0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = mcp(&server)
        .get_positions(Parameters(GetPositionsParams {
            market_id: "m1".to_string(),
            top: Some(0.0),
            bottom: Some(2.0),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert!(result_text(&result).starts_with("Found 1 position(s):"));

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("top"), "{query}");
}

#[tokio::test]
async fn market_lookup_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/market/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let result = mcp(&server)
        .get_market(Parameters(MarketIdParams {
            market_id: "missing".to_string(),
        }))
        .await
        .unwrap();
    assert_eq!(Some(true), result.is_error);
    assert_eq!(
        "failed to get market: getting market missing: API error (status 404): not found",
        result_text(&result)
    );
}
