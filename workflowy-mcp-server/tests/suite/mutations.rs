use crate::suite::support::mcp;
use crate::suite::support::mount_export;
use crate::suite::support::outline;
use mcp_servers_common::format::result_text;
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use workflowy_mcp_server::CreateNodeParams;
use workflowy_mcp_server::MoveNodeParams;
use workflowy_mcp_server::NodeIdParams;
use workflowy_mcp_server::SearchNodesParams;
use workflowy_mcp_server::UpdateNodeParams;

fn search(query: &str) -> SearchNodesParams {
    SearchNodesParams {
        query: query.to_string(),
        ..Default::default()
    }
}

fn node_id(id: &str) -> Parameters<NodeIdParams> {
    Parameters(NodeIdParams {
        node_id: id.to_string(),
    })
}

#[tokio::test]
async fn successful_create_invalidates_export() {
    let server = MockServer::start().await;
    mount_export(&server, outline(), 2).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/nodes"))
        .and(body_json(json!({"parent_id": "lists", "name": "Hardware"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": "hw"})))
        .expect(1)
        .mount(&server)
        .await;
    let mcp = mcp(&server);
    let cancel = CancellationToken::new();

    mcp.run_search(search("home"), &cancel).await;
    let created = mcp
        .create_node(Parameters(CreateNodeParams {
            name: "Hardware".to_string(),
            parent_id: Some("lists".to_string()),
            ..Default::default()
        }))
        .await
        .expect("tool call");
    assert_eq!("Created node with ID: hw", result_text(&created));
    mcp.run_search(search("home"), &cancel).await;
}

#[tokio::test]
async fn failed_mutation_keeps_cached_export() {
    let server = MockServer::start().await;
    mount_export(&server, outline(), 1).await;
    Mock::given(method("POST"))
        .and(path("/api/v1/nodes/groc/complete"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    let mcp = mcp(&server);
    let cancel = CancellationToken::new();

    mcp.run_search(search("home"), &cancel).await;
    let result = mcp.complete_node(node_id("groc")).await.expect("tool call");
    assert_eq!(Some(true), result.is_error);
    assert_eq!(
        "failed to complete node: completing node groc: API error (status 500): boom",
        result_text(&result)
    );
    mcp.run_search(search("home"), &cancel).await;
}

#[tokio::test]
async fn every_mutation_invalidates() {
    let server = MockServer::start().await;
    // One initial export plus one after each of the five mutations.
    mount_export(&server, outline(), 6).await;
    for (verb, route) in [
        ("POST", "/api/v1/nodes/groc"),
        ("POST", "/api/v1/nodes/groc/move"),
        ("POST", "/api/v1/nodes/groc/complete"),
        ("POST", "/api/v1/nodes/groc/uncomplete"),
        ("DELETE", "/api/v1/nodes/groc"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
    }
    let mcp = mcp(&server);
    let cancel = CancellationToken::new();

    mcp.run_search(search("home"), &cancel).await;

    let updated = mcp
        .update_node(Parameters(UpdateNodeParams {
            node_id: "groc".to_string(),
            name: Some("Food".to_string()),
            ..Default::default()
        }))
        .await
        .expect("tool call");
    assert_eq!("Updated node groc", result_text(&updated));
    mcp.run_search(search("home"), &cancel).await;

    let moved = mcp
        .move_node(Parameters(MoveNodeParams {
            node_id: "groc".to_string(),
            parent_id: Some("home".to_string()),
            position: Some("top".to_string()),
        }))
        .await
        .expect("tool call");
    assert_eq!("Moved node groc", result_text(&moved));
    mcp.run_search(search("home"), &cancel).await;

    let completed = mcp.complete_node(node_id("groc")).await.expect("tool call");
    assert_eq!("Completed node groc", result_text(&completed));
    mcp.run_search(search("home"), &cancel).await;

    let uncompleted = mcp.uncomplete_node(node_id("groc")).await.expect("tool call");
    assert_eq!("Uncompleted node groc", result_text(&uncompleted));
    mcp.run_search(search("home"), &cancel).await;

    let deleted = mcp.delete_node(node_id("groc")).await.expect("tool call");
    assert_eq!("Deleted node groc", result_text(&deleted));
    mcp.run_search(search("home"), &cancel).await;
}

#[tokio::test]
async fn missing_required_fields_are_tool_errors() {
    let server = MockServer::start().await;
    let mcp = mcp(&server);

    let result = mcp
        .create_node(Parameters(CreateNodeParams::default()))
        .await
        .expect("tool call");
    assert_eq!("name is required", result_text(&result));

    let result = mcp.delete_node(node_id("")).await.expect("tool call");
    assert_eq!("node_id is required", result_text(&result));

    let result = mcp
        .update_node(Parameters(UpdateNodeParams {
            node_id: "groc".to_string(),
            ..Default::default()
        }))
        .await
        .expect("tool call");
    assert_eq!(Some(true), result.is_error);
    assert_eq!(
        "at least one of name, note or layout_mode is required",
        result_text(&result)
    );
}
