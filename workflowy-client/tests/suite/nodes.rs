use pretty_assertions::assert_eq;
use serde_json::json;
use workflowy_client::ClientOptions;
use workflowy_client::WorkflowyClient;
use workflowy_protocol::CreateNodeRequest;
use workflowy_protocol::MoveNodeRequest;
use workflowy_protocol::UpdateNodeRequest;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

fn client(server: &MockServer) -> WorkflowyClient {
    WorkflowyClient::new(ClientOptions::new("secret-token").with_base_url(server.uri()))
        .expect("client should build")
}

fn ok_status() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": "ok"}))
}

#[tokio::test]
async fn export_sends_bearer_token_and_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/nodes-export"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [
                {"id": "a", "name": "Home", "priority": 0},
                {"id": "b", "name": "Groceries", "parent_id": "a", "priority": 1}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let nodes = client(&server).export_nodes().await.unwrap();
    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(vec!["a", "b"], ids);
    assert_eq!(Some("a"), nodes[1].parent());
}

#[tokio::test]
async fn list_children_passes_parent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/nodes"))
        .and(query_param("parent_id", "inbox"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"nodes": [{"id": "x", "name": "X"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let nodes = client(&server).list_children("inbox").await.unwrap();
    assert_eq!(1, nodes.len());
}

#[tokio::test]
async fn create_posts_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/nodes"))
        .and(body_json(json!({
            "parent_id": "home",
            "name": "Plan trip",
            "note": "June",
            "position": "bottom"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"item_id": "new-id"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_node(&CreateNodeRequest {
            parent_id: "home".to_string(),
            name: "Plan trip".to_string(),
            note: "June".to_string(),
            layout_mode: String::new(),
            position: "bottom".to_string(),
        })
        .await
        .unwrap();
    assert_eq!("new-id", created.item_id);
}

#[tokio::test]
async fn mutations_hit_their_endpoints() {
    let server = MockServer::start().await;
    for (verb, route) in [
        ("POST", "/api/v1/nodes/n1"),
        ("DELETE", "/api/v1/nodes/n1"),
        ("POST", "/api/v1/nodes/n1/move"),
        ("POST", "/api/v1/nodes/n1/complete"),
        ("POST", "/api/v1/nodes/n1/uncomplete"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ok_status())
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client(&server);
    client
        .update_node(
            "n1",
            &UpdateNodeRequest {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    client.delete_node("n1").await.unwrap();
    client
        .move_node(
            "n1",
            &MoveNodeRequest {
                parent_id: "home".to_string(),
                position: "top".to_string(),
            },
        )
        .await
        .unwrap();
    client.complete_node("n1").await.unwrap();
    client.uncomplete_node("n1").await.unwrap();
}

#[tokio::test]
async fn api_errors_carry_operation_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/nodes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client(&server).get_node("missing").await.unwrap_err();
    assert_eq!(
        "getting node missing: API error (status 404): not found",
        format!("{err:#}")
    );
}

#[tokio::test]
async fn list_targets_reads_type_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/targets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "targets": [{"key": "inbox", "type": "system", "name": null}]
        })))
        .mount(&server)
        .await;

    let targets = client(&server).list_targets().await.unwrap();
    assert_eq!("system", targets[0].kind);
    assert_eq!(None, targets[0].name);
}
