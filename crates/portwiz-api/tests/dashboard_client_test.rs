// Integration tests for `DashboardClient` using wiremock.
#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portwiz_api::types::{Device, Network, Organization, Ssid, SwitchPort};
use portwiz_api::{DashboardClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DashboardClient) {
    let server = MockServer::start().await;
    let client = DashboardClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Constructor / credential checks ─────────────────────────────────

#[test]
fn test_blank_api_key_fails_fast() {
    let result = DashboardClient::from_api_key(
        "https://api.meraki.com/api/v1",
        &SecretString::from("   ".to_string()),
        &TransportConfig::default(),
    );
    assert!(
        matches!(result, Err(Error::MissingApiKey)),
        "expected MissingApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_api_key_header_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(header("X-Cisco-Meraki-API-Key", "secret-key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = DashboardClient::from_api_key(
        &server.uri(),
        &SecretString::from("secret-key-123".to_string()),
        &TransportConfig::default(),
    )
    .unwrap();

    let orgs: Vec<Organization> = client.list_organizations().await.unwrap();
    assert!(orgs.is_empty());
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_organizations() {
    let (server, client) = setup().await;

    let body = json!([
        { "id": "org1", "name": "Acme Corp" },
        { "id": "org2", "name": "Globex" },
    ]);

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let orgs = client.list_organizations().await.unwrap();
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].id, "org1");
    assert_eq!(orgs[0].name, "Acme Corp");
    assert_eq!(orgs[1].name, "Globex");
}

#[tokio::test]
async fn test_list_networks() {
    let (server, client) = setup().await;

    let body = json!([
        { "id": "net1", "name": "HQ" },
        { "id": "net2", "name": "Branch" },
    ]);

    Mock::given(method("GET"))
        .and(path("/organizations/org1/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let nets: Vec<Network> = client.list_networks("org1").await.unwrap();
    assert_eq!(nets.len(), 2);
    assert_eq!(nets[1].id, "net2");
}

#[tokio::test]
async fn test_list_wireless_ssids_filters_disabled() {
    let (server, client) = setup().await;

    let body = json!([
        { "number": 0, "name": "Corp WiFi", "enabled": true },
        { "number": 1, "name": "Guest", "enabled": false },
        { "number": 2, "name": "IoT", "enabled": true },
    ]);

    Mock::given(method("GET"))
        .and(path("/networks/net1/wireless/ssids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let ssids: Vec<Ssid> = client.list_wireless_ssids("net1").await.unwrap();
    assert_eq!(ssids.len(), 2);
    assert_eq!(ssids[0].number, 0);
    assert_eq!(ssids[1].name, "IoT");
    assert!(ssids.iter().all(|s| s.enabled));
}

#[tokio::test]
async fn test_list_network_devices_filters_non_switches() {
    let (server, client) = setup().await;

    let body = json!([
        { "serial": "Q2XX-XXXX-XX01", "name": "Core Switch", "model": "MS220-8P" },
        { "serial": "Q2XX-XXXX-XX02", "name": "Lobby AP", "model": "MR33" },
        { "serial": "Q2XX-XXXX-XX03", "name": null, "model": "Catalyst switch 9300" },
    ]);

    Mock::given(method("GET"))
        .and(path("/networks/net1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices: Vec<Device> = client.list_network_devices("net1").await.unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].serial, "Q2XX-XXXX-XX01");
    assert_eq!(devices[0].label(), "Core Switch");
    // no name -> falls back to the model string
    assert_eq!(devices[1].label(), "Catalyst switch 9300");
}

#[tokio::test]
async fn test_list_switch_ports() {
    let (server, client) = setup().await;

    let body = json!([
        { "portId": "1", "name": "Uplink" },
        { "portId": "2", "name": null },
        { "portId": "3" },
    ]);

    Mock::given(method("GET"))
        .and(path("/devices/Q2XX-XXXX-XX01/switch/ports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let ports: Vec<SwitchPort> = client.list_switch_ports("Q2XX-XXXX-XX01").await.unwrap();
    assert_eq!(ports.len(), 3);
    assert_eq!(ports[0].port_id, "1");
    assert_eq!(ports[0].name.as_deref(), Some("Uplink"));
    assert!(ports[2].name.is_none());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_401_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_organizations().await;
    assert!(
        matches!(result, Err(Error::InvalidApiKey)),
        "expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_404_embeds_status_and_reason() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/networks/missing/devices"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.list_network_devices("missing").await;
    match result {
        Err(Error::Api {
            status,
            ref message,
        }) => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"), "message: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.list_organizations().await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("expected Api 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.list_organizations().await;
    match result {
        Err(Error::Deserialization { body, .. }) => assert_eq!(body, "not json"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_preview_handles_multibyte_at_cutoff() {
    let (server, client) = setup().await;

    // a multi-byte char straddling the 200-byte preview cutoff must
    // still produce an error, not a slice panic
    let mut body = "a".repeat(199);
    body.push('é');
    body.push_str(&"a".repeat(50));

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let result = client.list_organizations().await;
    match result {
        Err(Error::Deserialization { body: kept, .. }) => assert_eq!(kept, body),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Webhook tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_webhook_post_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url: url::Url = format!("{}/hook", server.uri()).parse().unwrap();
    let body = json!({ "orgId": "org1", "source": "portwiz" });

    let hook = portwiz_api::WebhookClient::from_reqwest(reqwest::Client::new());
    hook.deliver(&url, &body).await.unwrap();
}

#[tokio::test]
async fn test_webhook_post_non_2xx_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url: url::Url = format!("{}/hook", server.uri()).parse().unwrap();
    let body = json!({ "orgId": "org1" });

    let hook = portwiz_api::WebhookClient::from_reqwest(reqwest::Client::new());
    let result = hook.deliver(&url, &body).await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("webhook delivery failed"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
