// End-to-end wizard session against a mocked Dashboard API.
#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portwiz_api::TransportConfig;
use portwiz_core::{ConfigPayload, CoreError, Session, Step, UseCase};

const TEST_KEY: &str = "0123456789abcdef";

async fn dashboard_with_wired_fixtures() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .and(header("X-Cisco-Meraki-API-Key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "org1", "name": "Acme"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/org1/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "net1", "name": "HQ"},
            {"id": "net2", "name": "Branch"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/networks/net1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"serial": "Q2XX-XXXX-XX01", "name": "Core", "model": "MS220-8P"},
            {"serial": "Q2XX-XXXX-XX02", "name": "AP-1", "model": "MR36"}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices/Q2XX-XXXX-XX01/switch/ports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"portId": "1", "name": "uplink"},
            {"portId": "3", "name": null}
        ])))
        .mount(&server)
        .await;

    server
}

fn session_for(server: &MockServer) -> Session {
    Session::start(
        &format!("{}/api/v1", server.uri()),
        SecretString::from(TEST_KEY),
        &TransportConfig::default(),
    )
    .expect("session should start with a non-blank key")
}

#[tokio::test]
async fn wired_flow_produces_expected_payload() {
    let server = dashboard_with_wired_fixtures().await;
    let mut session = session_for(&server);
    assert_eq!(session.wizard().step(), Step::SelectingContext);

    session.load_organizations().await.unwrap();
    session.select_organization("org1").await.unwrap();
    assert_eq!(session.wizard().networks().len(), 2);

    session.select_network("net1");
    session.select_use_case(UseCase::Wired);
    session
        .select_operation("MAC Whitelisting and VLAN Tagging")
        .unwrap();
    assert_eq!(session.advance().unwrap(), Step::ConfiguringParameters);

    session.load_parameter_options().await.unwrap();
    // the MR access point is filtered out of the device list
    assert_eq!(session.wizard().devices().len(), 1);

    let ports = session.select_device("Q2XX-XXXX-XX01").await.unwrap();
    assert_eq!(ports.len(), 2);

    session.wizard_mut().set_vlan("120");
    session.wizard_mut().set_mac("AA:BB:CC:DD:EE:FF");
    session.wizard_mut().select_port("3");
    assert_eq!(session.advance().unwrap(), Step::Complete);

    let payload = session.assemble().unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "orgId": "org1",
            "networkId": "net1",
            "serialNumber": "Q2XX-XXXX-XX01",
            "vlan": "120",
            "macId": "aa:bb:cc:dd:ee:ff",
            "portNumber": "3"
        })
    );
}

#[tokio::test]
async fn selection_names_are_resolved_from_loaded_lists() {
    let server = dashboard_with_wired_fixtures().await;
    let mut session = session_for(&server);

    session.load_organizations().await.unwrap();
    session.select_organization("org1").await.unwrap();
    assert_eq!(session.wizard().draft().organization_name, "Acme");

    session.select_network("net1");
    assert_eq!(session.wizard().draft().network_name, "HQ");

    session.select_use_case(UseCase::Wired);
    session.load_parameter_options().await.unwrap();
    session.select_device("Q2XX-XXXX-XX01").await.unwrap();
    assert_eq!(session.wizard().draft().device_name, "Core");
}

#[tokio::test]
async fn parameter_load_requires_context() {
    let server = dashboard_with_wired_fixtures().await;
    let mut session = session_for(&server);

    let err = session.load_parameter_options().await.unwrap_err();
    assert!(matches!(err, CoreError::ValidationFailed { .. }));
}

#[tokio::test]
async fn webhook_failure_leaves_session_intact() {
    let server = dashboard_with_wired_fixtures().await;
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&hook)
        .await;

    let mut session = session_for(&server);
    session.load_organizations().await.unwrap();
    session.select_organization("org1").await.unwrap();
    session.select_network("net1");
    session.select_use_case(UseCase::Wired);
    session
        .select_operation("MAC Whitelisting and VLAN Tagging")
        .unwrap();
    session.advance().unwrap();
    session.load_parameter_options().await.unwrap();
    session.select_device("Q2XX-XXXX-XX01").await.unwrap();
    session.wizard_mut().set_vlan("120");
    session.wizard_mut().set_mac("aa:bb:cc:dd:ee:ff");
    session.wizard_mut().select_port("3");
    session.advance().unwrap();

    let url = Url::parse(&format!("{}/hook", hook.uri())).unwrap();
    let err = session
        .forward_to_webhook(&url, &TransportConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::WebhookFailed { .. }));

    // failure is reportable, not destructive
    assert_eq!(session.wizard().step(), Step::Complete);
    assert!(matches!(
        session.assemble().unwrap(),
        ConfigPayload::Wired(_)
    ));
}

#[tokio::test]
async fn webhook_delivery_includes_envelope_fields() {
    let server = dashboard_with_wired_fixtures().await;
    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(wiremock::matchers::body_partial_json(json!({
            "orgId": "org1",
            "portNumber": "3",
            "source": "portwiz"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&hook)
        .await;

    let mut session = session_for(&server);
    session.load_organizations().await.unwrap();
    session.select_organization("org1").await.unwrap();
    session.select_network("net1");
    session.select_use_case(UseCase::Wired);
    session
        .select_operation("MAC Whitelisting and VLAN Tagging")
        .unwrap();
    session.advance().unwrap();
    session.load_parameter_options().await.unwrap();
    session.select_device("Q2XX-XXXX-XX01").await.unwrap();
    session.wizard_mut().set_vlan("120");
    session.wizard_mut().set_mac("aa:bb:cc:dd:ee:ff");
    session.wizard_mut().select_port("3");
    session.advance().unwrap();

    let url = Url::parse(&format!("{}/hook", hook.uri())).unwrap();
    session
        .forward_to_webhook(&url, &TransportConfig::default())
        .await
        .unwrap();
}
