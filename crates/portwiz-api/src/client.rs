// Hand-crafted async HTTP client for the Meraki Dashboard API (v1).
//
// Base path: /api/v1/
// Auth: X-Cisco-Meraki-API-Key header

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{Device, Network, Organization, Ssid, SwitchPort};

/// Public dashboard endpoint. Overridable for local proxies.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1/";

/// Async client for the Meraki Dashboard API.
///
/// Uses API-key authentication and communicates via JSON REST endpoints
/// under `/api/v1/`. Each operation issues exactly one request; there is
/// no pagination and no retry — callers retry by repeating the action.
#[derive(Debug)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DashboardClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `X-Cisco-Meraki-API-Key` as a sensitive default header on
    /// every request. A blank key fails fast with [`Error::MissingApiKey`]
    /// before any network traffic.
    pub fn from_api_key(
        base_url: &str,
        api_key: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|_| Error::MissingApiKey)?;
        key_value.set_sensitive(true);
        headers.insert("X-Cisco-Meraki-API-Key", key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base URL ends with a single trailing slash so joining
    /// relative paths keeps the `/api/v1` prefix.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"organizations"`) onto the base URL.
    /// base_url always ends with `/`, so joining relative paths works.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // clamp to a char boundary so a multi-byte char straddling
                // the cutoff cannot panic the slice
                let mut end = body.len().min(200);
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                let preview = &body[..end];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::status_error(status, resp).await)
        }
    }

    async fn status_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidApiKey;
        }

        let reason = status.canonical_reason().unwrap_or("");
        let raw = resp.text().await.unwrap_or_default();

        Error::Api {
            status: status.as_u16(),
            message: if raw.is_empty() {
                reason.to_owned()
            } else {
                format!("{reason}: {raw}")
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Organizations ────────────────────────────────────────────────

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, Error> {
        self.get("organizations").await
    }

    // ── Networks ─────────────────────────────────────────────────────

    pub async fn list_networks(&self, organization_id: &str) -> Result<Vec<Network>, Error> {
        self.get(&format!("organizations/{organization_id}/networks"))
            .await
    }

    // ── Wireless SSIDs ───────────────────────────────────────────────

    /// List SSIDs on a network, keeping only enabled slots.
    pub async fn list_wireless_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, Error> {
        let ssids: Vec<Ssid> = self
            .get(&format!("networks/{network_id}/wireless/ssids"))
            .await?;
        Ok(ssids.into_iter().filter(|s| s.enabled).collect())
    }

    // ── Devices ──────────────────────────────────────────────────────

    /// List devices on a network, keeping only switch-class models.
    pub async fn list_network_devices(&self, network_id: &str) -> Result<Vec<Device>, Error> {
        let devices: Vec<Device> = self.get(&format!("networks/{network_id}/devices")).await?;
        Ok(devices.into_iter().filter(Device::is_switch).collect())
    }

    // ── Switch ports ─────────────────────────────────────────────────

    pub async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, Error> {
        self.get(&format!("devices/{serial}/switch/ports")).await
    }
}
