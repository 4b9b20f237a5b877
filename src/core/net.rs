// src/core/net.rs
// Status page fetch over plain HTTP with a pre-built Basic auth header.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::{blocking::Client, header::AUTHORIZATION};

use crate::config::Modem;
use crate::error::{Error, Result};

/// Source of the raw status page HTML. One call = one GET, no retries.
pub trait Fetch: Send + Sync {
    fn fetch(&self) -> Result<String>;
}

/// base64 of "username:password", the credential part of a Basic auth header.
pub fn basic_auth(username: &str, password: &str) -> String {
    STANDARD.encode(join!(username, ":", password))
}

pub struct HttpFetcher {
    client: Client,
    url: String,
    auth_header: String,
}

impl HttpFetcher {
    /// The client never times out unless `modem.timeout` is set.
    pub fn new(modem: &Modem) -> Result<Self> {
        let client = Client::builder()
            .timeout(modem.timeout)
            .user_agent(concat!("netgear_cm_exporter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: modem.status_url(),
            auth_header: join!("Basic ", &basic_auth(&modem.username, &modem.password)),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self) -> Result<String> {
        logd!("Fetch: GET {}", self.url);
        let resp = self
            .client
            .get(&self.url)
            .header(AUTHORIZATION, &self.auth_header)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url: self.url.clone() });
        }

        let body = resp.text()?;
        logd!("Fetch: {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
