// Remote agent access: authenticated XML-over-HTTP report requests

use std::time::Duration;

use anyhow::Context;
use tracing::{debug, warn};

use crate::report;

pub struct AgentRepo {
    client: reqwest::blocking::Client,
    url: String,
    username: String,
    password: String,
}

impl AgentRepo {
    /// Build a client for one agent service point. The address may carry a
    /// port (`host:port`).
    pub fn connect(
        address: &str,
        service_point: &str,
        username: &str,
        password: &str,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            url: format!("http://{}/{}", address, service_point),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// POST a report request for one attribute group and return the raw
    /// response body. A non-success status is "no data", not an error:
    /// logged and returned as `None`. Transport failures still propagate.
    pub fn fetch(&self, group: &str, subnodes: &[String]) -> anyhow::Result<Option<String>> {
        let body = report::request_body(group, subnodes);
        debug!("POST {} ({} bytes)", self.url, body.len());
        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Content-Type", "text/xml")
            .body(body)
            .send()
            .with_context(|| format!("POST {}", self.url))?;
        let status = response.status();
        if !status.is_success() {
            warn!("agent returned HTTP {} for {}; treating as no data", status, group);
            return Ok(None);
        }
        let text = response.text().context("reading agent response body")?;
        Ok(Some(text))
    }
}
