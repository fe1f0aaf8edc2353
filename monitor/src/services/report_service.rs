//! Dead-man's-switch ping delivery
//!
//! One base URL, two targets: the base itself for a healthy verdict and
//! `{base}/fail` for an unhealthy one. The monitoring service alerts when
//! success pings stop arriving or an explicit failure ping lands.

use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::Client;
use tokio::time::timeout;
use tracing::info;

use crate::errors::{ConfigError, MonitorError};

pub struct ReportService {
    base_url: String,
    node_id: String,
    client: Client,
    timeout: Duration,
}

impl ReportService {
    pub fn new(
        base_url: String,
        node_id: String,
        timeout: Duration,
    ) -> Result<Self, MonitorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            base_url,
            node_id,
            client,
            timeout,
        })
    }

    /// Ping the success target with the status report as body
    pub async fn report_success(&self, report: &str) -> Result<(), MonitorError> {
        self.send_ping(self.base_url.clone(), report).await
    }

    /// Ping the failure target with the status report as body
    pub async fn report_failure(&self, report: &str) -> Result<(), MonitorError> {
        self.send_ping(format!("{}/fail", self.base_url), report).await
    }

    async fn send_ping(&self, url: String, report: &str) -> Result<(), MonitorError> {
        let response = timeout(
            self.timeout,
            self.client
                .post(&url)
                .header(USER_AGENT, self.node_id.as_str())
                .body(report.to_string())
                .send(),
        )
        .await
        .map_err(|_| MonitorError::Delivery {
            url: url.clone(),
            reason: format!("ping timed out after {}s", self.timeout.as_secs()),
        })?
        .map_err(|e| MonitorError::Delivery {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(MonitorError::Delivery {
                url,
                reason: format!("monitoring service returned HTTP {}", response.status()),
            });
        }

        info!("Ping delivered to {}", url);
        Ok(())
    }
}
