//! Webhook push delivery.
//!
//! Posts the plain-text digest as `{"msg_type":"text","content":{"text":…}}`,
//! the shape the downstream chat-bot endpoint expects. Blocking, one shot,
//! no retries; a failed push is logged by the caller and the run result on
//! disk is unaffected.

use serde::Deserialize;
use std::time::Duration;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Acknowledgement body returned by the endpoint.
#[derive(Debug, Deserialize)]
struct WebhookAck {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    msg: String,
}

pub struct WebhookNotifier {
    url: String,
    client: reqwest::blocking::Client,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Deliver one text message. An HTTP error status or a non-zero
    /// acknowledgement code is a failure.
    pub fn send_text(&self, text: &str) -> anyhow::Result<()> {
        let body = serde_json::json!({
            "msg_type": "text",
            "content": { "text": text },
        });

        let response = self.client.post(&self.url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("webhook returned HTTP {}", status);
        }

        let ack: WebhookAck = response.json()?;
        if ack.code != 0 {
            anyhow::bail!("webhook rejected message: code={} msg={}", ack.code, ack.msg);
        }
        Ok(())
    }
}
