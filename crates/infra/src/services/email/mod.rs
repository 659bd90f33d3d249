use anyhow::Context;
use reqwest::Client;
use serde::Serialize;
use std::sync::Mutex;
use tracing::error;

/// Outbound email delivery. The real implementation talks to an HTTP
/// relay; tests use the in-memory recorder.
#[async_trait::async_trait]
pub trait IEmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

pub struct HttpEmailService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpEmailService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct EmailPayload {
    to_addr: String,
    subject: String,
    text_body: String,
}

#[async_trait::async_trait]
impl IEmailService for HttpEmailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let payload = EmailPayload {
            to_addr: recipient.to_string(),
            subject: subject.to_string(),
            text_body: body.to_string(),
        };

        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("Email relay connection error")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            error!("Email relay failed. Status: {}, Body: {}", status, text);
            anyhow::bail!("Email relay failed with status: {}", status);
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Records sends instead of delivering them. Recipients listed in
/// `failing_recipients` error, for exercising partial-failure paths.
pub struct InMemoryEmailService {
    pub sent: Mutex<Vec<SentEmail>>,
    pub failing_recipients: Mutex<Vec<String>>,
}

impl InMemoryEmailService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_recipients: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_for(&self, recipient: &str) {
        self.failing_recipients
            .lock()
            .unwrap()
            .push(recipient.to_string());
    }
}

#[async_trait::async_trait]
impl IEmailService for InMemoryEmailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        if self
            .failing_recipients
            .lock()
            .unwrap()
            .iter()
            .any(|r| r == recipient)
        {
            anyhow::bail!("Delivery to {} refused", recipient);
        }
        self.sent.lock().unwrap().push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
