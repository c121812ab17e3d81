use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Result of an uppercase call.
#[derive(Debug, Serialize, Deserialize)]
pub struct UppercaseResult {
    pub v: String,
    /// Rejection message; `None` on success. An empty input is reported
    /// here, not as a transport error.
    #[serde(default)]
    pub err: Option<String>,
}

/// Result of a count call.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResult {
    pub v: u64,
}

pub struct StringClient {
    client: Client,
    base_url: String,
}

impl StringClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Uppercase `text` via the service.
    pub async fn uppercase(
        &self,
        text: &str,
    ) -> Result<UppercaseResult, Box<dyn std::error::Error>> {
        self.call("/uppercase", text).await
    }

    /// Count the characters in `text` via the service.
    pub async fn count(&self, text: &str) -> Result<CountResult, Box<dyn std::error::Error>> {
        self.call("/count", text).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        text: &str,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&serde_json::json!({ "s": text }))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(format!("service returned status {}: {}", status, body).into());
        }

        match serde_json::from_str::<T>(&body) {
            Ok(result) => Ok(result),
            Err(e) => Err(e.into()),
        }
    }
}
