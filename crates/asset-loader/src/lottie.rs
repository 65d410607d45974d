//! Lottie Animation Fetching

use crate::AssetError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Timeout for each animation fetch
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Animation source URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Home-page education animation
    pub education_url: String,
    /// Low-risk result animation
    pub success_url: String,
    /// High-risk result animation
    pub warning_url: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            education_url: "https://assets7.lottiefiles.com/packages/lf20_jcikwtux.json"
                .to_string(),
            success_url: "https://assets2.lottiefiles.com/packages/lf20_jbrw3hcz.json"
                .to_string(),
            warning_url: "https://assets4.lottiefiles.com/packages/lf20_kxsd2ytq.json"
                .to_string(),
        }
    }
}

/// Fetched animation payloads; any of them may be absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationSet {
    pub education: Option<serde_json::Value>,
    pub success: Option<serde_json::Value>,
    pub warning: Option<serde_json::Value>,
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<serde_json::Value, AssetError> {
    let response = client.get(url).send().await?;
    let response = response.error_for_status()?;
    Ok(response.json().await?)
}

/// Fetch one Lottie animation, swallowing every failure.
///
/// Network errors, non-success statuses, and malformed bodies all
/// collapse to `None`; the dashboard simply omits that animation.
pub async fn fetch_lottie(client: &reqwest::Client, url: &str) -> Option<serde_json::Value> {
    match fetch(client, url).await {
        Ok(value) => {
            debug!("Fetched animation from {url}");
            Some(value)
        }
        Err(err) => {
            debug!("Animation fetch from {url} failed ({err}); skipping");
            None
        }
    }
}

/// Fetch the full animation set once, at startup
pub async fn load_animations(config: &AnimationConfig) -> AnimationSet {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            debug!("HTTP client build failed ({err}); skipping all animations");
            return AnimationSet::default();
        }
    };

    let set = AnimationSet {
        education: fetch_lottie(&client, &config.education_url).await,
        success: fetch_lottie(&client, &config.success_url).await,
        warning: fetch_lottie(&client, &config.warning_url).await,
    };

    info!(
        "Animation set loaded: education={}, success={}, warning={}",
        set.education.is_some(),
        set.success.is_some(),
        set.warning.is_some()
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_connection_refused_is_none() {
        let client = test_client();
        // Port 9 (discard) is not listening in the test environment
        let result = fetch_lottie(&client, "http://127.0.0.1:9/anim.json").await;
        assert!(result.is_none());
    }

    async fn serve_once(response: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{addr}/anim.json")
    }

    #[tokio::test]
    async fn test_malformed_body_is_none() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 8\r\n\r\nnot json",
        )
        .await;
        assert!(fetch_lottie(&test_client(), &url).await.is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_none() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n").await;
        assert!(fetch_lottie(&test_client(), &url).await.is_none());
    }

    #[tokio::test]
    async fn test_valid_json_body_is_some() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 13\r\n\r\n{\"v\":\"5.5.7\"}",
        )
        .await;
        let value = fetch_lottie(&test_client(), &url).await.unwrap();
        assert_eq!(value["v"], "5.5.7");
    }
}
