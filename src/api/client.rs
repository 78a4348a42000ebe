use async_trait::async_trait;
use reqwest::StatusCode;

use super::connection::DeviceConnection;
use crate::config::TvConfig;
use crate::error::AppError;

const USER_AGENT: &str = concat!("ambictl/", env!("CARGO_PKG_VERSION"));

/// HTTPS client for a single TV.
pub struct TvClient {
    client: reqwest::Client,
    base_url: String,
}

fn build_http_client(config: &TvConfig) -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?)
}

impl TvClient {
    pub fn new(config: &TvConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client(config)?,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-2xx responses into errors, keeping the body for context.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = format!("{}: {}", status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Auth {
                message,
                status: status.as_u16(),
            }),
            _ => Err(AppError::Api {
                message,
                status: Some(status.as_u16()),
            }),
        }
    }
}

/// Map transport failures onto the TV's reachability.
fn classify_send_error(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        return AppError::DeviceOffline(format!("{}: request timed out", url));
    }
    if err.is_connect() {
        if is_connection_refused(&err) {
            return AppError::NotListening(format!("{}: connection refused", url));
        }
        return AppError::DeviceOffline(format!("{}: {}", url, err));
    }
    AppError::Http(err)
}

fn is_connection_refused(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = Some(err);
    while let Some(e) = source {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        source = e.source();
    }
    false
}

#[async_trait]
impl DeviceConnection for TvClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;

        tracing::debug!("Response: {}", String::from_utf8_lossy(&bytes));
        Ok(bytes.to_vec())
    }

    async fn post(&self, path: &str, body: &str) -> Result<(), AppError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        tracing::debug!("Body: {}", body);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let config = TvConfig::resolve(Some("https://10.0.0.5:1926"), None, 5).unwrap();
        let client = TvClient::new(&config).unwrap();
        assert_eq!(
            client.url("/6/ambilight/power"),
            "https://10.0.0.5:1926/6/ambilight/power"
        );
    }

    #[test]
    fn test_connection_refused_detection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(is_connection_refused(&io));

        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow");
        assert!(!is_connection_refused(&io));
    }
}
