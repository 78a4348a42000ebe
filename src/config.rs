use std::time::Duration;

use crate::error::AppError;

/// JointSpace listens on 1926 for HTTPS on Android TVs.
pub const DEFAULT_PORT: u16 = 1926;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
}

/// Where and how to reach the TV.
#[derive(Debug, Clone)]
pub struct TvConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// TVs ship self-signed certificates.
    pub accept_invalid_certs: bool,
}

impl TvConfig {
    /// Resolve the base URL from an explicit URL or a bare host.
    ///
    /// An explicit URL wins; a host becomes `https://<host>:1926`.
    pub fn resolve(
        url: Option<&str>,
        host: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, AppError> {
        let base_url = match (url, host) {
            (Some(url), _) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            (_, Some(host)) if !host.is_empty() => {
                if host.contains(':') {
                    format!("https://{}", host)
                } else {
                    format!("https://{}:{}", host, DEFAULT_PORT)
                }
            }
            _ => {
                return Err(AppError::InvalidInput(
                    "TV host is required. Pass --host or set AMBICTL_HOST.".into(),
                ))
            }
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            accept_invalid_certs: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_host() {
        let config = TvConfig::resolve(None, Some("192.168.1.20"), 5).unwrap();
        assert_eq!(config.base_url, "https://192.168.1.20:1926");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_host_with_port() {
        let config = TvConfig::resolve(None, Some("tv.local:1925"), 5).unwrap();
        assert_eq!(config.base_url, "https://tv.local:1925");
    }

    #[test]
    fn test_url_wins_over_host() {
        let config =
            TvConfig::resolve(Some("http://127.0.0.1:8080/"), Some("192.168.1.20"), 5).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_missing_host() {
        let err = TvConfig::resolve(None, None, 5).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
